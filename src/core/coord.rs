//! Board coordinates, directions and moves.
//!
//! ## Coord
//!
//! A square on the 8×8 board, addressed as `(row, col)`. Rows grow "south"
//! (row 0 is `Minus`'s home row, row 7 is `Plus`'s).
//!
//! ## Move
//!
//! An orthogonal slide from one square to another. A `Move` only knows its
//! geometry; whether the path is clear depends on the board and is the
//! move generator's concern.

use serde::{Deserialize, Serialize};

use super::error::{PetteiaError, Result};

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 8;

/// A square on the board. Both components are in `[0, 8)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    /// Create a coordinate, returning `None` if it falls off the board.
    #[must_use]
    pub const fn try_new(row: usize, col: usize) -> Option<Coord> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Coord {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Create a coordinate.
    ///
    /// Panics if either component is outside `[0, 8)`.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Coord {
        assert!(row < BOARD_SIZE && col < BOARD_SIZE, "Coordinate off the board");
        Coord {
            row: row as u8,
            col: col as u8,
        }
    }

    /// Row index (0 = north edge).
    #[must_use]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    /// Column index (0 = west edge).
    #[must_use]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// Iterate over all 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Coord::new(row, col)))
    }

    /// The neighbouring square in `direction`, or `None` at the board edge.
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<Coord> {
        let (dr, dc) = direction.delta();
        let row = self.row as isize + dr;
        let col = self.col as isize + dc;
        if row < 0 || col < 0 {
            return None;
        }
        Coord::try_new(row as usize, col as usize)
    }

    /// Walk outward from this square (exclusive) until the board edge.
    ///
    /// ```
    /// use petteia::core::{Coord, Direction};
    ///
    /// let ray: Vec<_> = Coord::new(1, 5).ray(Direction::North).collect();
    /// assert_eq!(ray, vec![Coord::new(0, 5)]);
    /// assert_eq!(Coord::new(0, 5).ray(Direction::North).count(), 0);
    /// ```
    pub fn ray(self, direction: Direction) -> Ray {
        Ray {
            next: self.step(direction),
            direction,
        }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Iterator over the squares along one direction. See [`Coord::ray`].
#[derive(Clone, Debug)]
pub struct Ray {
    next: Option<Coord>,
    direction: Direction,
}

impl Iterator for Ray {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        let current = self.next?;
        self.next = current.step(self.direction);
        Some(current)
    }
}

/// One of the four orthogonal directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Decreasing row.
    North,
    /// Increasing row.
    South,
    /// Decreasing column.
    West,
    /// Increasing column.
    East,
}

impl Direction {
    /// All directions in scan order. Move enumeration depends on this order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    const fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
            Direction::East => (0, 1),
        }
    }
}

/// An orthogonal slide between two distinct squares.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    from: Coord,
    to: Coord,
}

impl Move {
    /// Create a move, checking that it is an orthogonal slide.
    ///
    /// Exactly one of row/column must differ between `from` and `to`.
    pub fn try_new(from: Coord, to: Coord) -> Result<Move> {
        let same_row = from.row == to.row;
        let same_col = from.col == to.col;
        if same_row == same_col {
            return Err(PetteiaError::NotOrthogonal { from, to });
        }
        Ok(Move { from, to })
    }

    /// Create a move the caller already knows is orthogonal.
    pub(crate) fn slide(from: Coord, to: Coord) -> Move {
        debug_assert!((from.row == to.row) != (from.col == to.col));
        Move { from, to }
    }

    /// Source square.
    #[must_use]
    pub const fn from(self) -> Coord {
        self.from
    }

    /// Destination square.
    #[must_use]
    pub const fn to(self) -> Coord {
        self.to
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coord_bounds() {
        assert!(Coord::try_new(7, 7).is_some());
        assert!(Coord::try_new(8, 0).is_none());
        assert!(Coord::try_new(0, 8).is_none());
    }

    #[test]
    #[should_panic(expected = "Coordinate off the board")]
    fn test_coord_new_off_board() {
        let _ = Coord::new(8, 8);
    }

    #[test]
    fn test_coord_all_row_major() {
        let all: Vec<_> = Coord::all().collect();
        assert_eq!(all.len(), 64);
        assert_eq!(all[0], Coord::new(0, 0));
        assert_eq!(all[1], Coord::new(0, 1));
        assert_eq!(all[8], Coord::new(1, 0));
        assert_eq!(all[63], Coord::new(7, 7));
    }

    #[test]
    fn test_step_at_edges() {
        assert_eq!(Coord::new(0, 3).step(Direction::North), None);
        assert_eq!(Coord::new(7, 3).step(Direction::South), None);
        assert_eq!(Coord::new(3, 0).step(Direction::West), None);
        assert_eq!(Coord::new(3, 7).step(Direction::East), None);
        assert_eq!(Coord::new(3, 3).step(Direction::East), Some(Coord::new(3, 4)));
    }

    #[test]
    fn test_ray_walks_to_edge() {
        let ray: Vec<_> = Coord::new(2, 4).ray(Direction::South).collect();
        assert_eq!(ray.len(), 5);
        assert_eq!(ray[0], Coord::new(3, 4));
        assert_eq!(ray[4], Coord::new(7, 4));

        let ray: Vec<_> = Coord::new(2, 4).ray(Direction::West).collect();
        assert_eq!(
            ray,
            vec![Coord::new(2, 3), Coord::new(2, 2), Coord::new(2, 1), Coord::new(2, 0)]
        );
    }

    #[test]
    fn test_move_validation() {
        let a = Coord::new(3, 3);
        assert!(Move::try_new(a, Coord::new(3, 6)).is_ok());
        assert!(Move::try_new(a, Coord::new(0, 3)).is_ok());
        assert_eq!(
            Move::try_new(a, a),
            Err(PetteiaError::NotOrthogonal { from: a, to: a })
        );
        assert!(Move::try_new(a, Coord::new(4, 4)).is_err());
    }

    #[test]
    fn test_move_display() {
        let mv = Move::try_new(Coord::new(7, 7), Coord::new(7, 6)).unwrap();
        assert_eq!(format!("{}", mv), "(7, 7) -> (7, 6)");
    }
}
