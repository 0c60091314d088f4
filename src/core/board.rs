//! The 8×8 Petteia board.
//!
//! ## Cell
//!
//! Each square is either empty or occupied by one player's piece. The host
//! framework speaks the signed encoding (`0`, `+1`, `-1`); `Cell::value` and
//! `Cell::from_value` convert at that boundary only.
//!
//! ## Board
//!
//! A fixed-size grid stored inline, so copying a board is a 64-byte memcpy.
//! Every rules operation takes a board by reference and returns a new one.

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::ops::{Index, IndexMut};

use super::coord::{Coord, BOARD_SIZE};
use super::error::{PetteiaError, Result};
use super::player::Player;

const HEADER: &str = "    0   1   2   3   4   5   6   7   \n";

/// Contents of a single square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Player),
}

impl Cell {
    /// Signed encoding: `0` for empty, otherwise the owner's sign.
    #[must_use]
    pub const fn value(self) -> i8 {
        match self {
            Cell::Empty => 0,
            Cell::Occupied(player) => player.sign(),
        }
    }

    /// Parse the signed encoding.
    pub fn from_value(value: i64) -> Result<Cell> {
        if value == 0 {
            return Ok(Cell::Empty);
        }
        Player::from_sign(value)
            .map(Cell::Occupied)
            .ok_or(PetteiaError::InvalidCellValue(value))
    }

    /// Owner of the piece on this square, if any.
    #[must_use]
    pub const fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    /// Check if the square is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Check if the square holds `player`'s piece.
    #[must_use]
    pub fn is_owned_by(self, player: Player) -> bool {
        self == Cell::Occupied(player)
    }

    /// Relabel the owner so that `player` becomes `Plus`.
    ///
    /// Matches multiplying the signed value by `player.sign()`.
    #[must_use]
    pub fn relative_to(self, player: Player) -> Cell {
        match (self, player) {
            (Cell::Occupied(owner), Player::Minus) => Cell::Occupied(owner.opponent()),
            _ => self,
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Empty => write!(f, "empty"),
            Cell::Occupied(player) => write!(f, "occupied by {}", player),
        }
    }
}

/// An 8×8 grid of cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// A board with no pieces.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// The starting position: `Minus` fills row 0, `Plus` fills row 7.
    ///
    /// ```
    /// use petteia::core::{Board, Player};
    ///
    /// let board = Board::initial();
    /// assert_eq!(board.count(Player::Plus), 8);
    /// assert_eq!(board.count(Player::Minus), 8);
    /// ```
    #[must_use]
    pub const fn initial() -> Self {
        let mut cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        cells[0] = [Cell::Occupied(Player::Minus); BOARD_SIZE];
        cells[BOARD_SIZE - 1] = [Cell::Occupied(Player::Plus); BOARD_SIZE];
        Self { cells }
    }

    /// Get the cell at `coord`.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[coord.row()][coord.col()]
    }

    /// Set the cell at `coord`.
    pub fn set(&mut self, coord: Coord, cell: Cell) {
        self.cells[coord.row()][coord.col()] = cell;
    }

    /// Place a piece for `player` at `coord`. Shorthand for building positions.
    pub fn place(&mut self, coord: Coord, player: Player) {
        self.set(coord, Cell::Occupied(player));
    }

    /// Iterate over `(coord, cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        Coord::all().map(move |coord| (coord, self.get(coord)))
    }

    /// Squares holding `player`'s pieces, row-major.
    pub fn pieces(&self, player: Player) -> impl Iterator<Item = Coord> + '_ {
        self.iter()
            .filter(move |&(_, cell)| cell.is_owned_by(player))
            .map(|(coord, _)| coord)
    }

    /// Number of pieces `player` has on the board.
    #[must_use]
    pub fn count(&self, player: Player) -> usize {
        self.pieces(player).count()
    }

    /// Number of cells with a positive signed value.
    ///
    /// Always counts `Plus`, whoever is asking.
    #[must_use]
    pub fn positive_count(&self) -> usize {
        self.count(Player::Plus)
    }

    /// Number of occupied squares.
    #[must_use]
    pub fn occupied(&self) -> usize {
        self.iter().filter(|(_, cell)| !cell.is_empty()).count()
    }

    /// The board seen from `player`'s side: their pieces become `Plus`.
    ///
    /// Equal, cell for cell, to multiplying the signed board by
    /// `player.sign()`.
    #[must_use]
    pub fn canonical(&self, player: Player) -> Board {
        let mut out = *self;
        for row in out.cells.iter_mut() {
            for cell in row.iter_mut() {
                *cell = cell.relative_to(player);
            }
        }
        out
    }

    /// Signed encoding, row-major.
    #[must_use]
    pub fn to_values(&self) -> [[i8; BOARD_SIZE]; BOARD_SIZE] {
        let mut values = [[0i8; BOARD_SIZE]; BOARD_SIZE];
        for (coord, cell) in self.iter() {
            values[coord.row()][coord.col()] = cell.value();
        }
        values
    }

    /// Build a board from its signed encoding.
    ///
    /// Accepts any 8×8 grid of integers; rejects wrong shapes and values
    /// outside `{-1, 0, 1}`.
    pub fn from_values<R, V>(rows: &[R]) -> Result<Board>
    where
        R: AsRef<[V]>,
        V: Copy + Into<i64>,
    {
        if rows.len() != BOARD_SIZE {
            return Err(PetteiaError::WrongLength {
                expected: BOARD_SIZE,
                found: rows.len(),
            });
        }
        let mut board = Board::empty();
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != BOARD_SIZE {
                return Err(PetteiaError::WrongLength {
                    expected: BOARD_SIZE,
                    found: values.len(),
                });
            }
            for (col, &value) in values.iter().enumerate() {
                board.cells[row][col] = Cell::from_value(value.into())?;
            }
        }
        Ok(board)
    }

    /// Human-readable grid with column headers and row prefixes.
    ///
    /// Also serves as the string key hosts use for hashing positions.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(36 * (BOARD_SIZE + 1));
        out.push_str(HEADER);
        for (row, cells) in self.cells.iter().enumerate() {
            let _ = write!(out, "{} |", row);
            for cell in cells {
                out.push_str(match cell {
                    Cell::Occupied(Player::Minus) => " - |",
                    Cell::Occupied(Player::Plus) => " + |",
                    Cell::Empty => "   |",
                });
            }
            out.push('\n');
        }
        out
    }
}

impl Index<Coord> for Board {
    type Output = Cell;

    fn index(&self, coord: Coord) -> &Self::Output {
        &self.cells[coord.row()][coord.col()]
    }
}

impl IndexMut<Coord> for Board {
    fn index_mut(&mut self, coord: Coord) -> &mut Self::Output {
        &mut self.cells[coord.row()][coord.col()]
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_board() {
        let board = Board::initial();
        for col in 0..BOARD_SIZE {
            assert_eq!(board[Coord::new(0, col)], Cell::Occupied(Player::Minus));
            assert_eq!(board[Coord::new(7, col)], Cell::Occupied(Player::Plus));
        }
        assert_eq!(board.occupied(), 16);
        for row in 1..7 {
            for col in 0..BOARD_SIZE {
                assert!(board[Coord::new(row, col)].is_empty());
            }
        }
    }

    #[test]
    fn test_cell_values() {
        assert_eq!(Cell::Empty.value(), 0);
        assert_eq!(Cell::Occupied(Player::Plus).value(), 1);
        assert_eq!(Cell::Occupied(Player::Minus).value(), -1);
        assert_eq!(Cell::from_value(-1), Ok(Cell::Occupied(Player::Minus)));
        assert_eq!(Cell::from_value(3), Err(PetteiaError::InvalidCellValue(3)));
    }

    #[test]
    fn test_canonical_matches_sign_multiplication() {
        let mut board = Board::initial();
        board.place(Coord::new(3, 3), Player::Plus);
        board.set(Coord::new(7, 0), Cell::Empty);

        assert_eq!(board.canonical(Player::Plus), board);

        let flipped = board.canonical(Player::Minus).to_values();
        let original = board.to_values();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                assert_eq!(flipped[row][col], -original[row][col]);
            }
        }
    }

    #[test]
    fn test_values_roundtrip() {
        let board = Board::initial();
        let values = board.to_values();
        assert_eq!(Board::from_values(&values).unwrap(), board);
    }

    #[test]
    fn test_from_values_rejects_bad_input() {
        let short = vec![vec![0i64; 8]; 7];
        assert_eq!(
            Board::from_values(&short),
            Err(PetteiaError::WrongLength { expected: 8, found: 7 })
        );

        let mut bad = vec![vec![0i64; 8]; 8];
        bad[2][5] = 2;
        assert_eq!(Board::from_values(&bad), Err(PetteiaError::InvalidCellValue(2)));
    }

    #[test]
    fn test_render_initial() {
        let text = Board::initial().render();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "    0   1   2   3   4   5   6   7   ");
        assert_eq!(lines[1], "0 | - | - | - | - | - | - | - | - |");
        assert_eq!(lines[4], "3 |   |   |   |   |   |   |   |   |");
        assert_eq!(lines[8], "7 | + | + | + | + | + | + | + | + |");
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_board_serialization() {
        let board = Board::initial();
        let json = serde_json::to_string(&board).unwrap();
        let deserialized: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, deserialized);
    }
}
