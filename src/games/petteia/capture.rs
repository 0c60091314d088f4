//! Custodian capture and move application.
//!
//! After a piece lands, each of the four directions is scanned on its own.
//! A contiguous run of enemy pieces next to the landing square is captured
//! when a friendly piece sits directly beyond its far end. Captures on
//! several sides of the landing square happen together.

use log::{debug, trace, warn};
use smallvec::SmallVec;

use crate::core::{Board, Cell, Coord, Direction, Move, PetteiaError, Player, Result};

/// Captured squares. A single move takes at most ten pieces.
pub type Captures = SmallVec<[Coord; 8]>;

/// How a scan from the landing square ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunEnd {
    /// A friendly piece closed the run: the run is captured.
    Flanked,
    /// An empty square ended the run: nothing is captured.
    OpenSquare,
    /// The board edge ended the run: nothing is captured.
    BoardEdge,
}

/// Result of scanning one direction from a landing square.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectionScan {
    /// Enemy pieces adjacent to the landing square, nearest first.
    pub run: Captures,
    /// What stopped the scan.
    pub end: RunEnd,
}

impl DirectionScan {
    /// The squares this scan captures, if any.
    #[must_use]
    pub fn captured(&self) -> &[Coord] {
        match self.end {
            RunEnd::Flanked => self.run.as_slice(),
            RunEnd::OpenSquare | RunEnd::BoardEdge => &[],
        }
    }
}

/// Scan outward from `origin` in one direction for `player`.
///
/// A friendly piece directly next to `origin` ends the scan as `Flanked`
/// with an empty run, which captures nothing.
pub fn scan_direction(board: &Board, origin: Coord, direction: Direction, player: Player) -> DirectionScan {
    let mut run = Captures::new();
    for square in origin.ray(direction) {
        match board[square] {
            Cell::Occupied(owner) if owner == player => {
                return DirectionScan {
                    run,
                    end: RunEnd::Flanked,
                };
            }
            Cell::Occupied(_) => run.push(square),
            Cell::Empty => {
                return DirectionScan {
                    run,
                    end: RunEnd::OpenSquare,
                };
            }
        }
    }
    DirectionScan {
        run,
        end: RunEnd::BoardEdge,
    }
}

/// Find every enemy piece `player` captures by standing on `destination`.
///
/// Directions are reported in `Direction::ALL` order.
pub fn find_captures(board: &Board, destination: Coord, player: Player) -> Captures {
    let mut captures = Captures::new();
    for direction in Direction::ALL {
        let scan = scan_direction(board, destination, direction, player);
        captures.extend_from_slice(scan.captured());
    }
    captures
}

/// Apply `mv` for `player` and resolve captures.
///
/// Fails with `OwnershipViolation` if the source square does not hold
/// `player`'s piece. The slide path is not re-checked; callers pick moves
/// from the legal set.
pub fn apply_move(board: &Board, player: Player, mv: Move) -> Result<Board> {
    let found = board[mv.from()];
    if !found.is_owned_by(player) {
        warn!("rejected {} for {}: source is {}", mv, player, found);
        return Err(PetteiaError::OwnershipViolation {
            player,
            square: mv.from(),
            found,
        });
    }

    debug!("update move: {} plays {}", player, mv);
    let mut next = *board;
    next[mv.from()] = Cell::Empty;
    next[mv.to()] = found;

    for square in find_captures(&next, mv.to(), player) {
        trace!("{} captures {}", player, square);
        next[square] = Cell::Empty;
    }
    Ok(next)
}
