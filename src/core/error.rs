//! Engine errors.

use thiserror::Error;

use super::board::Cell;
use super::coord::Coord;
use super::player::Player;

/// Errors raised by the rules engine.
///
/// The engine never partially applies a failed operation: boards are values,
/// so an `Err` leaves the caller's board exactly as it was.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PetteiaError {
    /// The source square of a move does not hold the acting player's piece.
    #[error("{player} cannot move from {square}: square is {found}")]
    OwnershipViolation {
        player: Player,
        square: Coord,
        found: Cell,
    },

    /// An action index outside `[0, 896)`.
    #[error("action {0} is outside the action space")]
    ActionOutOfRange(usize),

    /// A move that is not a slide along a single row or column.
    #[error("{from} -> {to} is not an orthogonal slide")]
    NotOrthogonal { from: Coord, to: Coord },

    /// A signed cell value other than -1, 0 or 1.
    #[error("cell value {0} is not one of -1, 0, 1")]
    InvalidCellValue(i64),

    /// A board or policy with the wrong number of entries.
    #[error("expected {expected} entries, found {found}")]
    WrongLength { expected: usize, found: usize },
}

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, PetteiaError>;
