//! Petteia, the ancient Greek game of custodian capture.
//!
//! The rules engine:
//! - 8×8 board; each side starts with a full home row of 8 pieces
//! - Pieces slide orthogonally any distance through empty squares
//! - Landing so that an enemy run is flanked on both ends by your pieces
//!   captures the whole run
//! - The player to move loses when out of material or out of moves
//!
//! Moves are exposed to policy consumers as indices in a fixed
//! 896-slot action space (see `codec`).

mod capture;
mod codec;
mod config;
mod game;
mod movegen;

pub use capture::{apply_move, find_captures, scan_direction, Captures, DirectionScan, RunEnd};
pub use codec::{action_to_move, move_to_action, ACTIONS_PER_SQUARE, ACTION_SPACE_SIZE};
pub use config::{MaterialRule, PetteiaConfig};
pub use game::PetteiaGame;
pub use movegen::{generate_capture_moves, generate_moves, has_moves};
