//! Core value types: players, coordinates, moves, the board, errors.
//!
//! Everything here is a small `Copy` value. Rules code receives boards by
//! reference and returns new ones, so no state is shared between calls.

pub mod player;
pub mod coord;
pub mod board;
pub mod error;

pub use player::Player;
pub use coord::{Coord, Direction, Move, Ray, BOARD_SIZE};
pub use board::{Board, Cell};
pub use error::{PetteiaError, Result};
