//! # petteia
//!
//! Rules engine for Petteia, the ancient Greek board game, packaged as a
//! pluggable game backend for RL/MCTS self-play.
//!
//! ## Design Principles
//!
//! 1. **Pure**: Every operation takes a board and returns a new one.
//!    The engine keeps no session state between calls.
//!
//! 2. **Fixed Action Space**: Moves map bijectively onto `[0, 896)` so a
//!    policy network can emit one logit per action.
//!
//! 3. **Typed Cells**: Squares are `Cell::Empty` or `Cell::Occupied(Player)`.
//!    The signed `{-1, 0, 1}` encoding exists only at the host boundary.
//!
//! ## Modules
//!
//! - `core`: Players, coordinates, moves, the board, errors
//! - `rules`: `Game` trait the host framework drives
//! - `games`: The Petteia implementation (move generation, captures, codec)
//! - `nn`: Board encoding for neural network input
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod rules;
pub mod games;
pub mod nn;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{Board, Cell, Coord, Direction, Move, PetteiaError, Player, Result, BOARD_SIZE};

pub use crate::rules::{Game, GameOutcome};

pub use crate::games::petteia::{
    action_to_move, apply_move, find_captures, generate_capture_moves, generate_moves, move_to_action,
    MaterialRule, PetteiaConfig, PetteiaGame, RunEnd, ACTION_SPACE_SIZE,
};

pub use crate::nn::{EncodedState, PetteiaEncoder, StateEncoder};
