//! Host-framework contract for two-player board games.
//!
//! Games implement `Game` to define:
//! - The starting board and the fixed action space
//! - Which actions are legal and how they transform a board
//! - Win/loss conditions and the player-relative board view
//!
//! Search and training loops call into `Game` but never interpret
//! game-specific concepts directly.

pub mod engine;

pub use engine::{Game, GameOutcome};
