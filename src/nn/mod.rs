//! Neural network input encoding.
//!
//! Policy/value networks see a Petteia board as stacked binary planes and
//! answer with one logit per action in the 896-slot action space.
//!
//! ## Usage
//!
//! ```rust
//! use petteia::core::{Board, Player};
//! use petteia::nn::{PetteiaEncoder, StateEncoder};
//!
//! let encoder = PetteiaEncoder::new();
//! let encoded = encoder.encode(&Board::initial(), Player::Plus);
//! assert_eq!(encoded.shape, vec![2, 8, 8]);
//! ```

pub mod encoder;

pub use encoder::{EncodedState, PetteiaEncoder, StateEncoder};
