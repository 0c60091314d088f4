//! Player identification.
//!
//! ## Player
//!
//! Petteia is a strictly two-player game. Each side is tagged by a sign:
//! `Plus` owns the `+1` cells of the signed board encoding, `Minus` owns the
//! `-1` cells. The sign is the only thing the host framework sees, so it is
//! exposed through `sign()` / `from_sign()` and kept out of board logic.

use serde::{Deserialize, Serialize};

/// One of the two sides.
///
/// `Plus` starts on row 7, `Minus` starts on row 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// The `+1` side.
    Plus,
    /// The `-1` side.
    Minus,
}

impl Player {
    /// Both players, `Plus` first.
    pub const BOTH: [Player; 2] = [Player::Plus, Player::Minus];

    /// Get the signed tag for this player (`+1` or `-1`).
    ///
    /// ```
    /// use petteia::core::Player;
    ///
    /// assert_eq!(Player::Plus.sign(), 1);
    /// assert_eq!(Player::Minus.sign(), -1);
    /// ```
    #[must_use]
    pub const fn sign(self) -> i8 {
        match self {
            Player::Plus => 1,
            Player::Minus => -1,
        }
    }

    /// Parse a signed tag. Only `1` and `-1` name a player.
    #[must_use]
    pub const fn from_sign(sign: i64) -> Option<Player> {
        match sign {
            1 => Some(Player::Plus),
            -1 => Some(Player::Minus),
            _ => None,
        }
    }

    /// Get the other side.
    #[must_use]
    pub const fn opponent(self) -> Player {
        match self {
            Player::Plus => Player::Minus,
            Player::Minus => Player::Plus,
        }
    }
}

impl std::ops::Neg for Player {
    type Output = Player;

    fn neg(self) -> Self::Output {
        self.opponent()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Plus => write!(f, "Player +1"),
            Player::Minus => write!(f, "Player -1"),
        }
    }
}
