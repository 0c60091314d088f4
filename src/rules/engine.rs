//! Game trait for board game implementations.
//!
//! Games implement `Game` to expose their rules to a search or self-play
//! driver:
//! - A fixed-size action space and a legal-action mask over it
//! - A pure transition function from (board, player, action) to a new board
//! - Terminal detection and a player-relative canonical view

use crate::core::{Player, Result};

/// Outcome of a position, judged for the player about to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    /// The game continues.
    Ongoing,
    /// The game is over and this player won.
    Winner(Player),
}

impl GameOutcome {
    /// Check if the game has ended.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameOutcome::Winner(_))
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameOutcome::Winner(p) if *p == player)
    }

    /// Reward from `player`'s point of view: 1 for a win, -1 for a loss,
    /// 0 while the game continues.
    #[must_use]
    pub fn value_for(&self, player: Player) -> f32 {
        match self {
            GameOutcome::Ongoing => 0.0,
            GameOutcome::Winner(p) if *p == player => 1.0,
            GameOutcome::Winner(_) => -1.0,
        }
    }
}

/// Two-player game contract.
///
/// ## Implementation Notes
///
/// - Every method is a pure function of its arguments. Implementations hold
///   configuration only, never session state.
/// - `legal_action_mask` always has `action_space_size()` entries.
/// - `apply_action` must be deterministic and must not touch its input.
/// - `outcome` returns `Ongoing` if the game continues.
pub trait Game {
    /// Board representation.
    type Board: Clone;

    /// The starting position.
    fn initial_board(&self) -> Self::Board;

    /// Board shape as `(rows, cols)`.
    fn board_dimensions(&self) -> (usize, usize);

    /// Size of the fixed action space.
    fn action_space_size(&self) -> usize;

    /// One entry per action; `true` where the action is legal for `player`.
    fn legal_action_mask(&self, board: &Self::Board, player: Player) -> Vec<bool>;

    /// Apply an action for `player`.
    ///
    /// Returns the new board and the player to move next.
    fn apply_action(
        &self,
        board: &Self::Board,
        player: Player,
        action: usize,
    ) -> Result<(Self::Board, Player)>;

    /// Check whether the game is over with `player` to move.
    fn outcome(&self, board: &Self::Board, player: Player) -> GameOutcome;

    /// The board as seen by `player`, with their pieces labelled positive.
    fn canonical_form(&self, board: &Self::Board, player: Player) -> Self::Board;

    /// Equivalent (board, policy) pairs for data augmentation.
    fn symmetries(&self, board: &Self::Board, policy: &[f32]) -> Result<Vec<(Self::Board, Vec<f32>)>>;

    /// Printable key for a board, stable enough to hash.
    fn to_text(&self, board: &Self::Board) -> String;

    // === Convenience Methods ===

    /// Indices of all legal actions for `player`, ascending.
    fn legal_actions(&self, board: &Self::Board, player: Player) -> Vec<usize> {
        self.legal_action_mask(board, player)
            .iter()
            .enumerate()
            .filter(|&(_, &legal)| legal)
            .map(|(action, _)| action)
            .collect()
    }

    /// Check if the game is over with `player` to move.
    fn is_terminal(&self, board: &Self::Board, player: Player) -> bool {
        self.outcome(board, player).is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_is_winner() {
        let result = GameOutcome::Winner(Player::Minus);
        assert!(!result.is_winner(Player::Plus));
        assert!(result.is_winner(Player::Minus));
        assert!(result.is_terminal());

        let ongoing = GameOutcome::Ongoing;
        assert!(!ongoing.is_winner(Player::Plus));
        assert!(!ongoing.is_winner(Player::Minus));
        assert!(!ongoing.is_terminal());
    }

    #[test]
    fn test_outcome_value_for() {
        let result = GameOutcome::Winner(Player::Plus);
        assert_eq!(result.value_for(Player::Plus), 1.0);
        assert_eq!(result.value_for(Player::Minus), -1.0);
        assert_eq!(GameOutcome::Ongoing.value_for(Player::Plus), 0.0);
    }
}
