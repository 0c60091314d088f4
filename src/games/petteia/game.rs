//! Petteia implementation of the `Game` contract.

use crate::core::{Board, Player, PetteiaError, Result, BOARD_SIZE};
use crate::rules::{Game, GameOutcome};

use super::capture::apply_move;
use super::codec::{action_to_move, move_to_action, ACTION_SPACE_SIZE};
use super::config::PetteiaConfig;
use super::movegen::{generate_moves, has_moves};

/// The Petteia rules engine.
///
/// Holds configuration only. Every method is a pure function of its
/// arguments, so one instance can serve any number of threads.
#[derive(Clone, Debug, Default)]
pub struct PetteiaGame {
    config: PetteiaConfig,
}

impl PetteiaGame {
    /// Create an engine with the default rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with custom rules.
    pub fn with_config(config: PetteiaConfig) -> Self {
        Self { config }
    }

    /// Get the rule configuration.
    pub fn config(&self) -> &PetteiaConfig {
        &self.config
    }
}

impl Game for PetteiaGame {
    type Board = Board;

    fn initial_board(&self) -> Board {
        Board::initial()
    }

    fn board_dimensions(&self) -> (usize, usize) {
        (BOARD_SIZE, BOARD_SIZE)
    }

    fn action_space_size(&self) -> usize {
        ACTION_SPACE_SIZE
    }

    fn legal_action_mask(&self, board: &Board, player: Player) -> Vec<bool> {
        let mut mask = vec![false; ACTION_SPACE_SIZE];
        for mv in generate_moves(board, player) {
            mask[move_to_action(mv)] = true;
        }
        mask
    }

    fn apply_action(&self, board: &Board, player: Player, action: usize) -> Result<(Board, Player)> {
        let mv = action_to_move(action)?;
        let next = apply_move(board, player, mv)?;
        Ok((next, player.opponent()))
    }

    fn outcome(&self, board: &Board, player: Player) -> GameOutcome {
        if self.config.lost_on_material(board, player) || !has_moves(board, player) {
            return GameOutcome::Winner(player.opponent());
        }
        GameOutcome::Ongoing
    }

    fn canonical_form(&self, board: &Board, player: Player) -> Board {
        board.canonical(player)
    }

    fn symmetries(&self, board: &Board, policy: &[f32]) -> Result<Vec<(Board, Vec<f32>)>> {
        if policy.len() != ACTION_SPACE_SIZE {
            return Err(PetteiaError::WrongLength {
                expected: ACTION_SPACE_SIZE,
                found: policy.len(),
            });
        }
        Ok(vec![(*board, policy.to_vec())])
    }

    fn to_text(&self, board: &Board) -> String {
        board.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Cell, Coord};
    use crate::games::petteia::MaterialRule;

    #[test]
    fn test_dimensions_and_action_space() {
        let game = PetteiaGame::new();
        assert_eq!(game.board_dimensions(), (8, 8));
        assert_eq!(game.action_space_size(), 896);
    }

    #[test]
    fn test_initial_mask() {
        let game = PetteiaGame::new();
        let mask = game.legal_action_mask(&game.initial_board(), Player::Plus);
        assert_eq!(mask.len(), 896);
        assert_eq!(mask.iter().filter(|&&legal| legal).count(), 48);
        assert!(mask[844]);
    }

    #[test]
    fn test_legal_actions_ascending() {
        let game = PetteiaGame::new();
        let actions = game.legal_actions(&game.initial_board(), Player::Minus);
        assert_eq!(actions.len(), 48);
        assert!(actions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_apply_action_895() {
        let game = PetteiaGame::new();
        let (board, next) = game.apply_action(&game.initial_board(), Player::Plus, 895).unwrap();

        assert_eq!(board[Coord::new(7, 6)], Cell::Occupied(Player::Plus));
        assert!(board[Coord::new(7, 7)].is_empty());
        assert_eq!(next, Player::Minus);
    }

    #[test]
    fn test_apply_action_errors() {
        let game = PetteiaGame::new();
        let board = game.initial_board();

        // (0, 0) -> (1, 0) belongs to Minus.
        assert!(matches!(
            game.apply_action(&board, Player::Plus, 0),
            Err(PetteiaError::OwnershipViolation { .. })
        ));
        assert_eq!(
            game.apply_action(&board, Player::Plus, 896),
            Err(PetteiaError::ActionOutOfRange(896))
        );
    }

    #[test]
    fn test_initial_position_is_ongoing() {
        let game = PetteiaGame::new();
        let board = game.initial_board();
        assert_eq!(game.outcome(&board, Player::Plus), GameOutcome::Ongoing);
        assert_eq!(game.outcome(&board, Player::Minus), GameOutcome::Ongoing);
    }

    #[test]
    fn test_material_loss_under_positive_rule() {
        let game = PetteiaGame::new();
        let mut board = Board::empty();
        board.place(Coord::new(4, 4), Player::Plus);
        board.place(Coord::new(0, 0), Player::Minus);
        board.place(Coord::new(0, 7), Player::Minus);

        assert_eq!(game.outcome(&board, Player::Plus), GameOutcome::Winner(Player::Minus));
        assert_eq!(game.outcome(&board, Player::Minus), GameOutcome::Winner(Player::Plus));
    }

    #[test]
    fn test_material_loss_under_mover_rule() {
        let config = PetteiaConfig::default().with_material_rule(MaterialRule::MoverPieces);
        let game = PetteiaGame::with_config(config);
        let mut board = Board::empty();
        board.place(Coord::new(4, 4), Player::Plus);
        board.place(Coord::new(0, 0), Player::Minus);
        board.place(Coord::new(0, 7), Player::Minus);

        assert_eq!(game.outcome(&board, Player::Plus), GameOutcome::Winner(Player::Minus));
        assert_eq!(game.outcome(&board, Player::Minus), GameOutcome::Ongoing);
    }

    #[test]
    fn test_entrapment() {
        let game = PetteiaGame::new();
        let mut board = Board::empty();
        // Minus in the corner, walled in by Plus.
        board.place(Coord::new(0, 0), Player::Minus);
        board.place(Coord::new(0, 1), Player::Plus);
        board.place(Coord::new(1, 0), Player::Plus);

        assert_eq!(game.outcome(&board, Player::Minus), GameOutcome::Winner(Player::Plus));
        assert_eq!(game.outcome(&board, Player::Plus), GameOutcome::Ongoing);
    }

    #[test]
    fn test_canonical_form() {
        let game = PetteiaGame::new();
        let board = game.initial_board();
        assert_eq!(game.canonical_form(&board, Player::Plus), board);

        let flipped = game.canonical_form(&board, Player::Minus);
        assert_eq!(flipped[Coord::new(0, 0)], Cell::Occupied(Player::Plus));
        assert_eq!(flipped[Coord::new(7, 0)], Cell::Occupied(Player::Minus));
    }

    #[test]
    fn test_symmetries_identity_only() {
        let game = PetteiaGame::new();
        let board = game.initial_board();
        let policy: Vec<f32> = (0..896).map(|i| i as f32).collect();

        let symmetries = game.symmetries(&board, &policy).unwrap();
        assert_eq!(symmetries.len(), 1);
        assert_eq!(symmetries[0].0, board);
        assert_eq!(symmetries[0].1, policy);

        assert_eq!(
            game.symmetries(&board, &[0.5; 10]),
            Err(PetteiaError::WrongLength { expected: 896, found: 10 })
        );
    }

    #[test]
    fn test_to_text_distinguishes_positions() {
        let game = PetteiaGame::new();
        let board = game.initial_board();
        let (next, _) = game.apply_action(&board, Player::Plus, 844).unwrap();
        assert_ne!(game.to_text(&board), game.to_text(&next));
        assert_eq!(game.to_text(&board), board.render());
    }
}
