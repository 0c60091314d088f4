//! Petteia rule configuration.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Player};

/// Which pieces the material-loss check counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaterialRule {
    /// Count the positive (`Plus`) cells, whoever is to move.
    ///
    /// Preserves the established behaviour: `Minus` running low on pieces
    /// never ends the game by material.
    #[default]
    PositiveCells,
    /// Count the pieces of the player to move.
    MoverPieces,
}

impl MaterialRule {
    /// Number of pieces this rule counts when `player` is to move.
    #[must_use]
    pub fn counted(self, board: &Board, player: Player) -> usize {
        match self {
            MaterialRule::PositiveCells => board.positive_count(),
            MaterialRule::MoverPieces => board.count(player),
        }
    }
}

/// Petteia configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetteiaConfig {
    /// Which pieces the material-loss check counts (default: positive cells).
    pub material_rule: MaterialRule,

    /// The player to move loses once the counted pieces drop to this many
    /// or fewer (default: 1).
    pub material_floor: usize,
}

impl Default for PetteiaConfig {
    fn default() -> Self {
        Self {
            material_rule: MaterialRule::PositiveCells,
            material_floor: 1,
        }
    }
}

impl PetteiaConfig {
    /// Create a new config with a custom material rule.
    pub fn with_material_rule(mut self, rule: MaterialRule) -> Self {
        self.material_rule = rule;
        self
    }

    /// Create a new config with a custom material floor.
    pub fn with_material_floor(mut self, floor: usize) -> Self {
        self.material_floor = floor;
        self
    }

    /// Check whether `player` has lost on material.
    #[must_use]
    pub fn lost_on_material(&self, board: &Board, player: Player) -> bool {
        self.material_rule.counted(board, player) <= self.material_floor
    }
}
