//! Game bindings for Python.

use numpy::{PyArray1, PyArray2};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::Move;
use crate::games::petteia::{action_to_move, move_to_action, MaterialRule, PetteiaConfig, PetteiaGame};
use crate::rules::{Game, GameOutcome};

use super::py_core::{board_from_py, board_to_py, coord_from_py, player_from_py, to_py_err};

/// Python wrapper for PetteiaGame.
///
/// Boards are 8×8 integer arrays (`0` empty, `1` / `-1` for each side);
/// players are `1` or `-1`.
#[pyclass(name = "PetteiaGame")]
pub struct PyPetteiaGame {
    game: PetteiaGame,
}

#[pymethods]
impl PyPetteiaGame {
    /// Create a new engine.
    ///
    /// # Arguments
    /// - material_rule: "positive_cells" (default) or "mover_pieces"
    /// - material_floor: the player to move loses at this many pieces or fewer
    #[new]
    #[pyo3(signature = (material_rule = "positive_cells", material_floor = 1))]
    fn new(material_rule: &str, material_floor: usize) -> PyResult<Self> {
        let rule = match material_rule {
            "positive_cells" => MaterialRule::PositiveCells,
            "mover_pieces" => MaterialRule::MoverPieces,
            other => {
                return Err(PyErr::new::<PyValueError, _>(format!(
                    "unknown material rule {:?}",
                    other
                )))
            }
        };
        let config = PetteiaConfig::default()
            .with_material_rule(rule)
            .with_material_floor(material_floor);
        Ok(Self {
            game: PetteiaGame::with_config(config),
        })
    }

    /// Get the starting board.
    fn get_init_board<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<i8>>> {
        board_to_py(py, &self.game.initial_board())
    }

    /// Get the board shape as (rows, cols).
    fn get_board_size(&self) -> (usize, usize) {
        self.game.board_dimensions()
    }

    /// Get the number of actions (896).
    fn get_action_size(&self) -> usize {
        self.game.action_space_size()
    }

    /// Get the legal-action mask as a 0/1 `uint8` array of length 896.
    fn get_valid_moves<'py>(
        &self,
        py: Python<'py>,
        board: Vec<Vec<i64>>,
        player: i64,
    ) -> PyResult<Bound<'py, PyArray1<u8>>> {
        let board = board_from_py(board)?;
        let player = player_from_py(player)?;
        let mask: Vec<u8> = self
            .game
            .legal_action_mask(&board, player)
            .into_iter()
            .map(u8::from)
            .collect();
        Ok(PyArray1::from_slice_bound(py, &mask))
    }

    /// Apply an action; returns (next_board, next_player).
    ///
    /// Raises ValueError if the action is out of range or its source square
    /// does not hold the player's piece.
    fn get_next_state<'py>(
        &self,
        py: Python<'py>,
        board: Vec<Vec<i64>>,
        player: i64,
        action: usize,
    ) -> PyResult<(Bound<'py, PyArray2<i8>>, i64)> {
        let board = board_from_py(board)?;
        let player = player_from_py(player)?;
        let (next, next_player) = self
            .game
            .apply_action(&board, player, action)
            .map_err(to_py_err)?;
        Ok((board_to_py(py, &next)?, next_player.sign() as i64))
    }

    /// Returns `-player` if the game is over with `player` to move, else 0.
    fn get_game_ended(&self, board: Vec<Vec<i64>>, player: i64) -> PyResult<i64> {
        let board = board_from_py(board)?;
        let player = player_from_py(player)?;
        Ok(match self.game.outcome(&board, player) {
            GameOutcome::Ongoing => 0,
            GameOutcome::Winner(winner) => winner.sign() as i64,
        })
    }

    /// Get the board from `player`'s side (equal to `board * player`).
    fn get_canonical_form<'py>(
        &self,
        py: Python<'py>,
        board: Vec<Vec<i64>>,
        player: i64,
    ) -> PyResult<Bound<'py, PyArray2<i8>>> {
        let board = board_from_py(board)?;
        let player = player_from_py(player)?;
        board_to_py(py, &self.game.canonical_form(&board, player))
    }

    /// Get (board, policy) pairs equivalent under board symmetry.
    fn get_symmetries<'py>(
        &self,
        py: Python<'py>,
        board: Vec<Vec<i64>>,
        pi: Vec<f32>,
    ) -> PyResult<Vec<(Bound<'py, PyArray2<i8>>, Vec<f32>)>> {
        let board = board_from_py(board)?;
        self.game
            .symmetries(&board, &pi)
            .map_err(to_py_err)?
            .into_iter()
            .map(|(b, policy)| -> PyResult<_> { Ok((board_to_py(py, &b)?, policy)) })
            .collect()
    }

    /// Get the printable board key used for hashing.
    fn string_representation(&self, board: Vec<Vec<i64>>) -> PyResult<String> {
        let board = board_from_py(board)?;
        Ok(self.game.to_text(&board))
    }

    /// Encode ((row, col), (row, col)) as an action index.
    #[staticmethod]
    fn move_to_action(from: (usize, usize), to: (usize, usize)) -> PyResult<usize> {
        let mv = Move::try_new(coord_from_py(from)?, coord_from_py(to)?).map_err(to_py_err)?;
        Ok(move_to_action(mv))
    }

    /// Decode an action index into ((row, col), (row, col)).
    #[staticmethod]
    fn action_to_move(action: usize) -> PyResult<((usize, usize), (usize, usize))> {
        let mv = action_to_move(action).map_err(to_py_err)?;
        Ok((
            (mv.from().row(), mv.from().col()),
            (mv.to().row(), mv.to().col()),
        ))
    }

    fn __repr__(&self) -> String {
        format!(
            "PetteiaGame(material_rule={:?}, material_floor={})",
            self.game.config().material_rule,
            self.game.config().material_floor
        )
    }
}
