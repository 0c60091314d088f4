//! Python bindings for the Petteia rules engine.
//!
//! Exposes the engine to Python training loops with numpy boards.
//!
//! # Quick Start
//!
//! ```python
//! import petteia
//!
//! game = petteia.PetteiaGame()
//! board = game.get_init_board()
//! valid = game.get_valid_moves(board, 1)
//! board, player = game.get_next_state(board, 1, int(valid.nonzero()[0][0]))
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_games;
mod py_nn;

pub use py_games::*;
pub use py_nn::*;

/// petteia: Petteia rules engine for AlphaZero-style training.
#[pymodule]
fn petteia(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyPetteiaGame>()?;
    m.add_class::<PyPetteiaEncoder>()?;
    m.add("ACTION_SPACE_SIZE", crate::games::petteia::ACTION_SPACE_SIZE)?;
    Ok(())
}
