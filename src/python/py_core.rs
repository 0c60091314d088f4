//! Conversions between numpy/Python values and engine types.

use numpy::PyArray2;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Board, Coord, PetteiaError, Player};

/// Map an engine error to a Python `ValueError`.
pub(crate) fn to_py_err(err: PetteiaError) -> PyErr {
    PyErr::new::<PyValueError, _>(err.to_string())
}

/// Parse a signed player tag (`1` or `-1`).
pub(crate) fn player_from_py(sign: i64) -> PyResult<Player> {
    Player::from_sign(sign)
        .ok_or_else(|| PyErr::new::<PyValueError, _>(format!("player must be 1 or -1, got {}", sign)))
}

/// Parse a signed 8×8 grid (nested lists or an integer numpy array).
pub(crate) fn board_from_py(rows: Vec<Vec<i64>>) -> PyResult<Board> {
    Board::from_values(&rows).map_err(to_py_err)
}

/// Convert a board to an 8×8 `int8` numpy array.
pub(crate) fn board_to_py<'py>(py: Python<'py>, board: &Board) -> PyResult<Bound<'py, PyArray2<i8>>> {
    let rows: Vec<Vec<i8>> = board.to_values().iter().map(|row| row.to_vec()).collect();
    PyArray2::from_vec2_bound(py, &rows).map_err(|e| PyErr::new::<PyValueError, _>(format!("{}", e)))
}

/// Parse a `(row, col)` tuple.
pub(crate) fn coord_from_py((row, col): (usize, usize)) -> PyResult<Coord> {
    Coord::try_new(row, col)
        .ok_or_else(|| PyErr::new::<PyValueError, _>(format!("({}, {}) is off the board", row, col)))
}
