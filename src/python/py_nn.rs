//! Neural network encoding bindings for Python.

use numpy::PyArray1;
use pyo3::prelude::*;

use crate::nn::{PetteiaEncoder, StateEncoder};

use super::py_core::{board_from_py, player_from_py};

/// Python wrapper for PetteiaEncoder.
#[pyclass(name = "PetteiaEncoder")]
#[derive(Clone, Debug, Default)]
pub struct PyPetteiaEncoder(pub PetteiaEncoder);

#[pymethods]
impl PyPetteiaEncoder {
    #[new]
    fn new() -> Self {
        Self(PetteiaEncoder::new())
    }

    /// Encode a board from `player`'s side as a flat `float32` array.
    ///
    /// Reshape with `output_shape` on the Python side.
    fn encode<'py>(&self, py: Python<'py>, board: Vec<Vec<i64>>, player: i64) -> PyResult<Bound<'py, PyArray1<f32>>> {
        let board = board_from_py(board)?;
        let player = player_from_py(player)?;
        let encoded = self.0.encode(&board, player);
        Ok(PyArray1::from_slice_bound(py, &encoded.tensor))
    }

    /// Get the tensor shape.
    #[getter]
    fn output_shape(&self) -> Vec<usize> {
        self.0.output_shape()
    }

    /// Get the policy output length.
    #[getter]
    fn action_space_size(&self) -> usize {
        self.0.action_space_size()
    }

    fn __repr__(&self) -> String {
        format!("PetteiaEncoder(shape={:?})", self.0.output_shape())
    }
}
