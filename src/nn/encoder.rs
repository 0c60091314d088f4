//! Board encoding for neural network input.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Cell, Player, BOARD_SIZE};
use crate::games::petteia::ACTION_SPACE_SIZE;

/// Encoded board as a flat tensor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EncodedState {
    /// Flattened tensor data (row-major order).
    pub tensor: Vec<f32>,

    /// Shape of the tensor, e.g. `[planes, rows, cols]`.
    pub shape: Vec<usize>,
}

impl EncodedState {
    /// Create a zero-filled encoded state with the given shape.
    pub fn zeros(shape: Vec<usize>) -> Self {
        let size = shape.iter().product();
        Self {
            tensor: vec![0.0; size],
            shape,
        }
    }

    /// Get the total number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tensor.len()
    }

    /// Check if the tensor is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tensor.is_empty()
    }

    /// Get element at a flat index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f32> {
        self.tensor.get(index).copied()
    }
}

/// Encodes boards into tensors for neural network input.
pub trait StateEncoder: Send + Sync {
    /// Encode `board` from `perspective`'s side.
    fn encode(&self, board: &Board, perspective: Player) -> EncodedState;

    /// Get the shape of encoded states.
    fn output_shape(&self) -> Vec<usize>;

    /// Get the total number of possible actions (policy output length).
    fn action_space_size(&self) -> usize;
}

/// Two-plane encoder.
///
/// - Plane 0: squares holding the perspective player's pieces
/// - Plane 1: squares holding the opponent's pieces
///
/// Encoding from `Minus`'s side equals encoding the canonical form from
/// `Plus`'s side.
#[derive(Clone, Debug, Default)]
pub struct PetteiaEncoder;

impl PetteiaEncoder {
    const PLANES: usize = 2;

    /// Create a new encoder.
    pub fn new() -> Self {
        Self
    }
}

impl StateEncoder for PetteiaEncoder {
    fn encode(&self, board: &Board, perspective: Player) -> EncodedState {
        let mut encoded = EncodedState::zeros(self.output_shape());
        let plane_size = BOARD_SIZE * BOARD_SIZE;

        for (coord, cell) in board.iter() {
            let plane = match cell {
                Cell::Empty => continue,
                Cell::Occupied(owner) if owner == perspective => 0,
                Cell::Occupied(_) => 1,
            };
            encoded.tensor[plane * plane_size + coord.row() * BOARD_SIZE + coord.col()] = 1.0;
        }
        encoded
    }

    fn output_shape(&self) -> Vec<usize> {
        vec![Self::PLANES, BOARD_SIZE, BOARD_SIZE]
    }

    fn action_space_size(&self) -> usize {
        ACTION_SPACE_SIZE
    }
}
