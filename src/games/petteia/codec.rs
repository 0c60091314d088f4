//! Action encoding: moves ⇄ flat indices in `[0, 896)`.
//!
//! Each source square owns a block of 14 slots starting at
//! `row * 112 + col * 14`:
//!
//! - slots `0..7`: same column, destination row
//! - slots `7..14`: same row, destination column
//!
//! A piece cannot stay on its own square, so each half skips the source's
//! own index: destinations past the source shift down by one.

use crate::core::{Coord, Move, PetteiaError, Result, BOARD_SIZE};

/// Slots per source square (7 along the column, 7 along the row).
pub const ACTIONS_PER_SQUARE: usize = 2 * (BOARD_SIZE - 1);

/// Total number of actions: 64 source squares × 14 slots.
pub const ACTION_SPACE_SIZE: usize = BOARD_SIZE * BOARD_SIZE * ACTIONS_PER_SQUARE;

const ROW_STRIDE: usize = BOARD_SIZE * ACTIONS_PER_SQUARE;
const HALF: usize = BOARD_SIZE - 1;

/// Index of `target` along a line once `source`'s own index is removed.
const fn skip_self(source: usize, target: usize) -> usize {
    if target > source {
        target - 1
    } else {
        target
    }
}

/// Inverse of `skip_self`.
const fn reinsert_self(source: usize, slot: usize) -> usize {
    if slot >= source {
        slot + 1
    } else {
        slot
    }
}

/// Encode a move as an action index.
///
/// ```
/// use petteia::core::{Coord, Move};
/// use petteia::games::petteia::move_to_action;
///
/// let mv = Move::try_new(Coord::new(7, 7), Coord::new(7, 6)).unwrap();
/// assert_eq!(move_to_action(mv), 895);
/// ```
#[must_use]
pub fn move_to_action(mv: Move) -> usize {
    let (from, to) = (mv.from(), mv.to());
    let base = from.row() * ROW_STRIDE + from.col() * ACTIONS_PER_SQUARE;
    if from.col() == to.col() {
        base + skip_self(from.row(), to.row())
    } else {
        base + HALF + skip_self(from.col(), to.col())
    }
}

/// Decode an action index into a move.
///
/// Fails with `ActionOutOfRange` for indices `>= 896`.
pub fn action_to_move(action: usize) -> Result<Move> {
    if action >= ACTION_SPACE_SIZE {
        return Err(PetteiaError::ActionOutOfRange(action));
    }
    let from = Coord::new(action / ROW_STRIDE, (action % ROW_STRIDE) / ACTIONS_PER_SQUARE);
    let slot = action % ACTIONS_PER_SQUARE;
    let to = if slot < HALF {
        Coord::new(reinsert_self(from.row(), slot), from.col())
    } else {
        Coord::new(from.row(), reinsert_self(from.col(), slot - HALF))
    };
    Ok(Move::slide(from, to))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(from: (usize, usize), to: (usize, usize)) -> Move {
        Move::try_new(Coord::new(from.0, from.1), Coord::new(to.0, to.1)).unwrap()
    }

    #[test]
    fn test_action_space_size() {
        assert_eq!(ACTIONS_PER_SQUARE, 14);
        assert_eq!(ACTION_SPACE_SIZE, 896);
    }

    #[test]
    fn test_known_encodings() {
        assert_eq!(move_to_action(mv((0, 0), (1, 0))), 0);
        assert_eq!(move_to_action(mv((0, 0), (7, 0))), 6);
        assert_eq!(move_to_action(mv((0, 0), (0, 1))), 7);
        assert_eq!(move_to_action(mv((7, 4), (4, 4))), 844);
        assert_eq!(move_to_action(mv((7, 7), (7, 6))), 895);
    }

    #[test]
    fn test_decode_first_slot_of_top_row() {
        // Slot 0 of a row-0 square is the square directly south.
        for col in 0..BOARD_SIZE {
            let action = col * ACTIONS_PER_SQUARE;
            assert_eq!(action_to_move(action).unwrap(), mv((0, col), (1, col)));
        }
    }

    #[test]
    fn test_decode_skips_source_index() {
        // From (3, 3), column slots 0..7 map to rows 0, 1, 2, 4, 5, 6, 7.
        let base = 3 * 112 + 3 * 14;
        let rows: Vec<_> = (0..7)
            .map(|slot| action_to_move(base + slot).unwrap().to().row())
            .collect();
        assert_eq!(rows, vec![0, 1, 2, 4, 5, 6, 7]);

        let cols: Vec<_> = (7..14)
            .map(|slot| action_to_move(base + slot).unwrap().to().col())
            .collect();
        assert_eq!(cols, vec![0, 1, 2, 4, 5, 6, 7]);
    }

    #[test]
    fn test_bijection_exhaustive() {
        for action in 0..ACTION_SPACE_SIZE {
            let decoded = action_to_move(action).unwrap();
            assert_ne!(decoded.from(), decoded.to());
            assert_eq!(move_to_action(decoded), action, "action {} via {}", action, decoded);
        }
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(action_to_move(896), Err(PetteiaError::ActionOutOfRange(896)));
        assert!(action_to_move(usize::MAX).is_err());
    }
}
