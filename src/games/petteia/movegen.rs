//! Legal move generation.
//!
//! Every piece slides like a rook: any distance along its row or column,
//! through empty squares only. Pieces never jump.
//!
//! Moves come out in a fixed order: pieces in row-major order, then
//! directions in `Direction::ALL` order (north, south, west, east), then
//! increasing distance. Action indices do not depend on this order, but
//! replay and tests do.

use crate::core::{Board, Direction, Move, Player};

use super::capture::find_captures;

/// Enumerate every legal slide for `player`.
///
/// ```
/// use petteia::core::{Board, Player};
/// use petteia::games::petteia::generate_moves;
///
/// assert_eq!(generate_moves(&Board::initial(), Player::Plus).len(), 48);
/// ```
pub fn generate_moves(board: &Board, player: Player) -> Vec<Move> {
    let mut moves = Vec::new();
    for from in board.pieces(player) {
        for direction in Direction::ALL {
            moves.extend(
                from.ray(direction)
                    .take_while(|&to| board[to].is_empty())
                    .map(|to| Move::slide(from, to)),
            );
        }
    }
    moves
}

/// Check whether `player` has at least one legal slide.
///
/// Cheaper than `generate_moves(..).is_empty()`: stops at the first piece
/// with an empty neighbour.
pub fn has_moves(board: &Board, player: Player) -> bool {
    board.pieces(player).any(|from| {
        Direction::ALL
            .iter()
            .any(|&direction| from.step(direction).is_some_and(|to| board[to].is_empty()))
    })
}

/// Keep only the moves whose destination captures at least one enemy piece.
///
/// The predicate is evaluated on `board` as given. A legal slide's path is
/// empty, so the vacated source square never takes part in a capture from
/// the destination and the result matches evaluating after the move.
pub fn generate_capture_moves(board: &Board, moves: &[Move], player: Player) -> Vec<Move> {
    moves
        .iter()
        .copied()
        .filter(|mv| !find_captures(board, mv.to(), player).is_empty())
        .collect()
}
