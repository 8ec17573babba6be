use crate::board_state::{board_state::BoardState, board_types::*};
use crate::moves::draughts_move::Move;

#[inline]
pub fn is_opponent_on(board: &BoardState, square: Square, side: Side) -> bool {
    board.occupied_by(square) == Some(side.opposite())
}

/// A landing square for the move in progress: empty, or the origin the moving
/// piece has already vacated.
#[inline]
pub fn is_vacant_for(board: &BoardState, square: Square, in_progress: &Move) -> bool {
    board.is_empty_square(square) || in_progress.origin() == Some(square)
}

/// Direction a capture extension may not take: straight back.
#[inline]
pub fn reversal_of_last_step(in_progress: &Move) -> Option<Direction> {
    in_progress.last_direction().map(Direction::opposite)
}
