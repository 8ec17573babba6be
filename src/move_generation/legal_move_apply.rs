use log::debug;

use crate::board_state::board_state::BoardState;
use crate::draughts_errors::{DraughtsError, DraughtsResult};
use crate::moves::draughts_move::Move;

/// Play `mv` on `board` in place.
///
/// Captured pieces are removed, the moving piece is relocated to the end of
/// the path, and every square on the path is checked for crowning. The board
/// is validated before any mutation, so a failing move leaves it untouched.
pub fn apply_move(board: &mut BoardState, mv: &Move) -> DraughtsResult<()> {
    let origin = mv.origin().ok_or(DraughtsError::EmptyMove)?;
    let destination = mv.destination().ok_or(DraughtsError::EmptyMove)?;
    let piece = board.piece_at(origin).ok_or(DraughtsError::EmptySquare(origin))?;

    let captures = mv.captures();
    for (i, &square) in captures.iter().enumerate() {
        let captured = board.piece_at(square).ok_or(DraughtsError::EmptySquare(square))?;
        if square == origin || captured.side() == piece.side() || captures[..i].contains(&square) {
            return Err(DraughtsError::InvalidCapture(square));
        }
    }
    if destination != origin && board.piece_at(destination).is_some() {
        return Err(DraughtsError::SquareOccupied(destination));
    }

    for &square in captures {
        board.remove(square)?;
    }

    // A chain may end where it started; then only the captures change.
    if destination != origin {
        board.remove(origin)?;
        board.place(destination, piece.side(), piece.is_king())?;
    }

    for &square in mv.locations() {
        if board.crown_if_promotable(square) {
            debug!("{} man crowned on {square}", piece.side());
        }
    }

    Ok(())
}

/// Copying form of [`apply_move`].
pub fn apply_move_copy(board: &BoardState, mv: &Move) -> DraughtsResult<BoardState> {
    let mut next = board.clone();
    apply_move(&mut next, mv)?;
    Ok(next)
}
