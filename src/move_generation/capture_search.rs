//! Exhaustive capture-chain search.
//!
//! Starting from a bare origin, every chain is extended one jump at a time
//! until no jump remains. Pieces jumped earlier in a chain stay on the board
//! (captures resolve when the whole move is applied) but can never be jumped
//! again, which bounds the recursion by the number of opponent pieces.

use crate::board_state::{board_state::BoardState, board_types::*};
use crate::draughts_errors::DraughtsError;
use crate::move_generation::legal_moves_king::generate_king_jumps;
use crate::move_generation::legal_moves_man::generate_man_jumps;
use crate::move_generation::move_generator::MoveGenResult;
use crate::moves::draughts_move::Move;

/// Single jumps that extend `in_progress`, ignoring the longest-capture rule.
pub fn blind_single_capture_moves(board: &BoardState, in_progress: &Move) -> MoveGenResult<Vec<Move>> {
    let origin = in_progress.origin().ok_or(DraughtsError::EmptyMove)?;
    let piece = board.piece_at(origin).ok_or(DraughtsError::EmptySquare(origin))?;

    let mut out = Vec::new();
    if piece.is_king() {
        generate_king_jumps(board, in_progress, piece.side(), &mut out);
    } else {
        generate_man_jumps(board, in_progress, piece.side(), &mut out);
    }
    Ok(out)
}

/// All completed capture lines reachable from `in_progress`.
///
/// A line is complete when it has no further jump; lines without any capture
/// are dropped. Exceeding `max_depth` plies is an internal fault.
pub fn blind_capture_moves(
    board: &BoardState,
    in_progress: Move,
    depth: usize,
    max_depth: usize,
) -> MoveGenResult<Vec<Move>> {
    if depth > max_depth {
        return Err(DraughtsError::SearchDepthExceeded {
            depth,
            partial_move: format!("{in_progress} captures {:?}", in_progress.captures()),
        });
    }

    let extensions = blind_single_capture_moves(board, &in_progress)?;
    if extensions.is_empty() {
        return Ok(if in_progress.is_capture() {
            vec![in_progress]
        } else {
            Vec::new()
        });
    }

    let mut lines = Vec::new();
    for extension in &extensions {
        let next = in_progress.appended(extension)?;
        lines.extend(blind_capture_moves(board, next, depth + 1, max_depth)?);
    }
    Ok(lines)
}

/// Every capture line of every piece of `side`.
pub fn all_blind_capture_moves(
    board: &BoardState,
    side: Side,
    max_depth: usize,
) -> MoveGenResult<Vec<Move>> {
    let mut lines = Vec::new();
    for square in board.squares_of(side) {
        lines.extend(blind_capture_moves(board, Move::from_origin(square), 0, max_depth)?);
    }
    Ok(lines)
}

/// Whether any piece of `side` has at least one jump.
pub fn has_capture_moves(board: &BoardState, side: Side) -> MoveGenResult<bool> {
    for square in board.squares_of(side) {
        if !blind_single_capture_moves(board, &Move::from_origin(square))?.is_empty() {
            return Ok(true);
        }
    }
    Ok(false)
}
