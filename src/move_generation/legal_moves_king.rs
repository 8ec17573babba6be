use crate::board_state::{board_state::BoardState, board_types::*};
use crate::move_generation::legal_move_shared::{is_vacant_for, reversal_of_last_step};
use crate::moves::draughts_move::Move;

/// Flying king moves: every empty square along each open ray.
pub fn generate_king_quiet_moves(board: &BoardState, from: Square, out: &mut Vec<Move>) {
    let tables = board.tables();
    for direction in Direction::ALL {
        for to in tables.ray(from, direction) {
            if !board.is_empty_square(to) {
                break;
            }
            out.push(Move::quiet(from, to, direction));
        }
    }
}

/// Single flying jumps extending `in_progress`, a chain played by a king of
/// `side`.
///
/// Along each ray the first opponent piece becomes the target. Own pieces
/// block the ray, except the chain's origin which the king has vacated. A
/// second opponent piece, or a target already captured in this chain, ends the
/// ray. Every vacant square past the target is a landing square.
pub fn generate_king_jumps(board: &BoardState, in_progress: &Move, side: Side, out: &mut Vec<Move>) {
    let Some(from) = in_progress.destination() else {
        return;
    };
    let tables = board.tables();
    let reversal = reversal_of_last_step(in_progress);

    for direction in Direction::ALL {
        if Some(direction) == reversal {
            continue;
        }

        let mut target: Option<Square> = None;
        for square in tables.ray(from, direction) {
            if is_vacant_for(board, square, in_progress) {
                if let Some(captured) = target {
                    out.push(Move::jump(from, square, direction, captured));
                }
                continue;
            }

            if board.occupied_by(square) == Some(side) {
                break;
            }
            if target.is_some() || in_progress.has_captured(square) {
                break;
            }
            target = Some(square);
        }
    }
}
