use crate::board_state::{board_state::BoardState, board_types::*};
use crate::move_generation::legal_move_shared::{
    is_opponent_on, is_vacant_for, reversal_of_last_step,
};
use crate::moves::draughts_move::Move;

/// One-step forward moves of the man on `from`.
pub fn generate_man_quiet_moves(board: &BoardState, from: Square, side: Side, out: &mut Vec<Move>) {
    let tables = board.tables();
    for direction in side.forward_directions() {
        let Some(to) = tables.neighbour(from, direction) else {
            continue;
        };
        if board.is_empty_square(to) {
            out.push(Move::quiet(from, to, direction));
        }
    }
}

/// Single jumps extending `in_progress`, a chain played by a man of `side`.
///
/// Men capture in all four directions. The jumped piece must not already be
/// captured in this chain; the landing square must be vacant for the chain.
pub fn generate_man_jumps(board: &BoardState, in_progress: &Move, side: Side, out: &mut Vec<Move>) {
    let Some(from) = in_progress.destination() else {
        return;
    };
    let tables = board.tables();
    let reversal = reversal_of_last_step(in_progress);

    for direction in Direction::ALL {
        if Some(direction) == reversal {
            continue;
        }
        let Some(over) = tables.neighbour(from, direction) else {
            continue;
        };
        if in_progress.has_captured(over) || !is_opponent_on(board, over, side) {
            continue;
        }
        let Some(landing) = tables.neighbour(over, direction) else {
            continue;
        };
        if is_vacant_for(board, landing, in_progress) {
            out.push(Move::jump(from, landing, direction, over));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Direction::*;

    #[test]
    fn white_man_steps_north_only() {
        let mut board = BoardState::new_empty();
        board.set_positions(&[32], &[], &[], &[]).expect("valid squares");
        let mut out = Vec::new();
        generate_man_quiet_moves(&board, 32, Side::White, &mut out);
        assert_eq!(out, vec![Move::quiet(32, 28, NorthEast), Move::quiet(32, 27, NorthWest)]);
    }

    #[test]
    fn black_man_blocked_square_is_skipped() {
        let mut board = BoardState::new_empty();
        board.set_positions(&[18], &[12], &[], &[]).expect("valid squares");
        let mut out = Vec::new();
        generate_man_quiet_moves(&board, 12, Side::Black, &mut out);
        assert_eq!(out, vec![Move::quiet(12, 17, SouthWest)]);
    }

    #[test]
    fn man_on_edge_has_one_forward_step() {
        let mut board = BoardState::new_empty();
        board.set_positions(&[35], &[], &[], &[]).expect("valid squares");
        let mut out = Vec::new();
        generate_man_quiet_moves(&board, 35, Side::White, &mut out);
        assert_eq!(out, vec![Move::quiet(35, 30, NorthEast)]);
    }

    #[test]
    fn man_captures_backwards_too() {
        let mut board = BoardState::new_empty();
        board.set_positions(&[7], &[12], &[], &[]).expect("valid squares");
        let mut out = Vec::new();
        generate_man_jumps(&board, &Move::from_origin(7), Side::White, &mut out);
        assert_eq!(out, vec![Move::jump(7, 18, SouthEast, 12)]);
    }

    #[test]
    fn man_cannot_jump_onto_occupied_square() {
        let mut board = BoardState::new_empty();
        board.set_positions(&[7, 18], &[12], &[], &[]).expect("valid squares");
        let mut out = Vec::new();
        generate_man_jumps(&board, &Move::from_origin(7), Side::White, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn man_may_land_on_its_own_origin_mid_chain() {
        // 7 -> 18 -> 27 -> 16 has captured 12, 22, 21; the last jump over 11
        // lands back on the vacated origin.
        let mut board = BoardState::new_empty();
        board
            .set_positions(&[7], &[12, 22, 21, 11], &[], &[])
            .expect("valid squares");
        let in_progress = Move::new(
            vec![7, 18, 27, 16],
            vec![SouthEast, SouthWest, NorthWest],
            vec![12, 22, 21],
        );
        let mut out = Vec::new();
        generate_man_jumps(&board, &in_progress, Side::White, &mut out);
        assert_eq!(out, vec![Move::jump(16, 7, NorthEast, 11)]);
    }
}
