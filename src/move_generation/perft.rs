use std::thread;

use log::debug;

use crate::board_state::{board_state::BoardState, board_types::Side};
use crate::draughts_errors::DraughtsError;
use crate::move_generation::legal_move_apply::apply_move_copy;
use crate::move_generation::move_generator::{MoveGenResult, MoveGenerator};
use crate::moves::draughts_move::Move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub pieces_captured: usize,
    pub promotions: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.pieces_captured += rhs.pieces_captured;
        self.promotions += rhs.promotions;
    }
}

pub fn perft<G: MoveGenerator>(
    generator: &mut G,
    board: &BoardState,
    side: Side,
    depth: u8,
) -> MoveGenResult<PerftCounts> {
    perft_single_thread(generator, board, side, depth)
}

pub fn perft_single_thread<G: MoveGenerator>(
    generator: &mut G,
    board: &BoardState,
    side: Side,
    depth: u8,
) -> MoveGenResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let root_moves = generator.generate_legal_moves(board, side)?;
    let mut total = PerftCounts::default();

    for mv in &root_moves {
        perft_recurse(generator, board, mv, side, depth, 1, &mut total)?;
    }

    debug!("perft {side} depth {depth}: {total:?}");
    Ok(total)
}

/// Splits the root moves over one worker per move. Each worker owns a clone
/// of `generator`, so cached generators warm up independently.
pub fn perft_multi_threaded<G: MoveGenerator + Clone>(
    generator: &mut G,
    board: &BoardState,
    side: Side,
    depth: u8,
) -> MoveGenResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let root_moves = generator.generate_legal_moves(board, side)?;

    thread::scope(|scope| {
        let handles: Vec<_> = root_moves
            .iter()
            .map(|mv| {
                let mut local_generator = generator.clone();
                scope.spawn(move || {
                    let mut local = PerftCounts::default();
                    let result =
                        perft_recurse(&mut local_generator, board, mv, side, depth, 1, &mut local);
                    (result, local)
                })
            })
            .collect();

        let mut total = PerftCounts::default();
        for handle in handles {
            let (result, local) = handle
                .join()
                .map_err(|_| DraughtsError::WorkerPanicked("perft".to_owned()))?;
            result?;
            total.merge(local);
        }
        debug!(
            "perft {side} depth {depth} over {} workers: {total:?}",
            root_moves.len()
        );
        Ok(total)
    })
}

fn perft_recurse<G: MoveGenerator>(
    generator: &mut G,
    board: &BoardState,
    mv: &Move,
    side: Side,
    search_depth: u8,
    current_depth: u8,
    counts: &mut PerftCounts,
) -> MoveGenResult<()> {
    let next = apply_move_copy(board, mv)?;

    if current_depth == search_depth {
        counts.nodes += 1;
        if mv.is_capture() {
            counts.captures += 1;
            counts.pieces_captured += mv.captures().len();
        }
        if let (Some(origin), Some(destination)) = (mv.origin(), mv.destination()) {
            if board.is_king(origin) == Ok(false) && next.is_king(destination) == Ok(true) {
                counts.promotions += 1;
            }
        }
        return Ok(());
    }

    let reply_side = side.opposite();
    let moves = generator.generate_legal_moves(&next, reply_side)?;
    for child in &moves {
        perft_recurse(
            generator,
            &next,
            child,
            reply_side,
            search_depth,
            current_depth + 1,
            counts,
        )?;
    }

    Ok(())
}
