//! One player decision, run off the caller's thread.
//!
//! The player works on a deep copy of the board inside a scoped worker
//! thread, so it can neither observe nor corrupt the live position. Its
//! proposal is re-validated against the legal-move set before anything is
//! applied; a rejected proposal leaves the board and the side to move as they
//! were.

use std::thread;

use chrono::{DateTime, TimeDelta, Utc};
use log::{info, warn};

use crate::board_state::{board_state::BoardState, board_types::Side};
use crate::draughts_errors::{DraughtsError, DraughtsResult};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::draughts_move::Move;
use crate::players::player_trait::Player;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    Played(Move),
    Rejected {
        proposal: Option<Move>,
        reason: DraughtsError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    pub side: Side,
    pub started_at: DateTime<Utc>,
    pub elapsed: TimeDelta,
    pub outcome: TurnOutcome,
}

impl TurnReport {
    #[inline]
    pub fn is_played(&self) -> bool {
        matches!(self.outcome, TurnOutcome::Played(_))
    }
}

/// Ask `player` for a move of `side` and play it on `board` if it is legal.
///
/// Errors are reserved for failures of the engine itself (move generation or
/// a panicking worker); a bad proposal is reported as
/// [`TurnOutcome::Rejected`].
pub fn play_turn<P, G>(
    player: &mut P,
    board: &mut BoardState,
    side: Side,
    generator: &mut G,
) -> DraughtsResult<TurnReport>
where
    P: Player + ?Sized,
    G: MoveGenerator,
{
    let legal_moves = generator.generate_legal_moves(board, side)?;
    let snapshot = board.clone();

    let started_at = Utc::now();
    let decision = thread::scope(|scope| {
        scope
            .spawn(|| player.choose_move(&snapshot, side))
            .join()
            .map_err(|_| DraughtsError::WorkerPanicked(format!("{side} player")))
    })?;
    let elapsed = Utc::now() - started_at;

    let outcome = match decision {
        Ok(Some(mv)) if legal_moves.contains(&mv) => {
            apply_move(board, &mv)?;
            info!("{side} plays {mv} in {}ms", elapsed.num_milliseconds());
            TurnOutcome::Played(mv)
        }
        Ok(Some(mv)) => {
            warn!(
                "{side} proposed illegal move {mv}; legal moves are [{}]",
                join_notations(&legal_moves)
            );
            TurnOutcome::Rejected {
                reason: DraughtsError::IllegalMove(mv.notation()),
                proposal: Some(mv),
            }
        }
        Ok(None) => {
            warn!(
                "{side} proposed no move; legal moves are [{}]",
                join_notations(&legal_moves)
            );
            TurnOutcome::Rejected {
                proposal: None,
                reason: DraughtsError::PlayerFailed("no move proposed".to_owned()),
            }
        }
        Err(err) => {
            warn!("{side} player failed: {err}");
            TurnOutcome::Rejected {
                proposal: None,
                reason: err,
            }
        }
    };

    Ok(TurnReport {
        side,
        started_at,
        elapsed,
        outcome,
    })
}

fn join_notations(moves: &[Move]) -> String {
    moves
        .iter()
        .map(Move::notation)
        .collect::<Vec<_>>()
        .join(", ")
}
