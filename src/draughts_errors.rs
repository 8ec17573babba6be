//! Errors used throughout the draughts engine.
//!
//! `DraughtsError` is the single error type of the crate. Variants fall into
//! three groups:
//! - contract violations by the caller (removing from an empty square,
//!   joining moves whose junctions disagree, malformed keys or notation);
//! - the capture-search depth guard, which indicates a broken adjacency table
//!   and carries the move in progress for diagnostics;
//! - gameplay rejections (`IllegalMove`, `PlayerFailed`), which the game
//!   orchestration recovers from by leaving the turn un-advanced.

use thiserror::Error;

use crate::board_state::board_types::Square;

/// Unified error type for the draughts engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraughtsError {
    /// A square index outside `[0, N)` was used.
    #[error("square {0} is not on the board")]
    SquareOffBoard(Square),

    /// Attempted to view, edit or remove a piece on an empty square.
    #[error("square {0} is empty")]
    EmptySquare(Square),

    /// A move tried to land on a square another piece still occupies.
    #[error("square {0} is occupied")]
    SquareOccupied(Square),

    /// A capture square repeats, is the mover's own square, or holds a piece
    /// of the mover's side.
    #[error("square {0} cannot be captured by this move")]
    InvalidCapture(Square),

    /// Two moves were appended whose junction squares disagree.
    #[error("cannot append move: this move ends at {end}, while the other starts at {start}")]
    MoveJunctionMismatch { end: Square, start: Square },

    /// An operation needed at least one location in a move.
    #[error("move has no locations")]
    EmptyMove,

    /// The capture search recursed past its ceiling.
    #[error("reached a capture search depth of {depth} on move {partial_move}")]
    SearchDepthExceeded { depth: usize, partial_move: String },

    /// A proposed move is not a member of the legal-move set.
    #[error("illegal move {0}")]
    IllegalMove(String),

    /// A position key had the wrong length or an unknown character.
    #[error("invalid position key: {0}")]
    InvalidPositionKey(String),

    /// A move notation string could not be parsed.
    #[error("invalid move notation: {0}")]
    InvalidNotation(String),

    /// A player failed to produce a decision.
    #[error("player failed: {0}")]
    PlayerFailed(String),

    /// A worker thread panicked before reporting back.
    #[error("worker thread panicked: {0}")]
    WorkerPanicked(String),
}

pub type DraughtsResult<T> = Result<T, DraughtsError>;
