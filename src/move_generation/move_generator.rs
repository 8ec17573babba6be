use crate::board_state::board_rules::{MAX_CAPTURE_SEARCH_DEPTH, MOVE_CACHE_CAPACITY};
use crate::board_state::board_state::BoardState;
use crate::board_state::board_types::{Side, Square};
use crate::draughts_errors::DraughtsResult;
use crate::moves::draughts_move::Move;

pub type MoveGenResult<T> = DraughtsResult<T>;

/// Tunables shared by the move generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Positions remembered per side by the cached generator.
    pub cache_capacity: usize,
    /// Capture-search recursion ceiling.
    pub max_search_depth: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            cache_capacity: MOVE_CACHE_CAPACITY,
            max_search_depth: MAX_CAPTURE_SEARCH_DEPTH,
        }
    }
}

/// Source of the legal-move set of a position.
///
/// Implementors only provide `generate_legal_moves`; every per-piece and
/// per-destination lookup is a filter over that full list.
pub trait MoveGenerator: Send {
    fn generate_legal_moves(&mut self, board: &BoardState, side: Side) -> MoveGenResult<Vec<Move>>;

    fn is_legal_move(&mut self, board: &BoardState, mv: &Move, side: Side) -> MoveGenResult<bool> {
        Ok(self.generate_legal_moves(board, side)?.contains(mv))
    }

    /// Legal moves of `side` starting on `square`. With `capturing` set only
    /// capture moves qualify, as when a capture chain is being continued.
    fn legal_moves_from(
        &mut self,
        board: &BoardState,
        square: Square,
        side: Side,
        capturing: bool,
    ) -> MoveGenResult<Vec<Move>> {
        Ok(self
            .generate_legal_moves(board, side)?
            .into_iter()
            .filter(|mv| mv.origin() == Some(square))
            .filter(|mv| !capturing || mv.is_capture())
            .collect())
    }

    /// The legal move from `start` whose path visits `end`.
    fn legal_move(
        &mut self,
        board: &BoardState,
        start: Square,
        end: Square,
        side: Side,
        capturing: bool,
    ) -> MoveGenResult<Option<Move>> {
        Ok(self
            .legal_moves_from(board, start, side, capturing)?
            .into_iter()
            .find(|mv| mv.locations()[1..].contains(&end)))
    }

    /// The first single-step sub-move from `start` that lands on `end`.
    fn legal_single_move(
        &mut self,
        board: &BoardState,
        start: Square,
        end: Square,
        side: Side,
        capturing: bool,
    ) -> MoveGenResult<Option<Move>> {
        Ok(self
            .legal_moves_from(board, start, side, capturing)?
            .iter()
            .filter_map(|mv| mv.split().into_iter().next())
            .find(|sub_move| sub_move.destination() == Some(end)))
    }

    /// Legal moves that extend `partial`, a capture chain played so far.
    fn legal_continuations(
        &mut self,
        board: &BoardState,
        partial: &Move,
        side: Side,
    ) -> MoveGenResult<Vec<Move>> {
        Ok(self
            .generate_legal_moves(board, side)?
            .into_iter()
            .filter(|mv| mv.locations().len() > partial.locations().len() && mv.starts_with(partial))
            .collect())
    }
}
