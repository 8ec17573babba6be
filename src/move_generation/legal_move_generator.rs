//! Full legal move generation pipeline.
//!
//! Collects every blind capture line of the side to move and keeps only the
//! longest ones; capturing is mandatory, so quiet moves are generated only
//! when no capture exists anywhere on the board for that side.

use log::trace;

use crate::board_state::{board_state::BoardState, board_types::*};
use crate::move_generation::capture_search::{all_blind_capture_moves, has_capture_moves};
use crate::move_generation::legal_moves_king::generate_king_quiet_moves;
use crate::move_generation::legal_moves_man::generate_man_quiet_moves;
use crate::move_generation::move_cache::{MoveCache, MoveCacheStats};
use crate::move_generation::move_generator::{GeneratorConfig, MoveGenResult, MoveGenerator};
use crate::moves::draughts_move::Move;

/// Uncached generator; recomputes every query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegalMoveGenerator {
    max_search_depth: usize,
}

/// Generator that memoizes full legal-move lists per side.
#[derive(Debug, Clone)]
pub struct CachedMoveGenerator {
    inner: LegalMoveGenerator,
    // [side]
    caches: [MoveCache; 2],
}

impl Default for LegalMoveGenerator {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

impl LegalMoveGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            max_search_depth: config.max_search_depth,
        }
    }

    /// Quiet moves of whatever piece stands on `square`.
    pub fn legal_non_capture_moves(&self, board: &BoardState, square: Square) -> Vec<Move> {
        let mut out = Vec::new();
        match board.piece_at(square) {
            Some(piece) if piece.is_king() => generate_king_quiet_moves(board, square, &mut out),
            Some(piece) => generate_man_quiet_moves(board, square, piece.side(), &mut out),
            None => {}
        }
        out
    }

    pub fn all_legal_non_capture_moves(&self, board: &BoardState, side: Side) -> Vec<Move> {
        board
            .squares_of(side)
            .flat_map(|square| self.legal_non_capture_moves(board, square))
            .collect()
    }

    /// Capture lines of `side` that take the side-wide maximum of pieces.
    pub fn all_legal_capture_moves(&self, board: &BoardState, side: Side) -> MoveGenResult<Vec<Move>> {
        let lines = all_blind_capture_moves(board, side, self.max_search_depth)?;
        let Some(longest) = lines.iter().map(|mv| mv.captures().len()).max() else {
            return Ok(Vec::new());
        };
        Ok(lines
            .into_iter()
            .filter(|mv| mv.captures().len() == longest)
            .collect())
    }
}

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&mut self, board: &BoardState, side: Side) -> MoveGenResult<Vec<Move>> {
        if !has_capture_moves(board, side)? {
            return Ok(self.all_legal_non_capture_moves(board, side));
        }
        self.all_legal_capture_moves(board, side)
    }
}

impl Default for CachedMoveGenerator {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

impl CachedMoveGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            inner: LegalMoveGenerator::new(config),
            caches: [
                MoveCache::new(config.cache_capacity),
                MoveCache::new(config.cache_capacity),
            ],
        }
    }

    #[inline]
    pub fn cache(&self, side: Side) -> &MoveCache {
        &self.caches[side.index()]
    }

    #[inline]
    pub fn cache_stats(&self, side: Side) -> MoveCacheStats {
        self.caches[side.index()].stats()
    }
}

impl MoveGenerator for CachedMoveGenerator {
    fn generate_legal_moves(&mut self, board: &BoardState, side: Side) -> MoveGenResult<Vec<Move>> {
        let key = board.key();
        if let Some(moves) = self.caches[side.index()].probe(&key) {
            trace!("move cache hit for {side} on {key}");
            return Ok(moves.to_vec());
        }

        let moves = self.inner.generate_legal_moves(board, side)?;
        self.caches[side.index()].store(key, moves.clone());
        Ok(moves)
    }
}
