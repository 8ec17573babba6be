//! Step-by-step construction of a move, as a human front-end drives it.
//!
//! The user selects a piece, then picks landing squares one at a time. Every
//! step is checked against the legal-move set, so the builder can only ever
//! finish on a legal move. Capture chains stay in progress until the path
//! matches a complete legal line.

use crate::board_state::{board_state::BoardState, board_types::*};
use crate::draughts_errors::{DraughtsError, DraughtsResult};
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::draughts_move::Move;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildStep {
    /// More landing squares must be picked.
    InProgress { partial: Move, landings: Vec<Square> },
    /// The path is a complete legal move.
    Complete(Move),
}

pub struct InteractiveMoveBuilder<G: MoveGenerator> {
    generator: G,
    board: BoardState,
    side: Side,
    partial: Option<Move>,
}

impl<G: MoveGenerator> InteractiveMoveBuilder<G> {
    pub fn new(generator: G, board: BoardState, side: Side) -> Self {
        Self {
            generator,
            board,
            side,
            partial: None,
        }
    }

    #[inline]
    pub fn partial(&self) -> Option<&Move> {
        self.partial.as_ref()
    }

    /// Squares holding a piece that has at least one legal move.
    pub fn selectable_pieces(&mut self) -> DraughtsResult<Vec<Square>> {
        let mut origins: Vec<Square> = self
            .generator
            .generate_legal_moves(&self.board, self.side)?
            .iter()
            .filter_map(Move::origin)
            .collect();
        origins.dedup();
        Ok(origins)
    }

    /// Start a move from `square`, dropping any move in progress.
    pub fn select(&mut self, square: Square) -> DraughtsResult<Vec<Square>> {
        let moves = self
            .generator
            .legal_moves_from(&self.board, square, self.side, false)?;
        if moves.is_empty() {
            return Err(DraughtsError::IllegalMove(format!("no legal move from {square}")));
        }
        let partial = Move::from_origin(square);
        let landings = next_landings(&moves, &partial);
        self.partial = Some(partial);
        Ok(landings)
    }

    /// Extend the move in progress by one landing on `to`.
    pub fn step(&mut self, to: Square) -> DraughtsResult<BuildStep> {
        let partial = self.partial.clone().ok_or(DraughtsError::EmptyMove)?;
        let origin = partial.origin().ok_or(DraughtsError::EmptyMove)?;

        let candidates = if partial.directions().is_empty() {
            self.generator
                .legal_moves_from(&self.board, origin, self.side, false)?
        } else {
            self.generator
                .legal_continuations(&self.board, &partial, self.side)?
        };

        let played = partial.directions().len();
        let next_step = candidates
            .iter()
            .filter(|mv| mv.locations().get(played + 1) == Some(&to))
            .find_map(|mv| mv.split().into_iter().nth(played))
            .ok_or_else(|| {
                DraughtsError::IllegalMove(format!("{} cannot continue to {to}", partial.notation()))
            })?;
        let extended = partial.appended(&next_step)?;

        if let Some(complete) = candidates.iter().find(|mv| **mv == extended) {
            self.partial = None;
            return Ok(BuildStep::Complete(complete.clone()));
        }

        let landings = next_landings(&candidates, &extended);
        self.partial = Some(extended.clone());
        Ok(BuildStep::InProgress {
            partial: extended,
            landings,
        })
    }

    pub fn cancel(&mut self) {
        self.partial = None;
    }
}

fn next_landings(candidates: &[Move], partial: &Move) -> Vec<Square> {
    let played = partial.directions().len();
    let mut landings: Vec<Square> = candidates
        .iter()
        .filter(|mv| mv.starts_with(partial))
        .filter_map(|mv| mv.locations().get(played + 1).copied())
        .collect();
    landings.sort_unstable();
    landings.dedup();
    landings
}
