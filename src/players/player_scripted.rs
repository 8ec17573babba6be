//! Player that replays a fixed script.
//!
//! Useful for reproducing games and for driving the orchestration in tests:
//! entries may be ready-made moves (played verbatim, legal or not) or
//! notation strings resolved against the legal moves of the position.

use std::collections::VecDeque;

use crate::board_state::{board_state::BoardState, board_types::Side};
use crate::draughts_errors::DraughtsResult;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::draughts_move::Move;
use crate::players::player_trait::Player;
use crate::utils::notation::notation_to_move;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedStep {
    Move(Move),
    Notation(String),
}

#[derive(Debug, Clone, Default)]
pub struct ScriptedPlayer {
    script: VecDeque<ScriptedStep>,
    move_generator: LegalMoveGenerator,
}

impl ScriptedPlayer {
    pub fn new(steps: impl IntoIterator<Item = ScriptedStep>) -> Self {
        Self {
            script: steps.into_iter().collect(),
            move_generator: LegalMoveGenerator::default(),
        }
    }

    pub fn from_moves(moves: impl IntoIterator<Item = Move>) -> Self {
        Self::new(moves.into_iter().map(ScriptedStep::Move))
    }

    pub fn from_notations<S: Into<String>>(notations: impl IntoIterator<Item = S>) -> Self {
        Self::new(notations.into_iter().map(|n| ScriptedStep::Notation(n.into())))
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl Player for ScriptedPlayer {
    fn name(&self) -> &str {
        "scripted"
    }

    fn choose_move(&mut self, board: &BoardState, side: Side) -> DraughtsResult<Option<Move>> {
        match self.script.pop_front() {
            None => Ok(None),
            Some(ScriptedStep::Move(mv)) => Ok(Some(mv)),
            Some(ScriptedStep::Notation(notation)) => {
                let legal_moves = self.move_generator.generate_legal_moves(board, side)?;
                notation_to_move(&notation, &legal_moves).map(Some)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board_state::board_types::Direction;
    use crate::draughts_errors::DraughtsError;

    #[test]
    fn replays_notations_in_order() {
        let board = BoardState::new_game();
        let mut player = ScriptedPlayer::from_notations(["32-28", "31-27"]);
        assert_eq!(
            player.choose_move(&board, Side::White),
            Ok(Some(Move::quiet(32, 28, Direction::NorthEast)))
        );
        assert_eq!(player.remaining(), 1);
        assert_eq!(
            player.choose_move(&board, Side::White),
            Ok(Some(Move::quiet(31, 27, Direction::NorthEast)))
        );
        assert_eq!(player.choose_move(&board, Side::White), Ok(None));
    }

    #[test]
    fn illegal_notation_is_an_error_but_raw_moves_pass_through() {
        let board = BoardState::new_game();
        let mut player = ScriptedPlayer::new([
            ScriptedStep::Notation("32-23".to_owned()),
            ScriptedStep::Move(Move::quiet(32, 23, Direction::NorthEast)),
        ]);
        assert_eq!(
            player.choose_move(&board, Side::White),
            Err(DraughtsError::IllegalMove("32-23".to_owned()))
        );
        assert_eq!(
            player.choose_move(&board, Side::White),
            Ok(Some(Move::quiet(32, 23, Direction::NorthEast)))
        );
    }
}
