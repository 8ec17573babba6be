//! Player abstraction used by the game orchestration.
//!
//! A player is handed a private copy of the board and answers with the move
//! it wants to play, or `None` when it has nothing to propose.

use crate::board_state::{board_state::BoardState, board_types::Side};
use crate::draughts_errors::DraughtsResult;
use crate::moves::draughts_move::Move;

pub trait Player: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn choose_move(&mut self, board: &BoardState, side: Side) -> DraughtsResult<Option<Move>>;
}
