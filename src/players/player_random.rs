//! Uniform random-move player.
//!
//! Selects uniformly from legal moves and is primarily used for self-play,
//! integration testing, and exercising the move cache.

use rand::prelude::IndexedRandom;
use rand::{rngs::StdRng, SeedableRng};

use crate::board_state::{board_state::BoardState, board_types::Side};
use crate::draughts_errors::DraughtsResult;
use crate::move_generation::legal_move_generator::CachedMoveGenerator;
use crate::move_generation::move_generator::{GeneratorConfig, MoveGenerator};
use crate::moves::draughts_move::Move;
use crate::players::player_trait::Player;

pub struct RandomPlayer {
    seed: u64,
    rng: StdRng,
    move_generator: CachedMoveGenerator,
}

impl RandomPlayer {
    pub fn new(seed: u64) -> Self {
        Self::with_config(seed, GeneratorConfig::default())
    }

    pub fn with_config(seed: u64, config: GeneratorConfig) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
            move_generator: CachedMoveGenerator::new(config),
        }
    }

    pub fn move_generator(&self) -> &CachedMoveGenerator {
        &self.move_generator
    }
}

impl Player for RandomPlayer {
    fn name(&self) -> &str {
        "random"
    }

    /// Reseeds, so every game from the same seed replays identically.
    fn new_game(&mut self) {
        self.rng = StdRng::seed_from_u64(self.seed);
    }

    fn choose_move(&mut self, board: &BoardState, side: Side) -> DraughtsResult<Option<Move>> {
        let legal_moves = self.move_generator.generate_legal_moves(board, side)?;
        Ok(legal_moves.as_slice().choose(&mut self.rng).cloned())
    }
}
