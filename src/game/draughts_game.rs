//! Game orchestration: turn sequencing, clocks, history and end detection.
//!
//! The game owns the authoritative board and its own cached generator. Each
//! turn is delegated to [`play_turn`], which keeps players away from the live
//! position. A turn that is rejected does not pass the move to the opponent,
//! but repeated rejections forfeit the game so automated players cannot stall
//! it forever.

use chrono::TimeDelta;
use log::{debug, info};

use crate::board_state::board_rules::{DEFAULT_KING_WEIGHT, DEFAULT_TIME_LIMIT_MINUTES};
use crate::board_state::{board_state::BoardState, board_types::Side};
use crate::draughts_errors::DraughtsResult;
use crate::game::turn::{play_turn, TurnOutcome, TurnReport};
use crate::move_generation::legal_move_generator::CachedMoveGenerator;
use crate::move_generation::move_generator::{GeneratorConfig, MoveGenerator};
use crate::moves::draughts_move::Move;
use crate::players::player_trait::Player;
use crate::utils::render_board_state::render_board_state;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinReason {
    /// The loser had no legal move on its turn.
    NoLegalMoves,
    /// The loser's clock ran out.
    OutOfTime,
    /// The loser had too many consecutive proposals rejected.
    Forfeit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Win { winner: Side, reason: WinReason },
    DrawMaxPlies,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub max_plies: u32,
    /// Thinking time available to each side for the whole game.
    pub time_limit: TimeDelta,
    /// Consecutive rejected proposals tolerated before a forfeit.
    pub max_rejections: u32,
    pub generator: GeneratorConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_plies: 400,
            time_limit: TimeDelta::minutes(DEFAULT_TIME_LIMIT_MINUTES),
            max_rejections: 3,
            generator: GeneratorConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    pub outcome: GameOutcome,
    pub final_board: BoardState,
    pub played_moves: Vec<String>,
    pub plies: u32,
    pub white_time_used: TimeDelta,
    pub black_time_used: TimeDelta,
    pub white_score: u32,
    pub black_score: u32,
}

impl GameResult {
    pub fn report(&self) -> String {
        let outcome = match self.outcome {
            GameOutcome::Win { winner, reason } => format!("{winner} wins ({reason:?})"),
            GameOutcome::DrawMaxPlies => "draw (ply limit)".to_owned(),
        };
        format!(
            "{outcome} after {} plies; score white={} black={}; time white={}ms black={}ms",
            self.plies,
            self.white_score,
            self.black_score,
            self.white_time_used.num_milliseconds(),
            self.black_time_used.num_milliseconds(),
        )
    }
}

pub struct DraughtsGame {
    config: GameConfig,
    board: BoardState,
    side_to_move: Side,
    generator: CachedMoveGenerator,
    history: Vec<(Side, Move)>,
    // [side]
    time_used: [TimeDelta; 2],
    rejections: u32,
    outcome: Option<GameOutcome>,
}

impl Default for DraughtsGame {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl DraughtsGame {
    /// Standard start position, White to move.
    pub fn new(config: GameConfig) -> Self {
        Self::from_position(BoardState::new_game(), Side::White, config)
    }

    pub fn from_position(board: BoardState, side_to_move: Side, config: GameConfig) -> Self {
        Self {
            generator: CachedMoveGenerator::new(config.generator),
            config,
            board,
            side_to_move,
            history: Vec::new(),
            time_used: [TimeDelta::zero(); 2],
            rejections: 0,
            outcome: None,
        }
    }

    #[inline]
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    #[inline]
    pub fn history(&self) -> &[(Side, Move)] {
        &self.history
    }

    #[inline]
    pub fn plies(&self) -> u32 {
        self.history.len() as u32
    }

    #[inline]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    #[inline]
    pub fn time_used(&self, side: Side) -> TimeDelta {
        self.time_used[side.index()]
    }

    pub fn remaining_time(&self, side: Side) -> TimeDelta {
        self.config.time_limit - self.time_used[side.index()]
    }

    pub fn legal_moves(&mut self) -> DraughtsResult<Vec<Move>> {
        self.generator
            .generate_legal_moves(&self.board, self.side_to_move)
    }

    /// Decide whether the game is over before the side to move plays.
    pub fn check_game_over(&mut self) -> DraughtsResult<Option<GameOutcome>> {
        if self.outcome.is_some() {
            return Ok(self.outcome);
        }

        let mover = self.side_to_move;
        let outcome = if self.remaining_time(mover) <= TimeDelta::zero() {
            Some(GameOutcome::Win {
                winner: mover.opposite(),
                reason: WinReason::OutOfTime,
            })
        } else if self.legal_moves()?.is_empty() {
            Some(GameOutcome::Win {
                winner: mover.opposite(),
                reason: WinReason::NoLegalMoves,
            })
        } else if self.plies() >= self.config.max_plies {
            Some(GameOutcome::DrawMaxPlies)
        } else {
            None
        };

        if let Some(outcome) = outcome {
            self.finish(outcome);
        }
        Ok(outcome)
    }

    /// Let `player` move for the side to move. Returns `None` once the game
    /// is over.
    pub fn play_turn(&mut self, player: &mut dyn Player) -> DraughtsResult<Option<TurnReport>> {
        if self.check_game_over()?.is_some() {
            return Ok(None);
        }

        let mover = self.side_to_move;
        let report = play_turn(player, &mut self.board, mover, &mut self.generator)?;
        self.time_used[mover.index()] = self.time_used[mover.index()] + report.elapsed;

        match &report.outcome {
            TurnOutcome::Played(mv) => {
                self.history.push((mover, mv.clone()));
                self.rejections = 0;
                self.side_to_move = mover.opposite();
                debug!("position after ply {}:\n{}", self.plies(), render_board_state(&self.board));
            }
            TurnOutcome::Rejected { .. } => {
                self.rejections += 1;
                if self.rejections >= self.config.max_rejections {
                    self.finish(GameOutcome::Win {
                        winner: mover.opposite(),
                        reason: WinReason::Forfeit,
                    });
                }
            }
        }

        if self.outcome.is_none() && self.remaining_time(mover) <= TimeDelta::zero() {
            self.finish(GameOutcome::Win {
                winner: mover.opposite(),
                reason: WinReason::OutOfTime,
            });
        }

        Ok(Some(report))
    }

    /// Play to the end with `white` and `black`.
    pub fn play(&mut self, white: &mut dyn Player, black: &mut dyn Player) -> DraughtsResult<GameResult> {
        white.new_game();
        black.new_game();
        info!("{} (white) vs {} (black)", white.name(), black.name());

        loop {
            let player: &mut dyn Player = match self.side_to_move {
                Side::White => &mut *white,
                Side::Black => &mut *black,
            };
            if self.play_turn(player)?.is_none() {
                break;
            }
        }

        let result = self.result();
        info!("game over: {}", result.report());
        Ok(result)
    }

    /// Snapshot of the game so far; the outcome defaults to a ply-limit draw
    /// while the game is still running.
    pub fn result(&self) -> GameResult {
        GameResult {
            outcome: self.outcome.unwrap_or(GameOutcome::DrawMaxPlies),
            final_board: self.board.clone(),
            played_moves: self.history.iter().map(|(_, mv)| mv.notation()).collect(),
            plies: self.plies(),
            white_time_used: self.time_used(Side::White),
            black_time_used: self.time_used(Side::Black),
            white_score: self.board.score(Side::White, DEFAULT_KING_WEIGHT),
            black_score: self.board.score(Side::Black, DEFAULT_KING_WEIGHT),
        }
    }

    fn finish(&mut self, outcome: GameOutcome) {
        info!("{outcome:?} at ply {}", self.plies());
        self.outcome = Some(outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board_state::board_types::Direction;
    use crate::players::player_random::RandomPlayer;
    use crate::players::player_scripted::{ScriptedPlayer, ScriptedStep};

    #[test]
    fn side_without_moves_loses() {
        let mut board = BoardState::new_empty();
        board.set_positions(&[32], &[], &[], &[]).expect("valid squares");
        let mut game = DraughtsGame::from_position(board, Side::Black, GameConfig::default());
        assert_eq!(
            game.check_game_over(),
            Ok(Some(GameOutcome::Win {
                winner: Side::White,
                reason: WinReason::NoLegalMoves
            }))
        );
        let mut player = ScriptedPlayer::default();
        assert_eq!(game.play_turn(&mut player), Ok(None));
    }

    #[test]
    fn capture_ends_the_game() {
        let mut board = BoardState::new_empty();
        board.set_positions(&[7], &[12], &[], &[]).expect("valid squares");
        let mut game = DraughtsGame::from_position(board, Side::White, GameConfig::default());
        let mut white = ScriptedPlayer::from_notations(["7x18"]);
        let mut black = ScriptedPlayer::default();

        let result = game.play(&mut white, &mut black).expect("game runs");
        assert_eq!(
            result.outcome,
            GameOutcome::Win {
                winner: Side::White,
                reason: WinReason::NoLegalMoves
            }
        );
        assert_eq!(result.played_moves, vec!["7x18".to_owned()]);
        assert_eq!(result.plies, 1);
        assert_eq!(result.white_score, 1);
        assert_eq!(result.black_score, 0);
    }

    #[test]
    fn rejected_turn_keeps_the_side_to_move() {
        let mut game = DraughtsGame::default();
        let mut player = ScriptedPlayer::new([
            ScriptedStep::Move(Move::quiet(32, 23, Direction::NorthEast)),
            ScriptedStep::Notation("32-28".to_owned()),
        ]);

        let report = game.play_turn(&mut player).expect("turn runs").expect("game running");
        assert!(!report.is_played());
        assert_eq!(game.side_to_move(), Side::White);
        assert_eq!(game.plies(), 0);

        let report = game.play_turn(&mut player).expect("turn runs").expect("game running");
        assert!(report.is_played());
        assert_eq!(game.side_to_move(), Side::Black);
        assert_eq!(game.history(), &[(Side::White, Move::quiet(32, 28, Direction::NorthEast))]);
    }

    #[test]
    fn repeated_rejections_forfeit() {
        let mut game = DraughtsGame::new(GameConfig {
            max_rejections: 2,
            ..GameConfig::default()
        });
        let mut white = ScriptedPlayer::default();
        let mut black = ScriptedPlayer::default();

        let result = game.play(&mut white, &mut black).expect("game runs");
        assert_eq!(
            result.outcome,
            GameOutcome::Win {
                winner: Side::Black,
                reason: WinReason::Forfeit
            }
        );
        assert!(result.played_moves.is_empty());
    }

    #[test]
    fn exhausted_clock_loses() {
        let mut game = DraughtsGame::new(GameConfig {
            time_limit: TimeDelta::zero(),
            ..GameConfig::default()
        });
        assert_eq!(
            game.check_game_over(),
            Ok(Some(GameOutcome::Win {
                winner: Side::Black,
                reason: WinReason::OutOfTime
            }))
        );
    }

    #[test]
    fn random_self_play_reaches_a_result() {
        let mut game = DraughtsGame::new(GameConfig {
            max_plies: 60,
            ..GameConfig::default()
        });
        let mut white = RandomPlayer::new(1);
        let mut black = RandomPlayer::new(2);

        let result = game.play(&mut white, &mut black).expect("game runs");
        assert!(result.plies <= 60);
        assert_eq!(result.played_moves.len() as u32, result.plies);
        if result.outcome == GameOutcome::DrawMaxPlies {
            assert_eq!(result.plies, 60);
        }
    }
}
