//! Random-vs-random self-play runner.
//!
//! Run with:
//! `cargo run --release -- --seed 42`
//! `RUST_LOG=debug cargo run --release -- --max-plies 120`

use std::io::Write;
use std::process::ExitCode;

use chrono::TimeDelta;
use clap::Parser;
use log::error;

use plum_draughts::board_state::board_rules::DEFAULT_TIME_LIMIT_MINUTES;
use plum_draughts::game::draughts_game::{DraughtsGame, GameConfig};
use plum_draughts::players::player_random::RandomPlayer;
use plum_draughts::utils::render_board_state::render_board_state;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for White's player; Black uses the next value
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Declare a draw after this many plies
    #[arg(long, default_value_t = GameConfig::default().max_plies)]
    max_plies: u32,

    /// Thinking time per side for the whole game
    #[arg(long, default_value_t = DEFAULT_TIME_LIMIT_MINUTES)]
    time_limit_minutes: i64,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .format(|buf, record| writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args()))
    .init();

    let Some(time_limit) = TimeDelta::try_minutes(args.time_limit_minutes) else {
        error!("time limit of {} minutes is out of range", args.time_limit_minutes);
        return ExitCode::FAILURE;
    };

    let mut game = DraughtsGame::new(GameConfig {
        max_plies: args.max_plies,
        time_limit,
        ..GameConfig::default()
    });
    let mut white = RandomPlayer::new(args.seed);
    let mut black = RandomPlayer::new(args.seed.wrapping_add(1));

    match game.play(&mut white, &mut black) {
        Ok(result) => {
            println!("{}", render_board_state(&result.final_board));
            println!("{}", result.played_moves.join(" "));
            println!("{}", result.report());
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("game aborted: {err}");
            ExitCode::FAILURE
        }
    }
}
