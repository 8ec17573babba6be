//! Crate root module declarations for the Plum Draughts engine project.
//!
//! This file exposes all top-level subsystems (board state, move
//! representation, move generation, players, game orchestration, and utility
//! helpers) so binaries, tests, and benches can import stable module paths.

pub mod board_state {
    pub mod board_rules;
    pub mod board_state;
    pub mod board_types;
}

pub mod moves {
    pub mod direction_tables;
    pub mod draughts_move;
}

pub mod move_generation {
    pub mod capture_search;
    pub mod legal_move_apply;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_king;
    pub mod legal_moves_man;
    pub mod move_cache;
    pub mod move_generator;
    pub mod perft;
}

pub mod players {
    pub mod interactive_move_builder;
    pub mod player_random;
    pub mod player_scripted;
    pub mod player_trait;
}

pub mod game {
    pub mod draughts_game;
    pub mod turn;
}

pub mod utils {
    pub mod notation;
    pub mod position_key;
    pub mod render_board_state;
}

pub mod draughts_errors;
