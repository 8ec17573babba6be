//! Canonical draughts rule constants.
//!
//! Board geometry for the standard 50-square game plus the defaults used by
//! move generation and the game loop.

/// Dark squares per row.
pub const BOARD_WIDTH: usize = 5;
/// Rows on the board.
pub const BOARD_ROWS: usize = 10;
/// Playable squares on the standard board.
pub const BOARD_SQUARES: usize = BOARD_WIDTH * BOARD_ROWS;
/// Rows filled with men for each side at the start of a game.
pub const START_ROWS: usize = 4;

/// Weight of a king relative to a man when scoring material.
pub const DEFAULT_KING_WEIGHT: u32 = 2;

/// Legal-move lists kept per side before the oldest entry is evicted.
pub const MOVE_CACHE_CAPACITY: usize = 200_000;

/// Capture-search recursion ceiling. A 50-square board can never reach it.
pub const MAX_CAPTURE_SEARCH_DEPTH: usize = 100;

/// Thinking time per side, in minutes.
pub const DEFAULT_TIME_LIMIT_MINUTES: i64 = 20;

/// Standard start position expressed as a position key.
pub const STARTING_POSITION_KEY: &str =
    "pppppppppppppppppppp..........PPPPPPPPPPPPPPPPPPPP";
