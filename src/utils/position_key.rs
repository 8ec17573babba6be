//! Canonical position keys.
//!
//! A key holds one character per square in square order: `.` for an empty
//! square, `P`/`K` for a white man/king and `p`/`k` for a black man/king. Keys
//! index the move cache and double as a compact way to set up positions.

use std::fmt;

use crate::board_state::board_state::BoardState;
use crate::board_state::board_types::{Piece, Square};
use crate::draughts_errors::{DraughtsError, DraughtsResult};

const EMPTY_CHAR: char = '.';

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PositionKey(String);

impl PositionKey {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PositionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn generate_position_key(board: &BoardState) -> PositionKey {
    let key = (0..board.size())
        .map(|square| {
            board
                .piece_at(square as Square)
                .map_or(EMPTY_CHAR, Piece::key_char)
        })
        .collect();
    PositionKey(key)
}

/// Build a standard board from a key string.
pub fn parse_position_key(key: &str) -> DraughtsResult<BoardState> {
    let mut board = BoardState::new_empty();

    let length = key.chars().count();
    if length != board.size() {
        return Err(DraughtsError::InvalidPositionKey(format!(
            "expected {} squares, found {length}",
            board.size()
        )));
    }

    for (square, ch) in key.chars().enumerate() {
        if ch == EMPTY_CHAR {
            continue;
        }
        let piece = Piece::from_key_char(ch).ok_or_else(|| {
            DraughtsError::InvalidPositionKey(format!("unknown character '{ch}' on square {square}"))
        })?;
        board.place(square as Square, piece.side(), piece.is_king())?;
    }

    Ok(board)
}
