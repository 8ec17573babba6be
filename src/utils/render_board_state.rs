//! Terminal-oriented Unicode board renderer.
//!
//! Dark squares of even rows sit one column to the right of those of odd
//! rows, matching the direction tables' offsets.

use crate::board_state::{board_state::BoardState, board_types::*};

const LIGHT_SQUARE: char = ' ';
const EMPTY_DARK_SQUARE: char = '·';

/// Render the board to a Unicode string for terminal output.
///
/// Each row is prefixed with the index of its first dark square, so any
/// square number can be read off by counting dark cells.
pub fn render_board_state(board: &BoardState) -> String {
    let tables = board.tables();
    let width = tables.width();
    let label_width = (board.size().saturating_sub(1)).to_string().len();
    let mut out = String::new();

    for row in 0..tables.rows() {
        let first = row * width;
        out.push_str(&format!("{first:>label_width$} "));

        for column in 0..width {
            let square = (first + column) as Square;
            let cell = board
                .piece_at(square)
                .map(piece_to_unicode)
                .unwrap_or(EMPTY_DARK_SQUARE);

            if row % 2 == 0 {
                out.push(LIGHT_SQUARE);
                out.push(' ');
                out.push(cell);
            } else {
                out.push(cell);
                out.push(' ');
                out.push(LIGHT_SQUARE);
            }
            if column + 1 < width {
                out.push(' ');
            }
        }

        out.push('\n');
    }

    out
}

fn piece_to_unicode(piece: Piece) -> char {
    match piece {
        Piece::WhiteMan => '⛀',
        Piece::WhiteKing => '⛁',
        Piece::BlackMan => '⛂',
        Piece::BlackKing => '⛃',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_position_rows() {
        let rendered = render_board_state(&BoardState::new_game());
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], " 0   ⛂   ⛂   ⛂   ⛂   ⛂");
        assert_eq!(lines[1], " 5 ⛂   ⛂   ⛂   ⛂   ⛂  ");
        assert_eq!(lines[4], "20   ·   ·   ·   ·   ·");
        assert_eq!(lines[9], "45 ⛀   ⛀   ⛀   ⛀   ⛀  ");
    }

    #[test]
    fn kings_use_crowned_glyphs() {
        let mut board = BoardState::new_empty();
        board.set_positions(&[], &[], &[0], &[49]).expect("valid squares");
        let rendered = render_board_state(&board);
        assert!(rendered.starts_with(" 0   ⛁"));
        assert!(rendered.contains("45 ·   ·   ·   ·   ⛃  "));
    }
}
