use crate::board_state::board_types::Square;
use crate::draughts_errors::{DraughtsError, DraughtsResult};
use crate::moves::draughts_move::Move;

/// Squares and move kind read from a notation string such as `32-28` or
/// `6x17x28`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedNotation {
    pub squares: Vec<Square>,
    pub is_capture: bool,
}

pub fn parse_notation(notation: &str) -> DraughtsResult<ParsedNotation> {
    let trimmed = notation.trim();
    let is_capture = trimmed.contains('x');
    let separator = if is_capture { 'x' } else { '-' };
    if is_capture && trimmed.contains('-') {
        return Err(DraughtsError::InvalidNotation(format!(
            "mixed separators in {notation}"
        )));
    }

    let squares = trimmed
        .split(separator)
        .map(|part| {
            part.parse::<Square>()
                .map_err(|_| DraughtsError::InvalidNotation(format!("bad square {part:?} in {notation}")))
        })
        .collect::<DraughtsResult<Vec<_>>>()?;

    if squares.len() < 2 {
        return Err(DraughtsError::InvalidNotation(format!(
            "{notation} needs at least two squares"
        )));
    }
    if !is_capture && squares.len() != 2 {
        return Err(DraughtsError::InvalidNotation(format!(
            "quiet move {notation} must name exactly two squares"
        )));
    }

    Ok(ParsedNotation {
        squares,
        is_capture,
    })
}

/// Resolve `notation` to one of `legal_moves`.
///
/// A full path matches exactly. A capture written only as origin and
/// destination (`6x48`) is accepted when exactly one legal line fits it.
pub fn notation_to_move(notation: &str, legal_moves: &[Move]) -> DraughtsResult<Move> {
    let parsed = parse_notation(notation)?;

    if let Some(exact) = legal_moves
        .iter()
        .find(|mv| mv.is_capture() == parsed.is_capture && mv.locations() == parsed.squares)
    {
        return Ok(exact.clone());
    }

    if parsed.is_capture && parsed.squares.len() == 2 {
        let mut candidates = legal_moves.iter().filter(|mv| {
            mv.is_capture()
                && mv.origin() == Some(parsed.squares[0])
                && mv.destination() == Some(parsed.squares[1])
        });
        match (candidates.next(), candidates.next()) {
            (Some(only), None) => return Ok(only.clone()),
            (Some(_), Some(_)) => {
                return Err(DraughtsError::InvalidNotation(format!(
                    "{notation} is ambiguous; spell out the full path"
                )))
            }
            _ => {}
        }
    }

    Err(DraughtsError::IllegalMove(notation.trim().to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board_state::board_types::Direction::*;

    #[test]
    fn parses_quiet_and_capture_forms() {
        assert_eq!(
            parse_notation("32-28"),
            Ok(ParsedNotation {
                squares: vec![32, 28],
                is_capture: false
            })
        );
        assert_eq!(
            parse_notation(" 6x17x28 "),
            Ok(ParsedNotation {
                squares: vec![6, 17, 28],
                is_capture: true
            })
        );
    }

    #[test]
    fn rejects_malformed_notation() {
        for bad in ["", "32", "32-28-23", "6x17-28", "a-b", "300-1"] {
            assert!(
                matches!(parse_notation(bad), Err(DraughtsError::InvalidNotation(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn resolves_against_legal_moves() {
        let legal = vec![
            Move::quiet(32, 28, NorthEast),
            Move::quiet(32, 27, NorthWest),
        ];
        assert_eq!(notation_to_move("32-27", &legal), Ok(legal[1].clone()));
        assert_eq!(
            notation_to_move("33-28", &legal),
            Err(DraughtsError::IllegalMove("33-28".to_owned()))
        );
        // Quiet notation never matches a capture, nor the reverse.
        assert!(notation_to_move("32x28", &legal).is_err());
    }

    #[test]
    fn abbreviated_capture_needs_a_unique_line() {
        let first = Move::new(vec![7, 29, 47, 25, 11], vec![SouthEast; 4], vec![18, 38, 36, 16]);
        let second = Move::new(vec![7, 29, 47, 25, 7], vec![SouthEast; 4], vec![18, 38, 36, 16]);
        let legal = vec![first.clone(), second];
        assert_eq!(notation_to_move("7x11", &legal), Ok(first.clone()));
        assert_eq!(notation_to_move("7x29x47x25x11", &legal), Ok(first));

        let twin = Move::new(vec![7, 25, 47, 29, 11], vec![SouthEast; 4], vec![16, 36, 38, 18]);
        let ambiguous = vec![legal[0].clone(), twin];
        assert!(matches!(
            notation_to_move("7x11", &ambiguous),
            Err(DraughtsError::InvalidNotation(_))
        ));
    }
}
