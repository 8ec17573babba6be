//! Move value type.
//!
//! A move is the path of squares a piece visits, the diagonal taken between
//! each consecutive pair, and the squares it captures along the way. Capture
//! chains are built by appending single jumps to a move in progress.

use std::fmt;

use crate::board_state::board_types::{Direction, Square};
use crate::draughts_errors::{DraughtsError, DraughtsResult};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Move {
    locations: Vec<Square>,
    directions: Vec<Direction>,
    captures: Vec<Square>,
}

impl Move {
    pub fn new(locations: Vec<Square>, directions: Vec<Direction>, captures: Vec<Square>) -> Self {
        Self {
            locations,
            directions,
            captures,
        }
    }

    /// A move that has not left its origin yet; the root of a capture search.
    #[inline]
    pub fn from_origin(square: Square) -> Self {
        Self::new(vec![square], Vec::new(), Vec::new())
    }

    #[inline]
    pub fn quiet(from: Square, to: Square, direction: Direction) -> Self {
        Self::new(vec![from, to], vec![direction], Vec::new())
    }

    #[inline]
    pub fn jump(from: Square, to: Square, direction: Direction, captured: Square) -> Self {
        Self::new(vec![from, to], vec![direction], vec![captured])
    }

    #[inline]
    pub fn locations(&self) -> &[Square] {
        &self.locations
    }

    #[inline]
    pub fn directions(&self) -> &[Direction] {
        &self.directions
    }

    #[inline]
    pub fn captures(&self) -> &[Square] {
        &self.captures
    }

    #[inline]
    pub fn origin(&self) -> Option<Square> {
        self.locations.first().copied()
    }

    #[inline]
    pub fn destination(&self) -> Option<Square> {
        self.locations.last().copied()
    }

    #[inline]
    pub fn last_direction(&self) -> Option<Direction> {
        self.directions.last().copied()
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        !self.captures.is_empty()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    #[inline]
    pub fn has_captured(&self, square: Square) -> bool {
        self.captures.contains(&square)
    }

    /// Extend this move with `other`, which must start where this one ends.
    pub fn append(&mut self, other: &Move) -> DraughtsResult<()> {
        match (self.destination(), other.origin()) {
            (None, _) => self.locations.extend_from_slice(&other.locations),
            (Some(end), Some(start)) if end == start => {
                self.locations.extend_from_slice(&other.locations[1..]);
            }
            (Some(end), Some(start)) => {
                return Err(DraughtsError::MoveJunctionMismatch { end, start });
            }
            (Some(_), None) => return Err(DraughtsError::EmptyMove),
        }
        self.directions.extend_from_slice(&other.directions);
        self.captures.extend_from_slice(&other.captures);
        Ok(())
    }

    /// Copying form of [`Move::append`].
    pub fn appended(&self, other: &Move) -> DraughtsResult<Move> {
        let mut next = self.clone();
        next.append(other)?;
        Ok(next)
    }

    /// Break the move into its single-step sub-moves.
    pub fn split(&self) -> Vec<Move> {
        self.locations
            .windows(2)
            .enumerate()
            .map(|(i, pair)| {
                Move::new(
                    pair.to_vec(),
                    self.directions.get(i).copied().into_iter().collect(),
                    self.captures.get(i).copied().into_iter().collect(),
                )
            })
            .collect()
    }

    /// Whether `prefix` is the beginning of this move (same path, directions
    /// and captures so far).
    pub fn starts_with(&self, prefix: &Move) -> bool {
        self.locations.starts_with(&prefix.locations)
            && self.directions.starts_with(&prefix.directions)
            && self.captures.starts_with(&prefix.captures)
    }

    /// `a-b` for quiet moves, `axbxc...` for captures.
    pub fn notation(&self) -> String {
        let separator = if self.is_capture() { "x" } else { "-" };
        self.locations
            .iter()
            .map(|square| square.to_string())
            .collect::<Vec<_>>()
            .join(separator)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.notation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Direction::*;

    #[test]
    fn notation_uses_dash_or_cross() {
        assert_eq!(Move::quiet(31, 26, NorthWest).notation(), "31-26");
        let chain = Move::new(
            vec![6, 17, 28],
            vec![SouthEast, SouthEast],
            vec![11, 22],
        );
        assert_eq!(chain.notation(), "6x17x28");
        assert_eq!(chain.to_string(), "6x17x28");
    }

    #[test]
    fn append_joins_on_shared_square() {
        let mut chain = Move::from_origin(7);
        chain.append(&Move::jump(7, 18, SouthEast, 12)).expect("junction matches");
        chain.append(&Move::jump(18, 29, SouthEast, 23)).expect("junction matches");
        assert_eq!(chain.locations(), &[7, 18, 29]);
        assert_eq!(chain.directions(), &[SouthEast, SouthEast]);
        assert_eq!(chain.captures(), &[12, 23]);
    }

    #[test]
    fn append_to_empty_move_copies_other() {
        let mut chain = Move::default();
        chain.append(&Move::quiet(31, 26, NorthWest)).expect("empty accepts anything");
        assert_eq!(chain, Move::quiet(31, 26, NorthWest));
    }

    #[test]
    fn append_rejects_mismatched_junction() {
        let mut chain = Move::quiet(31, 26, NorthWest);
        let err = chain
            .append(&Move::quiet(27, 21, NorthWest))
            .expect_err("junction differs");
        assert_eq!(err, DraughtsError::MoveJunctionMismatch { end: 26, start: 27 });
        // Left untouched.
        assert_eq!(chain.locations(), &[31, 26]);
    }

    #[test]
    fn split_yields_single_jumps() {
        let chain = Move::new(
            vec![7, 29, 47],
            vec![SouthEast, SouthWest],
            vec![18, 38],
        );
        assert_eq!(
            chain.split(),
            vec![Move::jump(7, 29, SouthEast, 18), Move::jump(29, 47, SouthWest, 38)]
        );
        assert_eq!(
            Move::quiet(31, 26, NorthWest).split(),
            vec![Move::quiet(31, 26, NorthWest)]
        );
    }

    #[test]
    fn prefix_detection_follows_path_and_captures() {
        let chain = Move::new(
            vec![7, 29, 47],
            vec![SouthEast, SouthWest],
            vec![18, 38],
        );
        assert!(chain.starts_with(&Move::from_origin(7)));
        assert!(chain.starts_with(&Move::jump(7, 29, SouthEast, 18)));
        assert!(!chain.starts_with(&Move::jump(7, 29, SouthEast, 12)));
        assert!(!chain.starts_with(&Move::from_origin(8)));
    }
}
