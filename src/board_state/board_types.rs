//! Core value types for the board representation.

pub use crate::board_state::board_state::BoardState;

/// Index of a dark playable square in row-major scan order.
pub type Square = u8;

/// Side to move / owner of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::White, Side::Black];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Side::White => 0,
            Side::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Diagonals a man of this side may step along.
    #[inline]
    pub const fn forward_directions(self) -> [Direction; 2] {
        match self {
            Side::White => [Direction::NorthEast, Direction::NorthWest],
            Side::Black => [Direction::SouthEast, Direction::SouthWest],
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::White => write!(f, "white"),
            Side::Black => write!(f, "black"),
        }
    }
}

/// Diagonal compass direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Direction {
    /// Search order used by every generator.
    pub const ALL: [Direction; 4] = [
        Direction::NorthEast,
        Direction::SouthEast,
        Direction::SouthWest,
        Direction::NorthWest,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Direction::NorthEast => 0,
            Direction::NorthWest => 1,
            Direction::SouthEast => 2,
            Direction::SouthWest => 3,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::NorthEast => Direction::SouthWest,
            Direction::SouthWest => Direction::NorthEast,
            Direction::NorthWest => Direction::SouthEast,
            Direction::SouthEast => Direction::NorthWest,
        }
    }
}

/// Occupant of a square: side and rank in one tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Piece {
    WhiteMan,
    WhiteKing,
    BlackMan,
    BlackKing,
}

impl Piece {
    #[inline]
    pub const fn new(side: Side, is_king: bool) -> Self {
        match (side, is_king) {
            (Side::White, false) => Piece::WhiteMan,
            (Side::White, true) => Piece::WhiteKing,
            (Side::Black, false) => Piece::BlackMan,
            (Side::Black, true) => Piece::BlackKing,
        }
    }

    #[inline]
    pub const fn side(self) -> Side {
        match self {
            Piece::WhiteMan | Piece::WhiteKing => Side::White,
            Piece::BlackMan | Piece::BlackKing => Side::Black,
        }
    }

    #[inline]
    pub const fn is_king(self) -> bool {
        matches!(self, Piece::WhiteKing | Piece::BlackKing)
    }

    #[inline]
    pub const fn crowned(self) -> Self {
        Piece::new(self.side(), true)
    }

    /// Character used for this piece in position keys.
    #[inline]
    pub const fn key_char(self) -> char {
        match self {
            Piece::WhiteMan => 'P',
            Piece::WhiteKing => 'K',
            Piece::BlackMan => 'p',
            Piece::BlackKing => 'k',
        }
    }

    #[inline]
    pub const fn from_key_char(ch: char) -> Option<Self> {
        match ch {
            'P' => Some(Piece::WhiteMan),
            'K' => Some(Piece::WhiteKing),
            'p' => Some(Piece::BlackMan),
            'k' => Some(Piece::BlackKing),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_directions_pair_up() {
        for direction in Direction::ALL {
            assert_ne!(direction.opposite(), direction);
            assert_eq!(direction.opposite().opposite(), direction);
        }
        assert_eq!(Direction::NorthEast.opposite(), Direction::SouthWest);
        assert_eq!(Direction::NorthWest.opposite(), Direction::SouthEast);
    }

    #[test]
    fn piece_tag_round_trips_side_and_rank() {
        for side in Side::ALL {
            for is_king in [false, true] {
                let piece = Piece::new(side, is_king);
                assert_eq!(piece.side(), side);
                assert_eq!(piece.is_king(), is_king);
                assert_eq!(Piece::from_key_char(piece.key_char()), Some(piece));
            }
        }
        assert_eq!(Piece::BlackMan.crowned(), Piece::BlackKing);
        assert_eq!(Piece::WhiteKing.crowned(), Piece::WhiteKing);
    }
}
