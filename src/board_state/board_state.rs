//! Board occupancy model.
//!
//! `BoardState` stores one optional occupant per dark square together with the
//! shared, immutable direction tables of its geometry. Cloning produces an
//! independent deep copy of the occupants; only the tables are shared.

use std::sync::Arc;

use crate::board_state::board_rules::{START_ROWS, STARTING_POSITION_KEY};
use crate::board_state::board_types::*;
use crate::draughts_errors::{DraughtsError, DraughtsResult};
use crate::moves::direction_tables::DirectionTables;
use crate::utils::position_key::{generate_position_key, parse_position_key, PositionKey};

#[derive(Debug, Clone)]
pub struct BoardState {
    tables: Arc<DirectionTables>,
    squares: Vec<Option<Piece>>,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::with_tables(DirectionTables::standard())
    }
}

impl PartialEq for BoardState {
    fn eq(&self, other: &Self) -> bool {
        self.tables.width() == other.tables.width()
            && self.tables.rows() == other.tables.rows()
            && self.squares == other.squares
    }
}

impl Eq for BoardState {}

impl BoardState {
    /// Empty standard board.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Empty board over the given geometry.
    pub fn with_tables(tables: Arc<DirectionTables>) -> Self {
        let size = tables.size();
        Self {
            tables,
            squares: vec![None; size],
        }
    }

    /// Standard start position: Black on the top rows, White on the bottom rows.
    pub fn new_game() -> Self {
        let mut board = Self::new_empty();
        board.fill_start_rows(START_ROWS);
        debug_assert_eq!(board.key().as_str(), STARTING_POSITION_KEY);
        board
    }

    #[inline]
    pub fn from_key(key: &str) -> DraughtsResult<Self> {
        parse_position_key(key)
    }

    #[inline]
    pub fn key(&self) -> PositionKey {
        generate_position_key(self)
    }

    #[inline]
    pub fn tables(&self) -> &DirectionTables {
        &self.tables
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.squares.len()
    }

    #[inline]
    pub fn is_on_board(&self, square: Square) -> bool {
        usize::from(square) < self.squares.len()
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares.get(usize::from(square)).copied().flatten()
    }

    #[inline]
    pub fn occupied_by(&self, square: Square) -> Option<Side> {
        self.piece_at(square).map(Piece::side)
    }

    #[inline]
    pub fn is_empty_square(&self, square: Square) -> bool {
        self.is_on_board(square) && self.piece_at(square).is_none()
    }

    pub fn is_king(&self, square: Square) -> DraughtsResult<bool> {
        self.piece_at(square)
            .map(Piece::is_king)
            .ok_or(DraughtsError::EmptySquare(square))
    }

    pub fn place(&mut self, square: Square, side: Side, is_king: bool) -> DraughtsResult<()> {
        let slot = self
            .squares
            .get_mut(usize::from(square))
            .ok_or(DraughtsError::SquareOffBoard(square))?;
        *slot = Some(Piece::new(side, is_king));
        Ok(())
    }

    pub fn remove(&mut self, square: Square) -> DraughtsResult<Piece> {
        self.squares
            .get_mut(usize::from(square))
            .ok_or(DraughtsError::SquareOffBoard(square))?
            .take()
            .ok_or(DraughtsError::EmptySquare(square))
    }

    pub fn clear(&mut self) {
        self.squares.fill(None);
    }

    /// Clear the board and put pieces on the listed squares.
    pub fn set_positions(
        &mut self,
        white_men: &[Square],
        black_men: &[Square],
        white_kings: &[Square],
        black_kings: &[Square],
    ) -> DraughtsResult<()> {
        self.clear();
        for (squares, side, is_king) in [
            (white_men, Side::White, false),
            (white_kings, Side::White, true),
            (black_men, Side::Black, false),
            (black_kings, Side::Black, true),
        ] {
            for &square in squares {
                self.place(square, side, is_king)?;
            }
        }
        Ok(())
    }

    /// Occupied squares of `side`, ascending.
    pub fn squares_of(&self, side: Side) -> impl Iterator<Item = Square> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter(move |(_, piece)| piece.is_some_and(|p| p.side() == side))
            .map(|(square, _)| square as Square)
    }

    pub fn piece_count(&self, side: Side) -> usize {
        self.squares_of(side).count()
    }

    /// Material count with kings weighted by `king_weight`.
    pub fn score(&self, side: Side, king_weight: u32) -> u32 {
        self.squares
            .iter()
            .flatten()
            .filter(|piece| piece.side() == side)
            .map(|piece| if piece.is_king() { king_weight } else { 1 })
            .sum()
    }

    /// Crown the piece on `square` if it is a man standing on its far row.
    /// Returns whether a crowning happened.
    pub fn crown_if_promotable(&mut self, square: Square) -> bool {
        let Some(piece) = self.piece_at(square) else {
            return false;
        };
        if piece.is_king() {
            return false;
        }

        let row = self.tables.row_of(square);
        let far_row = match piece.side() {
            Side::White => row == 0,
            Side::Black => row + 1 == self.tables.rows(),
        };
        if far_row {
            self.squares[usize::from(square)] = Some(piece.crowned());
        }
        far_row
    }

    fn fill_start_rows(&mut self, start_rows: usize) {
        let width = self.tables.width();
        let size = self.size();
        for square in 0..start_rows * width {
            self.squares[square] = Some(Piece::BlackMan);
        }
        for square in size - start_rows * width..size {
            self.squares[square] = Some(Piece::WhiteMan);
        }
    }
}
