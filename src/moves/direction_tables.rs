//! Precomputed diagonal adjacency for the draughts board.
//!
//! Dark squares are numbered row by row. Even rows start one light square in
//! from the left edge, odd rows start on a dark square, so the neighbour
//! offsets alternate with row parity. The tables are built once per geometry
//! and shared read-only by every board of that geometry.

use std::sync::{Arc, OnceLock};

use crate::board_state::board_rules::{BOARD_ROWS, BOARD_WIDTH};
use crate::board_state::board_types::{Direction, Square};

static STANDARD_TABLES: OnceLock<Arc<DirectionTables>> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionTables {
    width: usize,
    rows: usize,
    // [direction][square]
    neighbours: [Vec<Option<Square>>; 4],
}

impl DirectionTables {
    /// Build the adjacency tables for a board of `width` dark squares per row
    /// and `rows` rows.
    ///
    /// # Panics
    /// Panics when the board has more squares than `Square` can index.
    pub fn build(width: usize, rows: usize) -> Self {
        let size = width * rows;
        assert!(
            size <= usize::from(Square::MAX) + 1,
            "a {width}x{rows} board does not fit the square index type"
        );

        let mut neighbours: [Vec<Option<Square>>; 4] = std::array::from_fn(|_| vec![None; size]);
        for direction in Direction::ALL {
            for square in 0..size {
                neighbours[direction.index()][square] =
                    neighbour_index(square, direction, width, rows).map(|n| n as Square);
            }
        }

        Self {
            width,
            rows,
            neighbours,
        }
    }

    /// Tables for the standard 50-square board.
    pub fn standard() -> Arc<DirectionTables> {
        Arc::clone(
            STANDARD_TABLES
                .get_or_init(|| Arc::new(DirectionTables::build(BOARD_WIDTH, BOARD_ROWS))),
        )
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.width * self.rows
    }

    #[inline]
    pub fn row_of(&self, square: Square) -> usize {
        usize::from(square) / self.width
    }

    #[inline]
    pub fn neighbour(&self, square: Square, direction: Direction) -> Option<Square> {
        self.neighbours[direction.index()]
            .get(usize::from(square))
            .copied()
            .flatten()
    }

    /// Squares from `square` (exclusive) to the board edge along `direction`.
    #[inline]
    pub fn ray(&self, square: Square, direction: Direction) -> Ray<'_> {
        Ray {
            tables: self,
            direction,
            current: self.neighbour(square, direction),
        }
    }
}

/// Iterator over one diagonal ray.
pub struct Ray<'a> {
    tables: &'a DirectionTables,
    direction: Direction,
    current: Option<Square>,
}

impl Iterator for Ray<'_> {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        let square = self.current?;
        self.current = self.tables.neighbour(square, self.direction);
        Some(square)
    }
}

fn neighbour_index(square: usize, direction: Direction, width: usize, rows: usize) -> Option<usize> {
    let row = square / width;
    let col = square % width;
    let row_is_even = row % 2 == 0;
    let first_row = row == 0;
    let last_row = row + 1 == rows;
    // Even rows lose their right-hand diagonals on the last column, odd rows
    // their left-hand ones on the first column.
    let right_edge = row_is_even && col + 1 == width;
    let left_edge = !row_is_even && col == 0;

    match direction {
        Direction::NorthEast if first_row || right_edge => None,
        Direction::NorthEast => Some(square - width + usize::from(row_is_even)),
        Direction::NorthWest if first_row || left_edge => None,
        Direction::NorthWest => Some(square - width - usize::from(!row_is_even)),
        Direction::SouthEast if last_row || right_edge => None,
        Direction::SouthEast => Some(square + width + usize::from(row_is_even)),
        Direction::SouthWest if last_row || left_edge => None,
        Direction::SouthWest => Some(square + width - usize::from(!row_is_even)),
    }
}

#[cfg(test)]
mod tests {
    use super::DirectionTables;
    use crate::board_state::board_types::Direction;

    #[test]
    fn odd_row_square_has_all_four_neighbours() {
        let tables = DirectionTables::build(5, 10);
        assert_eq!(tables.neighbour(7, Direction::NorthEast), Some(2));
        assert_eq!(tables.neighbour(7, Direction::NorthWest), Some(1));
        assert_eq!(tables.neighbour(7, Direction::SouthEast), Some(12));
        assert_eq!(tables.neighbour(7, Direction::SouthWest), Some(11));
    }

    #[test]
    fn even_row_square_offsets_shift_right() {
        let tables = DirectionTables::build(5, 10);
        assert_eq!(tables.neighbour(12, Direction::NorthEast), Some(8));
        assert_eq!(tables.neighbour(12, Direction::NorthWest), Some(7));
        assert_eq!(tables.neighbour(12, Direction::SouthEast), Some(18));
        assert_eq!(tables.neighbour(12, Direction::SouthWest), Some(17));
    }

    #[test]
    fn edges_have_no_neighbours() {
        let tables = DirectionTables::build(5, 10);
        // Top row.
        assert_eq!(tables.neighbour(2, Direction::NorthEast), None);
        assert_eq!(tables.neighbour(2, Direction::NorthWest), None);
        // Bottom row.
        assert_eq!(tables.neighbour(47, Direction::SouthEast), None);
        assert_eq!(tables.neighbour(47, Direction::SouthWest), None);
        // Right edge of an even row.
        assert_eq!(tables.neighbour(14, Direction::NorthEast), None);
        assert_eq!(tables.neighbour(14, Direction::SouthEast), None);
        assert_eq!(tables.neighbour(14, Direction::SouthWest), Some(19));
        // Left edge of an odd row.
        assert_eq!(tables.neighbour(15, Direction::NorthWest), None);
        assert_eq!(tables.neighbour(15, Direction::SouthWest), None);
        assert_eq!(tables.neighbour(15, Direction::NorthEast), Some(10));
    }

    #[test]
    fn neighbours_are_symmetric() {
        let tables = DirectionTables::build(5, 10);
        for square in 0..tables.size() as u8 {
            for direction in Direction::ALL {
                if let Some(next) = tables.neighbour(square, direction) {
                    assert_eq!(tables.neighbour(next, direction.opposite()), Some(square));
                }
            }
        }
    }

    #[test]
    fn long_diagonal_ray_runs_corner_to_corner() {
        let tables = DirectionTables::build(5, 10);
        let ray: Vec<u8> = tables.ray(4, Direction::SouthWest).collect();
        assert_eq!(ray, vec![9, 13, 18, 22, 27, 31, 36, 40, 45]);
        assert_eq!(tables.ray(45, Direction::SouthWest).count(), 0);
    }

    #[test]
    fn standard_tables_are_shared() {
        let a = DirectionTables::standard();
        let b = DirectionTables::standard();
        assert!(std::sync::Arc::ptr_eq(&a, &b));
        assert_eq!(a.size(), 50);
    }
}
