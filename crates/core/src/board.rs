//! Board module - manages the game grid
//!
//! The board is a 12x20 grid where each cell can be empty or filled with a piece kind.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..11 (left to right), y ranges 0..19 (top to bottom)

use arrayvec::ArrayVec;

use crate::pieces::Shape;
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Upper bound on rows cleared in one pass (every row of the board).
pub const MAX_CLEARED_ROWS: usize = BOARD_HEIGHT as usize;

/// The game board - 12 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check whether `shape` anchored at `(x, y)` hits a wall, the floor, or a locked cell.
    ///
    /// Only non-empty shape cells are tested. Rows above the top of the board
    /// are not a collision.
    pub fn collides(&self, shape: &Shape, x: i8, y: i8) -> bool {
        shape.filled().any(|(sx, sy, _)| {
            let bx = x + sx;
            let by = y + sy;
            if bx < 0 || bx >= BOARD_WIDTH as i8 || by >= BOARD_HEIGHT as i8 {
                return true;
            }
            by >= 0 && self.is_occupied(bx, by)
        })
    }

    /// Borrow one row of cells
    pub fn row(&self, y: usize) -> &[Cell] {
        let width = BOARD_WIDTH as usize;
        let start = y * width;
        &self.cells[start..start + width]
    }

    /// Iterate rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(BOARD_WIDTH as usize)
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        self.row(y).iter().all(|cell| cell.is_some())
    }

    /// Clear all full rows and return the row indices that were cleared (sorted bottom to top)
    ///
    /// Remaining rows keep their relative order and settle at the bottom; the
    /// top `n` rows become empty. Uses a two-pointer pass with zero allocation.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, MAX_CLEARED_ROWS> {
        let mut cleared_rows = ArrayVec::new();
        let width = BOARD_WIDTH as usize;
        let mut write_y = BOARD_HEIGHT as usize;

        // Scan from bottom to top
        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        // Clear the remaining rows at the top
        self.cells[..write_y * width].fill(None);

        cleared_rows
    }

    /// Write a piece cell, ignoring coordinates outside the board
    pub fn place(&mut self, x: i8, y: i8, kind: PieceKind) {
        self.set(x, y, Some(kind));
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy the board into a row-major 2D grid (for snapshots)
    pub fn write_grid(&self, out: &mut [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        for (dst, src) in out.iter_mut().zip(self.rows()) {
            dst.copy_from_slice(src);
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Fill a whole row with `kind`, leaving the listed columns empty
    pub fn fill_row_except(&mut self, y: i8, kind: PieceKind, holes: &[i8]) {
        for x in 0..BOARD_WIDTH as i8 {
            let cell = if holes.contains(&x) { None } else { Some(kind) };
            self.set(x, y, cell);
        }
    }

    /// Create from a 2D vector for testing (converts to flat array)
    #[cfg(test)]
    pub fn from_cells(cells_2d: Vec<Vec<Cell>>) -> Self {
        assert_eq!(cells_2d.len(), BOARD_HEIGHT as usize);
        assert!(cells_2d.iter().all(|row| row.len() == BOARD_WIDTH as usize));

        let mut flat = [None; BOARD_SIZE];
        for (y, row) in cells_2d.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                flat[y * BOARD_WIDTH as usize + x] = *cell;
            }
        }
        Self { cells: flat }
    }

    /// Convert to 2D vector for testing/display
    #[cfg(test)]
    pub fn to_cells(&self) -> Vec<Vec<Cell>> {
        self.rows().map(|row| row.to_vec()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(11, 0), Some(11));
        assert_eq!(Board::index(0, 1), Some(12));
        assert_eq!(Board::index(11, 19), Some(239));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(12, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_board_flat_array() {
        let mut board = Board::new();

        board.set(0, 0, Some(PieceKind::I));
        board.set(5, 10, Some(PieceKind::T));

        assert_eq!(board.get(0, 0), Some(Some(PieceKind::I)));
        assert_eq!(board.get(5, 10), Some(Some(PieceKind::T)));

        assert_eq!(board.cells[0], Some(PieceKind::I));
        assert_eq!(board.cells[10 * 12 + 5], Some(PieceKind::T));
    }

    #[test]
    fn test_board_from_cells_roundtrip() {
        let mut cells_2d = vec![vec![None; 12]; 20];
        cells_2d[5][3] = Some(PieceKind::O);
        cells_2d[10][7] = Some(PieceKind::L);

        let board = Board::from_cells(cells_2d.clone());

        assert_eq!(cells_2d, board.to_cells());
    }

    #[test]
    fn test_clear_preserves_relative_order_of_remaining_rows() {
        let mut board = Board::new();
        board.set(0, 15, Some(PieceKind::S));
        board.fill_row_except(16, PieceKind::I, &[]);
        board.set(1, 17, Some(PieceKind::Z));
        board.fill_row_except(18, PieceKind::J, &[]);
        board.set(2, 19, Some(PieceKind::T));

        let cleared = board.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[18, 16]);

        // Surviving rows shift down, keeping their order.
        assert_eq!(board.get(2, 19), Some(Some(PieceKind::T)));
        assert_eq!(board.get(1, 18), Some(Some(PieceKind::Z)));
        assert_eq!(board.get(0, 17), Some(Some(PieceKind::S)));
        assert!(board.row(0).iter().all(|c| c.is_none()));
        assert!(board.row(1).iter().all(|c| c.is_none()));
    }

    #[test]
    fn test_clear_more_than_four_rows() {
        let mut board = Board::new();
        for y in 14..20 {
            board.fill_row_except(y, PieceKind::O, &[]);
        }

        let cleared = board.clear_full_rows();
        assert_eq!(cleared.len(), 6);
        assert!(board.cells().iter().all(|c| c.is_none()));
    }

    #[test]
    fn test_write_grid_matches_cells() {
        let mut board = Board::new();
        board.set(3, 4, Some(PieceKind::L));

        let mut grid = [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        board.write_grid(&mut grid);
        assert_eq!(grid[4][3], Some(PieceKind::L));
        assert_eq!(grid.iter().flatten().filter(|c| c.is_some()).count(), 1);
    }
}
