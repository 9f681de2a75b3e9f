//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell can be empty or filled with a
//! piece kind. Uses a flat array for better cache locality and
//! zero-allocation. Coordinates: (x, y) where x ranges 0..9 (left to right),
//! y ranges 0..19 (top to bottom). Cells above the visible board (y < 0) are
//! legal piece positions but are never stored.

use arrayvec::ArrayVec;

use crate::core::mines::MineField;
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH * BOARD_HEIGHT) as usize;

/// The game board - 10 columns x 20 rows using flat array storage
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

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

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

    /// Check whether any cell of a piece footprint is an illegal position.
    ///
    /// A cell collides when it is outside the horizontal bounds, below the
    /// floor, or (for y >= 0) overlaps a locked block or a mine. Cells above
    /// the skyline (y < 0) are exempt from the occupancy checks, which lets
    /// pieces shift and rotate while partially above the visible board.
    pub fn collides(&self, cells: &[(i8, i8)], mines: Option<&MineField>) -> bool {
        cells.iter().any(|&(x, y)| {
            if x < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
                return true;
            }
            if y < 0 {
                return false;
            }
            if self.is_occupied(x, y) {
                return true;
            }
            mines.is_some_and(|m| m.contains(x, y))
        })
    }

    /// Write a piece footprint into the board as permanent terrain.
    ///
    /// Cells above the skyline are skipped; everything else must be a legal
    /// empty cell (callers validate with `collides` first).
    pub fn lock(&mut self, cells: &[(i8, i8)], kind: PieceKind) {
        for &(x, y) in cells {
            if y >= 0 {
                debug_assert!(!self.is_occupied(x, y));
                self.set(x, y, Some(kind));
            }
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Clear all full rows, compacting the remainder downward and refilling
    /// the top with empty rows.
    ///
    /// Returns the pre-compaction row indices that were removed, sorted top
    /// to bottom (at most four per lock in play, but any hand-built board
    /// clears in one pass). Uses a two-pointer pass with no allocation.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, { BOARD_HEIGHT as usize }> {
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

        // Blank the rows that opened up at the top
        for cell in &mut self.cells[..write_y * width] {
            *cell = None;
        }

        // Bottom-to-top scan order, so reverse for ascending indices
        cleared_rows.reverse();
        cleared_rows
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
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

    fn fill_row(board: &mut Board, y: i8) {
        for x in 0..BOARD_WIDTH as i8 {
            board.set(x, y, Some(PieceKind::I));
        }
    }

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_set_and_get() {
        let mut board = Board::new();
        assert!(board.set(5, 10, Some(PieceKind::T)));
        assert_eq!(board.get(5, 10), Some(Some(PieceKind::T)));
        assert!(board.is_occupied(5, 10));
        assert!(!board.set(10, 0, Some(PieceKind::T)));
        assert_eq!(board.get(0, -1), None);
    }

    #[test]
    fn test_collides_bounds() {
        let board = Board::new();
        assert!(board.collides(&[(-1, 5)], None));
        assert!(board.collides(&[(BOARD_WIDTH as i8, 5)], None));
        assert!(board.collides(&[(0, BOARD_HEIGHT as i8)], None));
        assert!(!board.collides(&[(0, 0), (9, 19)], None));
    }

    #[test]
    fn test_collides_occupancy() {
        let mut board = Board::new();
        board.set(4, 10, Some(PieceKind::S));
        assert!(board.collides(&[(4, 10)], None));
        assert!(!board.collides(&[(4, 9)], None));
    }

    #[test]
    fn test_collides_above_skyline_exempt() {
        let mut board = Board::new();
        board.set(4, 0, Some(PieceKind::S));
        // Above the board: no occupancy check, but horizontal bounds apply.
        assert!(!board.collides(&[(4, -1)], None));
        assert!(board.collides(&[(-1, -1)], None));
    }

    #[test]
    fn test_collides_with_mines() {
        let board = Board::new();
        let mut mines = MineField::new();
        mines.insert(3, 12);
        assert!(board.collides(&[(3, 12)], Some(&mines)));
        assert!(!board.collides(&[(3, 12)], None));
        assert!(!board.collides(&[(3, 11)], Some(&mines)));
    }

    #[test]
    fn test_lock_skips_skyline_cells() {
        let mut board = Board::new();
        board.lock(&[(3, -1), (3, 0)], PieceKind::J);
        assert!(board.is_occupied(3, 0));
        assert!(!board.is_occupied(3, 1));
    }

    #[test]
    fn test_clear_full_rows_none() {
        let mut board = Board::new();
        board.set(0, 19, Some(PieceKind::L));
        assert!(board.clear_full_rows().is_empty());
        assert!(board.is_occupied(0, 19));
    }

    #[test]
    fn test_clear_full_rows_single() {
        let mut board = Board::new();
        fill_row(&mut board, 19);
        board.set(2, 18, Some(PieceKind::T));

        let cleared = board.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[19]);

        // Row above compacted down, nothing full remains.
        assert!(board.is_occupied(2, 19));
        assert!(!board.is_occupied(2, 18));
        for y in 0..BOARD_HEIGHT as usize {
            assert!(!board.is_row_full(y));
        }
    }

    #[test]
    fn test_clear_full_rows_non_adjacent() {
        let mut board = Board::new();
        fill_row(&mut board, 15);
        fill_row(&mut board, 19);
        board.set(0, 17, Some(PieceKind::Z));

        let cleared = board.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[15, 19]);

        // The survivor at row 17 had one cleared row below it and one above:
        // compaction places it at row 18.
        assert!(board.is_occupied(0, 18));
        assert!(!board.is_occupied(0, 17));
    }

    #[test]
    fn test_clear_full_rows_tetris() {
        let mut board = Board::new();
        for y in 16..20 {
            fill_row(&mut board, y);
        }
        let cleared = board.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[16, 17, 18, 19]);
        assert!(board.cells().iter().all(|c| c.is_none()));
    }

    #[test]
    fn test_clear_preserves_survivor_order() {
        let mut board = Board::new();
        board.set(0, 16, Some(PieceKind::J));
        board.set(0, 18, Some(PieceKind::L));
        fill_row(&mut board, 17);
        fill_row(&mut board, 19);

        board.clear_full_rows();

        // J was above L before the clear and stays above after.
        assert_eq!(board.get(0, 18), Some(Some(PieceKind::J)));
        assert_eq!(board.get(0, 19), Some(Some(PieceKind::L)));
    }
}
