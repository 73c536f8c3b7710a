//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is empty or holds the visual tag
//! of a locked block. Uses a flat array for cache locality and zero allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).
//! Rows with y < 0 lie above the board and are always vacant.

use crate::pieces::{Piece, Shape};
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
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

    /// Test a shape placed with its top-left cell at (x, y) against the board.
    ///
    /// A filled block collides when its column is outside `0..WIDTH`, when its
    /// row is at or below `HEIGHT`, or when it lands on an occupied cell. Blocks
    /// above the board (row < 0) only get the column check. Coordinates are
    /// summed in `i16`, so any origin in the `i8` range is judged correctly.
    pub fn collides(&self, shape: &Shape, x: i8, y: i8) -> bool {
        shape.blocks().any(|(dx, dy)| {
            let px = i16::from(x) + i16::from(dx);
            let py = i16::from(y) + i16::from(dy);
            if px < 0 || px >= i16::from(BOARD_WIDTH) || py >= i16::from(BOARD_HEIGHT) {
                return true;
            }
            // Both coordinates are on the board here, so they fit in i8.
            py >= 0 && self.is_occupied(px as i8, py as i8)
        })
    }

    /// Whether `piece` collides when shifted by (dx, dy) from where it is.
    pub fn piece_collides(&self, piece: &Piece, dx: i8, dy: i8) -> bool {
        match (piece.x.checked_add(dx), piece.y.checked_add(dy)) {
            (Some(x), Some(y)) => self.collides(&piece.shape, x, y),
            _ => true,
        }
    }

    /// Write the piece's visual tag into every cell it covers on the board.
    ///
    /// Blocks above the board are dropped.
    pub fn merge_piece(&mut self, piece: &Piece) {
        for (x, y) in piece.cells() {
            if y >= 0 {
                self.set(x, y, Some(piece.tag));
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

    /// Remove row `y`, shift every row above it down by one and empty the top row.
    pub fn clear_row(&mut self, y: usize) {
        if y >= BOARD_HEIGHT as usize {
            return;
        }

        let width = BOARD_WIDTH as usize;
        // copy_within handles the overlapping source/destination
        self.cells.copy_within(0..y * width, width);
        self.cells[..width].fill(None);
    }

    /// Sweep rows from the bottom up, removing every full row.
    ///
    /// After a removal the same index is examined again, since the row above
    /// has moved into it. Returns the number of rows removed.
    pub fn clear_full_rows(&mut self) -> u32 {
        let mut cleared = 0;
        let mut y = BOARD_HEIGHT as usize;

        while y > 0 {
            if self.is_row_full(y - 1) {
                self.clear_row(y - 1);
                cleared += 1;
            } else {
                y -= 1;
            }
        }

        cleared
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(BOARD_WIDTH as usize)
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Count of occupied cells.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Build a board from a 2D grid (`rows[y][x]`).
    ///
    /// Returns `None` when the grid is not exactly 20 rows of 10 cells.
    pub fn from_cells(rows: &[Vec<Cell>]) -> Option<Self> {
        if rows.len() != BOARD_HEIGHT as usize
            || rows.iter().any(|row| row.len() != BOARD_WIDTH as usize)
        {
            return None;
        }

        let mut board = Self::new();
        for (y, row) in rows.iter().enumerate() {
            let start = y * BOARD_WIDTH as usize;
            board.cells[start..start + BOARD_WIDTH as usize].copy_from_slice(row);
        }
        Some(board)
    }

    /// Convert to a 2D grid (`rows[y][x]`).
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
    use crate::pieces::get_shape;
    use crate::types::PieceKind;

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
    fn test_clear_row_shifts_rows_above() {
        let mut board = Board::new();
        let tag = Some(PieceKind::S.visual_tag());
        board.set(2, 3, tag);
        board.set(7, 5, tag);

        board.clear_row(5);

        assert!(board.is_occupied(2, 4));
        assert!(!board.is_occupied(2, 3));
        assert!(!board.is_occupied(7, 5));
    }

    #[test]
    fn test_merge_skips_rows_above_board() {
        let mut board = Board::new();
        let mut piece = Piece::new(PieceKind::O);
        piece.x = 4;
        piece.y = -1;

        board.merge_piece(&piece);

        assert_eq!(board.filled_count(), 2);
        assert!(board.is_occupied(4, 0));
        assert!(board.is_occupied(5, 0));
    }

    #[test]
    fn test_collides_above_board_is_vacant() {
        let board = Board::new();
        let o = get_shape(PieceKind::O);
        assert!(!board.collides(&o, 0, -2));
        assert!(board.collides(&o, -1, -2));
        assert!(board.collides(&o, 9, -2));
    }
}
