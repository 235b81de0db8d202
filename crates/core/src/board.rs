//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is empty or holds the kind of the
//! piece that filled it. Storage is a flat row-major array, so a `Board` is a
//! plain `Copy` value.
//!
//! Locking and line clearing never mutate the board in place: [`Board::merge`]
//! and [`Board::clear_lines`] return a new board and leave `self` untouched.
//!
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)

use crate::piece::Piece;
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// Total number of cells on the board
const BOARD_SIZE: usize = WIDTH * HEIGHT;

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
        Some((y as usize) * WIDTH + (x as usize))
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

    /// Bounds-checked occupancy read: true only for an in-bounds filled cell.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .map(|row| row.iter().all(|cell| cell.is_some()))
            .unwrap_or(false)
    }

    /// One row as a slice, top row is 0.
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= HEIGHT {
            return None;
        }
        let start = y * WIDTH;
        Some(&self.cells[start..start + WIDTH])
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(WIDTH)
    }

    /// Return a new board with `piece` written into it.
    ///
    /// Piece cells that fall outside the grid (for example above row 0) are
    /// dropped rather than treated as an error.
    pub fn merge(&self, piece: &Piece) -> Board {
        let mut next = *self;
        for (x, y) in piece.cells() {
            next.set(x, y, Some(piece.color()));
        }
        next
    }

    /// Return a new board with every full row removed, plus the number removed.
    ///
    /// Surviving rows keep their relative order and settle to the bottom; the
    /// same number of empty rows is inserted at the top.
    pub fn clear_lines(&self) -> (Board, usize) {
        let mut next = Board::new();
        let mut write_y = HEIGHT;
        let mut cleared = 0;

        // Scan from bottom to top, copying survivors downward.
        for read_y in (0..HEIGHT).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
                continue;
            }
            write_y -= 1;
            let src = read_y * WIDTH;
            let dst = write_y * WIDTH;
            next.cells[dst..dst + WIDTH].copy_from_slice(&self.cells[src..src + WIDTH]);
        }

        (next, cleared)
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Fill row `y` with `kind`, leaving the columns in `holes` empty.
    ///
    /// Convenience for building fixtures; out-of-range rows are ignored.
    pub fn fill_row(&mut self, y: i8, kind: PieceKind, holes: &[i8]) {
        for x in 0..BOARD_WIDTH as i8 {
            let cell = if holes.contains(&x) { None } else { Some(kind) };
            self.set(x, y, cell);
        }
    }

    /// Create from a 2D vector (must be exactly HEIGHT rows of WIDTH cells)
    pub fn from_cells(cells_2d: Vec<Vec<Cell>>) -> Self {
        assert_eq!(cells_2d.len(), HEIGHT);
        assert!(cells_2d.iter().all(|row| row.len() == WIDTH));

        let mut flat = [None; BOARD_SIZE];
        for (y, row) in cells_2d.iter().enumerate() {
            flat[y * WIDTH..(y + 1) * WIDTH].copy_from_slice(row);
        }
        Self { cells: flat }
    }

    /// Convert to 2D vector for testing/display
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
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_merge_leaves_original_untouched() {
        let board = Board::new();
        let merged = board.merge(&Piece::at(PieceKind::O, 0, 0));

        assert_eq!(board, Board::new());
        assert_eq!(merged.get(0, 0), Some(Some(PieceKind::O)));
        assert_eq!(merged.get(1, 1), Some(Some(PieceKind::O)));
    }

    #[test]
    fn test_merge_drops_cells_above_top() {
        // Vertical I with its top two cells above row 0.
        let piece = Piece {
            shape: Piece::spawn(PieceKind::I).shape.rotate(),
            ..Piece::at(PieceKind::I, 5, -2)
        };
        let merged = Board::new().merge(&piece);

        let filled = merged.cells().iter().filter(|c| c.is_some()).count();
        assert_eq!(filled, 2);
        assert!(merged.is_occupied(5, 0));
        assert!(merged.is_occupied(5, 1));
    }

    #[test]
    fn test_clear_lines_keeps_order() {
        let mut board = Board::new();
        board.set(0, 17, Some(PieceKind::T));
        board.fill_row(18, PieceKind::I, &[]);
        board.set(1, 19, Some(PieceKind::Z));

        let (cleared, count) = board.clear_lines();

        assert_eq!(count, 1);
        assert_eq!(cleared.get(0, 18), Some(Some(PieceKind::T)));
        assert_eq!(cleared.get(1, 19), Some(Some(PieceKind::Z)));
        assert!(cleared.row(0).unwrap().iter().all(|c| c.is_none()));
        // Original untouched.
        assert!(board.is_row_full(18));
    }

    #[test]
    fn test_is_row_full_out_of_range() {
        let board = Board::new();
        assert!(!board.is_row_full(20));
    }

    #[test]
    fn test_board_from_cells_roundtrip() {
        let mut cells_2d = vec![vec![None; 10]; 20];
        cells_2d[5][3] = Some(PieceKind::O);
        cells_2d[10][7] = Some(PieceKind::L);

        let board = Board::from_cells(cells_2d.clone());
        assert_eq!(cells_2d, board.to_cells());
    }
}
