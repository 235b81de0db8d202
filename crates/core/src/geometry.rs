//! Geometry module - tetromino shape matrices and rotation
//!
//! A [`Shape`] is a small boolean occupancy matrix (at most 4x4). There is no
//! separate rotation state: the matrix itself is the orientation, so rotating
//! a non-square piece four times returns the original matrix and rotating the
//! O piece is a fixed point.

use arrayvec::ArrayVec;

use crate::types::PieceKind;

/// Largest row or column count a shape can have.
pub const MAX_SHAPE_DIM: usize = 4;

/// Offset of a single mino relative to the shape's top-left corner, as `(dx, dy)`.
pub type MinoOffset = (i8, i8);

/// Occupied cells of a shape.
pub type Minos = ArrayVec<MinoOffset, { MAX_SHAPE_DIM * MAX_SHAPE_DIM }>;

/// Boolean occupancy matrix of a piece in its current orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    cells: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl Shape {
    /// Build a shape from rows of 0/1 values.
    ///
    /// Panics if the matrix is empty, ragged or larger than 4x4.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        assert!(
            !rows.is_empty() && rows.len() <= MAX_SHAPE_DIM,
            "shape must have 1..=4 rows, got {}",
            rows.len()
        );
        let cols = rows[0].len();
        assert!(
            cols > 0 && cols <= MAX_SHAPE_DIM,
            "shape must have 1..=4 columns, got {}",
            cols
        );

        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (r, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), cols, "shape row {} is ragged", r);
            for (c, &v) in row.iter().enumerate() {
                cells[r][c] = v != 0;
            }
        }

        Self {
            rows: rows.len() as u8,
            cols: cols as u8,
            cells,
        }
    }

    /// Number of rows (height).
    pub fn rows(&self) -> u8 {
        self.rows
    }

    /// Number of columns (width).
    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Whether `(row, col)` is occupied; false outside the matrix.
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.rows as usize && col < self.cols as usize && self.cells[row][col]
    }

    /// Occupied cells as `(dx, dy)` offsets, row-major.
    pub fn minos(&self) -> Minos {
        let mut out = Minos::new();
        for r in 0..self.rows as usize {
            for c in 0..self.cols as usize {
                if self.cells[r][c] {
                    out.push((c as i8, r as i8));
                }
            }
        }
        out
    }

    /// 90° clockwise rotation.
    pub fn rotate(&self) -> Shape {
        rotate(self)
    }

    /// Matrix as rows of booleans (for display and tests).
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        (0..self.rows as usize)
            .map(|r| self.cells[r][..self.cols as usize].to_vec())
            .collect()
    }
}

/// Rotate a shape 90° clockwise.
///
/// An R×C input yields a C×R output where `out[i][j] = in[R-1-j][i]`.
/// Legality is not checked here; that is the collision checker's job.
pub fn rotate(shape: &Shape) -> Shape {
    let rows = shape.rows as usize;
    let cols = shape.cols as usize;
    let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];

    for (i, out_row) in cells.iter_mut().enumerate().take(cols) {
        for (j, out) in out_row.iter_mut().enumerate().take(rows) {
            *out = shape.cells[rows - 1 - j][i];
        }
    }

    Shape {
        rows: cols as u8,
        cols: rows as u8,
        cells,
    }
}

/// Spawn-orientation shape for a piece kind.
///
/// Returns a fresh copy; rotating it never touches the template.
pub fn canonical_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => Shape::from_rows(&[&[1, 1, 1, 1]]),
        PieceKind::O => Shape::from_rows(&[&[1, 1], &[1, 1]]),
        PieceKind::T => Shape::from_rows(&[&[0, 1, 0], &[1, 1, 1]]),
        PieceKind::S => Shape::from_rows(&[&[0, 1, 1], &[1, 1, 0]]),
        PieceKind::Z => Shape::from_rows(&[&[1, 1, 0], &[0, 1, 1]]),
        PieceKind::J => Shape::from_rows(&[&[1, 0, 0], &[1, 1, 1]]),
        PieceKind::L => Shape::from_rows(&[&[0, 0, 1], &[1, 1, 1]]),
    }
}
