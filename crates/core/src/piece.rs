//! Active piece: kind, current shape and board position.

use crate::geometry::{canonical_shape, Shape};
use crate::types::{PieceKind, BOARD_WIDTH};

/// A falling piece.
///
/// `(x, y)` is the board coordinate of the shape's top-left corner. `y` may be
/// negative while a piece is partially above the visible board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a piece at the top-center spawn position.
    ///
    /// `x = W/2 - shape_width/2`, `y = 0`. No collision check happens here.
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = canonical_shape(kind);
        let x = (BOARD_WIDTH / 2) as i8 - (shape.cols() / 2) as i8;
        Self { kind, shape, x, y: 0 }
    }

    /// Create a piece in spawn orientation at an explicit position.
    pub fn at(kind: PieceKind, x: i8, y: i8) -> Self {
        Self {
            kind,
            shape: canonical_shape(kind),
            x,
            y,
        }
    }

    /// Color token written into board cells when the piece locks.
    pub fn color(&self) -> PieceKind {
        self.kind
    }

    /// Copy of this piece moved by `(dx, dy)`.
    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Board coordinates of every occupied cell.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .minos()
            .into_iter()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_is_top_center() {
        assert_eq!(Piece::spawn(PieceKind::O).x, 4);
        assert_eq!(Piece::spawn(PieceKind::I).x, 3);
        assert_eq!(Piece::spawn(PieceKind::T).x, 4);
        for kind in PieceKind::ALL {
            assert_eq!(Piece::spawn(kind).y, 0);
        }
    }

    #[test]
    fn test_shifted_keeps_shape() {
        let piece = Piece::spawn(PieceKind::L);
        let moved = piece.shifted(-2, 3);
        assert_eq!(moved.x, piece.x - 2);
        assert_eq!(moved.y, 3);
        assert_eq!(moved.shape, piece.shape);
    }

    #[test]
    fn test_cells_are_absolute() {
        let piece = Piece::at(PieceKind::O, 2, 5);
        let cells: Vec<_> = piece.cells().collect();
        assert_eq!(cells, vec![(2, 5), (3, 5), (2, 6), (3, 6)]);
    }
}
