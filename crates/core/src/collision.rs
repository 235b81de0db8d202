//! Collision checking.
//!
//! [`is_valid_move`] is the single legality predicate behind movement,
//! rotation, hard drop, ghost projection and the game-over check.

use crate::board::Board;
use crate::geometry::Shape;
use crate::piece::Piece;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Would `piece`, moved by `(dx, dy)` and optionally given `shape`, be legal?
///
/// Every occupied cell must satisfy `0 <= x < W` and `y < H`. Cells above the
/// top edge (`y < 0`) skip the occupancy test; all others must land on an
/// empty board cell.
pub fn is_valid_move(board: &Board, piece: &Piece, dx: i8, dy: i8, shape: Option<&Shape>) -> bool {
    let shape = shape.unwrap_or(&piece.shape);
    let base_x = piece.x as i16 + dx as i16;
    let base_y = piece.y as i16 + dy as i16;

    shape.minos().iter().all(|&(mx, my)| {
        let x = base_x + mx as i16;
        let y = base_y + my as i16;

        if x < 0 || x >= BOARD_WIDTH as i16 || y >= BOARD_HEIGHT as i16 {
            return false;
        }
        if y < 0 {
            return true;
        }
        !board.is_occupied(x as i8, y as i8)
    })
}

/// Largest `g >= 0` such that the piece can be moved down by `g` rows.
///
/// Probes one row at a time, so a piece never tunnels through a gap. The
/// floor ends the probe, so pieces starting above the top edge are covered.
pub fn drop_distance(board: &Board, piece: &Piece) -> u8 {
    let mut g: u8 = 0;
    while let Ok(dy) = i8::try_from(g as i16 + 1) {
        if !is_valid_move(board, piece, 0, dy, None) {
            break;
        }
        g += 1;
    }
    g
}
