//! Placement validation - pure collision queries against the board
//!
//! Wall, floor and stack collisions are all ordinary occupancy hits
//! thanks to the board's sentinel border. A candidate position can
//! still aim further than one step past the border (a vertical line
//! rotated flat while hugging the wall), so cells outside the bordered
//! grid are rejected before the board is consulted.

use crate::core::board::Board;
use crate::core::pieces::get_shape;
use crate::types::{PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

/// Check whether all four cells of the shape at `origin` land on
/// unoccupied interior cells
pub fn can_place(board: &Board, kind: PieceKind, rotation: Rotation, origin: (i8, i8)) -> bool {
    get_shape(kind, rotation).iter().all(|&(dx, dy)| {
        let x = origin.0 + dx;
        let y = origin.1 + dy;
        in_bordered_grid(x, y) && !board.is_occupied(x, y)
    })
}

fn in_bordered_grid(x: i8, y: i8) -> bool {
    (-1..=BOARD_WIDTH as i8).contains(&x) && (-1..=BOARD_HEIGHT as i8).contains(&y)
}

/// Rows the piece can still descend from `origin` before it rests.
/// Zero when the position directly below is already blocked.
pub fn drop_distance(board: &Board, kind: PieceKind, rotation: Rotation, origin: (i8, i8)) -> i8 {
    let mut distance: i8 = 0;
    while can_place(board, kind, rotation, (origin.0, origin.1 + distance + 1)) {
        distance += 1;
    }
    distance
}
