//! Pieces module - the static tetromino shape catalog
//!
//! Each (kind, rotation) entry lists exactly four cell offsets relative
//! to the piece origin, x growing right and y growing down to match the
//! board's interior coordinates. Rotation is strict: a piece rotates in
//! place by swapping catalog entries, with no kick attempts. The square
//! and the line repeat entries so lookups stay uniform across all four
//! rotation states.

use crate::types::{PieceKind, Rotation};

/// Offset of a single cell relative to the piece origin
pub type CellOffset = (i8, i8);

/// Shape of a piece - 4 cell offsets from the piece origin
pub type PieceShape = [CellOffset; 4];

/// Interior position where every new piece appears
pub const SPAWN_POSITION: (i8, i8) = (4, 0);

/// Get the cell offsets for a piece kind and rotation
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    match kind {
        PieceKind::O => get_o_shape(rotation),
        PieceKind::I => get_i_shape(rotation),
        PieceKind::T => get_t_shape(rotation),
        PieceKind::Z => get_z_shape(rotation),
        PieceKind::S => get_s_shape(rotation),
        PieceKind::L => get_l_shape(rotation),
        PieceKind::J => get_j_shape(rotation),
    }
}

/// O piece (same for all rotations)
fn get_o_shape(_rotation: Rotation) -> PieceShape {
    [(1, 1), (2, 1), (1, 2), (2, 2)]
}

/// I piece (two distinct states)
fn get_i_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North | Rotation::South => [(0, 1), (1, 1), (2, 1), (3, 1)],
        Rotation::East | Rotation::West => [(2, 0), (2, 1), (2, 2), (2, 3)],
    }
}

/// T piece
fn get_t_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(2, 0), (1, 1), (2, 1), (3, 1)],
        Rotation::East => [(2, 0), (2, 1), (2, 2), (3, 1)],
        Rotation::South => [(2, 2), (1, 1), (2, 1), (3, 1)],
        Rotation::West => [(2, 0), (2, 1), (2, 2), (1, 1)],
    }
}

/// Z piece (two distinct states)
fn get_z_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North | Rotation::South => [(2, 0), (1, 1), (2, 1), (1, 2)],
        Rotation::East | Rotation::West => [(1, 1), (2, 1), (2, 2), (3, 2)],
    }
}

/// S piece (two distinct states)
fn get_s_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North | Rotation::South => [(1, 0), (1, 1), (2, 1), (2, 2)],
        Rotation::East | Rotation::West => [(1, 1), (2, 1), (0, 2), (1, 2)],
    }
}

/// L piece
fn get_l_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(1, 0), (1, 1), (1, 2), (2, 2)],
        Rotation::East => [(1, 1), (2, 1), (3, 1), (1, 2)],
        Rotation::South => [(1, 0), (2, 0), (2, 1), (2, 2)],
        Rotation::West => [(2, 0), (0, 1), (1, 1), (2, 1)],
    }
}

/// J piece
fn get_j_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(2, 0), (2, 1), (2, 2), (1, 2)],
        Rotation::East => [(1, 0), (1, 1), (2, 1), (3, 1)],
        Rotation::South => [(1, 0), (2, 0), (1, 1), (1, 2)],
        Rotation::West => [(0, 1), (1, 1), (2, 1), (2, 2)],
    }
}
