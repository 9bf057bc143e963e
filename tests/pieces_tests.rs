//! Shape catalog tests - offsets, placement checks and the piece queue

use tetriz::core::{
    can_place, drop_distance, get_shape, Board, FallingPiece, PieceGenerator, PieceShape,
    SPAWN_POSITION,
};
use tetriz::types::{Cell, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

// ============== Shape Catalog ==============

#[test]
fn test_o_piece_ignores_rotation() {
    let north = get_shape(PieceKind::O, Rotation::North);
    assert_eq!(north, [(1, 1), (2, 1), (1, 2), (2, 2)]);
    for rotation in Rotation::ALL {
        assert_eq!(get_shape(PieceKind::O, rotation), north);
    }
}

#[test]
fn test_i_piece_shapes() {
    assert_eq!(
        get_shape(PieceKind::I, Rotation::North),
        [(0, 1), (1, 1), (2, 1), (3, 1)]
    );
    assert_eq!(
        get_shape(PieceKind::I, Rotation::East),
        [(2, 0), (2, 1), (2, 2), (2, 3)]
    );
}

#[test]
fn test_t_piece_shapes() {
    assert_eq!(
        get_shape(PieceKind::T, Rotation::North),
        [(2, 0), (1, 1), (2, 1), (3, 1)]
    );
    assert_eq!(
        get_shape(PieceKind::T, Rotation::East),
        [(2, 0), (2, 1), (2, 2), (3, 1)]
    );
    assert_eq!(
        get_shape(PieceKind::T, Rotation::South),
        [(2, 2), (1, 1), (2, 1), (3, 1)]
    );
    assert_eq!(
        get_shape(PieceKind::T, Rotation::West),
        [(2, 0), (2, 1), (2, 2), (1, 1)]
    );
}

#[test]
fn test_two_state_pieces_repeat_opposites() {
    for kind in [PieceKind::I, PieceKind::Z, PieceKind::S] {
        assert_eq!(
            get_shape(kind, Rotation::North),
            get_shape(kind, Rotation::South)
        );
        assert_eq!(
            get_shape(kind, Rotation::East),
            get_shape(kind, Rotation::West)
        );
    }
}

#[test]
fn test_every_entry_has_four_distinct_cells_in_box() {
    for kind in PieceKind::ALL {
        for rotation in Rotation::ALL {
            let shape = get_shape(kind, rotation);
            for (i, a) in shape.iter().enumerate() {
                assert!((0..=3).contains(&a.0) && (0..=3).contains(&a.1));
                for b in &shape[i + 1..] {
                    assert_ne!(a, b, "{kind:?} {rotation:?} repeats {a:?}");
                }
            }
        }
    }
}

#[test]
fn test_every_entry_is_edge_connected() {
    for kind in PieceKind::ALL {
        for rotation in Rotation::ALL {
            assert!(
                is_connected(&get_shape(kind, rotation)),
                "{kind:?} {rotation:?} is not one connected piece"
            );
        }
    }
}

fn is_connected(shape: &PieceShape) -> bool {
    let mut reached = [false; 4];
    let mut frontier = vec![0];
    reached[0] = true;
    while let Some(i) = frontier.pop() {
        for j in 0..4 {
            let touching =
                (shape[i].0 - shape[j].0).abs() + (shape[i].1 - shape[j].1).abs() == 1;
            if touching && !reached[j] {
                reached[j] = true;
                frontier.push(j);
            }
        }
    }
    reached.into_iter().all(|r| r)
}

// ============== Placement ==============

#[test]
fn test_spawn_position_fits_every_piece() {
    assert_eq!(SPAWN_POSITION, (4, 0));
    let board = Board::new();
    for kind in PieceKind::ALL {
        for rotation in Rotation::ALL {
            assert!(can_place(&board, kind, rotation, SPAWN_POSITION));
        }
    }
}

#[test]
fn test_each_blocked_cell_rejects_placement() {
    for kind in PieceKind::ALL {
        for rotation in Rotation::ALL {
            for (dx, dy) in get_shape(kind, rotation) {
                let mut board = Board::new();
                board.set(4 + dx, 8 + dy, Cell::Block(PieceKind::O));
                assert!(
                    !can_place(&board, kind, rotation, (4, 8)),
                    "{kind:?} {rotation:?} ignored the block at offset ({dx}, {dy})"
                );
            }
        }
    }
}

#[test]
fn test_walls_and_floor_reject_placement() {
    let board = Board::new();
    // The flat line spans the whole bounding box width.
    assert!(can_place(&board, PieceKind::I, Rotation::North, (0, 0)));
    assert!(can_place(&board, PieceKind::I, Rotation::North, (8, 0)));
    assert!(!can_place(&board, PieceKind::I, Rotation::North, (-1, 0)));
    assert!(!can_place(&board, PieceKind::I, Rotation::North, (9, 0)));

    // The upright line reaches dy 3; the floor sits at BOARD_HEIGHT.
    assert!(can_place(
        &board,
        PieceKind::I,
        Rotation::East,
        (4, BOARD_HEIGHT as i8 - 4)
    ));
    assert!(!can_place(
        &board,
        PieceKind::I,
        Rotation::East,
        (4, BOARD_HEIGHT as i8 - 3)
    ));
}

#[test]
fn test_drop_distance_is_maximal() {
    let mut board = Board::new();
    for x in 0..BOARD_WIDTH as i8 {
        if x != 6 {
            board.set(x, 17, Cell::Block(PieceKind::J));
        }
    }

    for kind in PieceKind::ALL {
        for rotation in Rotation::ALL {
            let distance = drop_distance(&board, kind, rotation, SPAWN_POSITION);
            let rest = (SPAWN_POSITION.0, SPAWN_POSITION.1 + distance);
            assert!(
                can_place(&board, kind, rotation, rest),
                "{kind:?} {rotation:?} dropped into a blocked position"
            );
            assert!(
                !can_place(&board, kind, rotation, (rest.0, rest.1 + 1)),
                "{kind:?} {rotation:?} stopped short of its resting row"
            );
        }
    }
}

#[test]
fn test_falling_piece_cells_translate_shape() {
    let piece = FallingPiece {
        kind: PieceKind::L,
        rotation: Rotation::East,
        x: 5,
        y: 7,
    };
    let shape = get_shape(PieceKind::L, Rotation::East);
    for (cell, offset) in piece.cells().iter().zip(shape.iter()) {
        assert_eq!(*cell, (offset.0 + 5, offset.1 + 7));
    }
}

// ============== Piece Queue ==============

#[test]
fn test_preview_matches_the_piece_handed_out() {
    let mut generator = PieceGenerator::from_seed(21);
    for _ in 0..16 {
        let previewed = generator.peek();
        assert_eq!(generator.take(), previewed);
        assert_eq!(generator.peek(), generator.peek());
    }
}

#[test]
fn test_same_seed_same_sequence() {
    let mut a = PieceGenerator::from_seed(777);
    let mut b = PieceGenerator::from_seed(777);
    for _ in 0..128 {
        assert_eq!(a.take(), b.take());
    }
}

#[test]
fn test_queue_covers_kinds_and_rotations() {
    let mut generator = PieceGenerator::from_seed(6);
    let mut kinds_seen = [false; PieceKind::ALL.len()];
    let mut rotations_seen = [false; Rotation::ALL.len()];
    for _ in 0..1024 {
        let (kind, rotation) = generator.take();
        kinds_seen[PieceKind::ALL.iter().position(|k| *k == kind).unwrap()] = true;
        rotations_seen[Rotation::ALL.iter().position(|r| *r == rotation).unwrap()] = true;
    }
    assert!(kinds_seen.into_iter().all(|s| s));
    assert!(rotations_seen.into_iter().all(|s| s));
}
