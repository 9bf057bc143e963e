//! Falling piece and the random piece queue

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::pieces::{get_shape, PieceShape, SPAWN_POSITION};
use crate::types::{PieceKind, Rotation};

/// The piece currently under player control
///
/// Holds only its catalog indices and origin; the shape is looked up on
/// every query, so the piece never carries a pointer into static data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallingPiece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl FallingPiece {
    /// Create a piece at the spawn position
    pub fn new(kind: PieceKind, rotation: Rotation) -> Self {
        let (x, y) = SPAWN_POSITION;
        Self {
            kind,
            rotation,
            x,
            y,
        }
    }

    /// Cell offsets for the current rotation
    pub fn shape(&self) -> PieceShape {
        get_shape(self.kind, self.rotation)
    }

    /// Absolute interior coordinates of the four cells
    pub fn cells(&self) -> [(i8, i8); 4] {
        let mut cells = self.shape();
        for (dx, dy) in cells.iter_mut() {
            *dx += self.x;
            *dy += self.y;
        }
        cells
    }
}

/// Uniform random (kind, rotation) source with a one-ahead preview
#[derive(Debug)]
pub struct PieceGenerator {
    rng: StdRng,
    next: (PieceKind, Rotation),
}

impl PieceGenerator {
    /// Generator seeded from system entropy
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Deterministic generator for reproducible sessions
    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(mut rng: StdRng) -> Self {
        let next = random_piece(&mut rng);
        Self { rng, next }
    }

    /// The piece the next call to [`PieceGenerator::take`] will return
    pub fn peek(&self) -> (PieceKind, Rotation) {
        self.next
    }

    /// Hand out the previewed piece and draw a fresh preview
    pub fn take(&mut self) -> (PieceKind, Rotation) {
        let current = self.next;
        self.next = random_piece(&mut self.rng);
        current
    }
}

impl Default for PieceGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn random_piece(rng: &mut StdRng) -> (PieceKind, Rotation) {
    let kind = PieceKind::ALL[rng.gen_range(0..PieceKind::ALL.len())];
    let rotation = Rotation::ALL[rng.gen_range(0..Rotation::ALL.len())];
    (kind, rotation)
}
