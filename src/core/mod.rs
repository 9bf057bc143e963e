//! Core module - pure game rules with no terminal dependencies
//!
//! Everything here is deterministic given a seeded generator: the
//! board, the shape catalog, placement checks, scoring and the session
//! state machine. Rendering and input live elsewhere.

pub mod board;
pub mod piece;
pub mod pieces;
pub mod place;
pub mod scoring;
pub mod session;

// Re-export commonly used types
pub use board::{Board, MAX_CLEARED_ROWS};
pub use piece::{FallingPiece, PieceGenerator};
pub use pieces::{get_shape, PieceShape, SPAWN_POSITION};
pub use place::{can_place, drop_distance};
pub use scoring::GameScore;
pub use session::{GameSession, InputOutcome, LockReport};
