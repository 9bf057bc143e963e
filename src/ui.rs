//! Presentation contracts between the gameplay loops and the terminal
//!
//! Both actors render while they hold the session lock, so these traits
//! take `&mut self` and return `Result`: a broken terminal surfaces as
//! an error the runner can unwind from instead of a panic inside a
//! locked region.

use anyhow::Result;

use crate::core::{Board, FallingPiece, GameScore};
use crate::types::{EndReason, InputEvent, PieceKind, QuitChoice, Rotation};

/// Render sink driven by the gameplay loops
pub trait GameUi {
    /// Redraw the play field, overlaying the falling piece if present
    fn draw_board(&mut self, board: &Board, piece: Option<&FallingPiece>) -> Result<()>;

    /// Redraw the one-ahead preview box
    fn draw_next_piece(&mut self, kind: PieceKind, rotation: Rotation) -> Result<()>;

    /// Redraw the score panel
    fn draw_score(&mut self, score: &GameScore) -> Result<()>;

    /// Announce a level change
    fn draw_level_banner(&mut self, level: u32) -> Result<()>;

    /// Sweep freshly completed rows before the compacted board is drawn
    fn draw_row_clear(&mut self, rows: &[usize]) -> Result<()>;

    /// Modal pause dialog. Blocks until the player picks; gravity is
    /// frozen for the duration because the caller holds the session
    /// lock.
    fn confirm_quit(&mut self) -> Result<QuitChoice>;

    /// Final banner for a finished session
    fn draw_game_over(&mut self, reason: EndReason) -> Result<()>;

    /// Celebrate a new record
    fn draw_high_score(&mut self, value: u32) -> Result<()>;
}

/// Blocking source of discrete input events
pub trait InputSource {
    /// Next event. Yields [`InputEvent::Timeout`] when the bounded wait
    /// expires so the caller can re-check exit conditions.
    fn next_event(&mut self) -> Result<InputEvent>;
}
