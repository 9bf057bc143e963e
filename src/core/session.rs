//! Game session - the state machine both gameplay actors drive
//!
//! A session owns the board, the piece slot, the random queue and the
//! score card. The slot cycles EMPTY -> ACTIVE -> EMPTY on every lock;
//! a blocked spawn flips the game-over latch instead. All mutation goes
//! through the methods here, and the coordinator serializes them behind
//! one lock, so the rules never see a half-applied transition.

use std::time::Duration;

use arrayvec::ArrayVec;

use crate::core::board::{Board, MAX_CLEARED_ROWS};
use crate::core::piece::{FallingPiece, PieceGenerator};
use crate::core::place::{can_place, drop_distance};
use crate::core::scoring::{initial_tick_ms, tick_delta_ms, GameScore};
use crate::types::{EndReason, GameOptions, InputEvent, PieceKind, Rotation, LEVEL_MAX};

/// Everything a caller needs to redraw after a lock
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockReport {
    /// Rows completed by this lock as interior indices, bottom-most
    /// first, counted before any shifting
    pub cleared_rows: ArrayVec<usize, MAX_CLEARED_ROWS>,
    /// The clear crossed the rows-per-level threshold
    pub leveled_up: bool,
    /// The follow-up spawn was blocked; the session is over
    pub game_over: bool,
}

/// How the session responded to one input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// Nothing changed; no redraw needed
    Ignored,
    /// The piece moved or rotated
    Moved,
    /// A hard drop committed; input is now suppressed until the next
    /// gravity step locks the piece
    Dropped,
    /// The player asked for the pause dialog; the caller owns it
    PauseRequested,
}

pub struct GameSession {
    board: Board,
    current: Option<FallingPiece>,
    generator: PieceGenerator,
    score: GameScore,
    options: GameOptions,
    tick_ms: u64,
    game_over: bool,
    /// Set by a hard drop, cleared when the piece locks. While set, all
    /// input is ignored so the drop cannot be amended mid-flight.
    just_locked: bool,
    end_reason: EndReason,
}

impl GameSession {
    pub fn new(options: GameOptions, generator: PieceGenerator, high_score: u32) -> Self {
        let options = options.clamped();
        Self {
            board: Board::new(),
            current: None,
            generator,
            score: GameScore::new(options.initial_level, high_score),
            tick_ms: initial_tick_ms(options.initial_level),
            options,
            game_over: false,
            just_locked: false,
            end_reason: EndReason::ToppedOut,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current(&self) -> Option<FallingPiece> {
        self.current
    }

    pub fn score(&self) -> GameScore {
        self.score
    }

    pub fn options(&self) -> GameOptions {
        self.options
    }

    /// Current gravity interval
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn just_locked(&self) -> bool {
        self.just_locked
    }

    pub fn end_reason(&self) -> EndReason {
        self.end_reason
    }

    /// The (kind, rotation) the next spawn will use
    pub fn next_preview(&self) -> (PieceKind, Rotation) {
        self.generator.peek()
    }

    /// Try to shift the current piece one step. Returns false if there
    /// is no piece or the target is blocked; the piece never moves on
    /// failure.
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let Some(piece) = self.current else {
            return false;
        };
        let target = (piece.x + dx, piece.y + dy);
        if !can_place(&self.board, piece.kind, piece.rotation, target) {
            return false;
        }
        self.current = Some(FallingPiece {
            x: target.0,
            y: target.1,
            ..piece
        });
        true
    }

    /// Try to rotate in place. A blocked rotation is rejected outright;
    /// there are no kick attempts.
    pub fn try_rotate(&mut self, clockwise: bool) -> bool {
        let Some(piece) = self.current else {
            return false;
        };
        let rotation = if clockwise {
            piece.rotation.rotate_cw()
        } else {
            piece.rotation.rotate_ccw()
        };
        if !can_place(&self.board, piece.kind, rotation, (piece.x, piece.y)) {
            return false;
        }
        self.current = Some(FallingPiece { rotation, ..piece });
        true
    }

    /// Send the piece straight to its resting position and raise the
    /// input-suppression flag. The actual lock happens on the next
    /// gravity step.
    pub fn hard_drop(&mut self) -> bool {
        let Some(piece) = self.current else {
            return false;
        };
        let distance = drop_distance(&self.board, piece.kind, piece.rotation, (piece.x, piece.y));
        self.current = Some(FallingPiece {
            y: piece.y + distance,
            ..piece
        });
        self.just_locked = true;
        true
    }

    /// Take the previewed piece and place it at the spawn position.
    /// A blocked spawn leaves the slot empty and flips the game-over
    /// latch. The preview advances either way.
    pub fn spawn_from_queue(&mut self) -> bool {
        let (kind, rotation) = self.generator.take();
        let piece = FallingPiece::new(kind, rotation);
        if !can_place(&self.board, kind, rotation, (piece.x, piece.y)) {
            self.game_over = true;
            return false;
        }
        self.current = Some(piece);
        true
    }

    /// One gravity step. Returns None when the piece descended a row
    /// (or no piece is active); returns the lock report when it could
    /// not, after locking it, clearing rows, scoring and spawning the
    /// next piece in the same transition.
    pub fn tick_down(&mut self) -> Option<LockReport> {
        if self.try_move(0, 1) {
            return None;
        }
        let piece = self.current.take()?;
        self.just_locked = false;
        self.board.lock_cells(&piece.cells(), piece.kind);

        let cleared = self.board.clear_full_rows();
        let mut leveled_up = false;
        if !cleared.is_empty() {
            let level_before = self.score.level;
            leveled_up = self.score.apply_clear(cleared.len() as u32);
            if leveled_up {
                if self.options.increase_difficulty && level_before < LEVEL_MAX {
                    self.tick_ms = self.tick_ms.saturating_sub(tick_delta_ms(level_before));
                }
                if self.options.clear_board_on_level_up {
                    self.board.reset();
                }
            }
        }

        let spawned = self.spawn_from_queue();
        Some(LockReport {
            cleared_rows: cleared,
            leveled_up,
            game_over: !spawned,
        })
    }

    /// Apply one input event under the coordinator's suppression rules:
    /// everything is ignored while the just-locked flag is raised, and
    /// an empty slot only lets pause/quit through.
    pub fn handle_input(&mut self, event: InputEvent) -> InputOutcome {
        if self.just_locked || (self.current.is_none() && event != InputEvent::PauseQuit) {
            return InputOutcome::Ignored;
        }
        match event {
            InputEvent::MoveLeft => move_outcome(self.try_move(-1, 0)),
            InputEvent::MoveRight => move_outcome(self.try_move(1, 0)),
            InputEvent::MoveDown => move_outcome(self.try_move(0, 1)),
            InputEvent::HardDrop => {
                self.hard_drop();
                InputOutcome::Dropped
            }
            InputEvent::RotateLeft => move_outcome(self.try_rotate(false)),
            InputEvent::RotateRight => move_outcome(self.try_rotate(true)),
            InputEvent::PauseQuit => InputOutcome::PauseRequested,
            InputEvent::Timeout | InputEvent::Invalid => InputOutcome::Ignored,
        }
    }

    /// End the session at the player's request
    pub fn quit(&mut self) {
        self.game_over = true;
        self.end_reason = EndReason::UserQuit;
    }

    /// Flip the game-over latch without recording a player quit. Used
    /// when an actor has to bail out and its peer must not keep waiting.
    pub(crate) fn force_game_over(&mut self) {
        self.game_over = true;
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

fn move_outcome(moved: bool) -> InputOutcome {
    if moved {
        InputOutcome::Moved
    } else {
        InputOutcome::Ignored
    }
}
