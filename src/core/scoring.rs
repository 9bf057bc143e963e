//! Scoring module - quadratic clear scoring, leveling and tick pacing
//!
//! Clearing n rows at once scores level * n^2 * 10, so a quadruple pays
//! sixteen times a single. Every 20 cleared rows advance the level, and
//! each level-up shortens the gravity interval by (LEVEL_MAX - level + 1) * 3
//! milliseconds, so early levels speed up faster than late ones. The
//! level counter itself is unbounded; only the speed-up stops at
//! LEVEL_MAX.

use crate::types::LEVEL_MAX;

/// Points per cleared row before the level and quadratic multipliers
pub const BASE_SCORE_PER_ROW: u32 = 10;

/// Cleared rows needed to advance one level
pub const ROWS_PER_LEVEL: u32 = 20;

/// Gravity interval before any speed-up (milliseconds)
pub const INITIAL_TICK_MS: u64 = 1000;

/// Score for clearing `rows` rows in one lock at `level`
pub fn clear_score(level: u32, rows: u32) -> u32 {
    level * rows * rows * BASE_SCORE_PER_ROW
}

/// Interval reduction applied when leaving `level` (milliseconds)
pub fn tick_delta_ms(level: u32) -> u64 {
    ((LEVEL_MAX.saturating_sub(level) + 1) * 3) as u64
}

/// Gravity interval for a session starting at `initial_level`.
/// The reduction is applied for every level up to and including the
/// starting one, so a level-1 start already runs slightly under
/// [`INITIAL_TICK_MS`].
pub fn initial_tick_ms(initial_level: u32) -> u64 {
    let mut interval = INITIAL_TICK_MS;
    for level in 1..=initial_level {
        interval = interval.saturating_sub(tick_delta_ms(level));
    }
    interval
}

/// Session score card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameScore {
    pub level: u32,
    /// Rows cleared since the last level-up
    pub rows_this_level: u32,
    pub total_rows: u32,
    pub score: u32,
    /// Best score seen, carried in from previous sessions
    pub high_score: u32,
}

impl GameScore {
    pub fn new(initial_level: u32, high_score: u32) -> Self {
        Self {
            level: initial_level,
            rows_this_level: 0,
            total_rows: 0,
            score: 0,
            high_score,
        }
    }

    /// Account for `rows` cleared by one lock. Returns true when the
    /// clear pushed the session over [`ROWS_PER_LEVEL`] and the level
    /// advanced.
    pub fn apply_clear(&mut self, rows: u32) -> bool {
        self.score += clear_score(self.level, rows);
        self.high_score = self.high_score.max(self.score);
        self.total_rows += rows;
        self.rows_this_level += rows;
        if self.rows_this_level >= ROWS_PER_LEVEL {
            self.level += 1;
            self.rows_this_level = 0;
            return true;
        }
        false
    }
}
