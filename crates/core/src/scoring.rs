//! Scoring module - points, level and gravity speed
//!
//! - Level is `lines / 10 + 1`.
//! - A clear of `n` lines scores `n² × 100 × level`, using the level *after*
//!   the cleared lines are counted. The clear that crosses a level boundary is
//!   paid at the new level.
//! - Gravity interval is `max(100, 800 - (level - 1) × 80)` milliseconds.

use crate::types::{
    GRAVITY_BASE_MS, GRAVITY_FLOOR_MS, GRAVITY_STEP_MS, LINES_PER_LEVEL, LINE_CLEAR_BASE,
};

/// Level reached after `total_lines` cleared lines (1-based).
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// Points for clearing `lines` rows at `level`.
pub fn line_clear_score(lines: usize, level: u32) -> u32 {
    let lines = lines as u32;
    lines
        .saturating_mul(lines)
        .saturating_mul(LINE_CLEAR_BASE)
        .saturating_mul(level)
}

/// Gravity interval in milliseconds at `level`.
pub fn drop_interval_ms(level: u32) -> u32 {
    let speedup = level.saturating_sub(1).saturating_mul(GRAVITY_STEP_MS);
    GRAVITY_BASE_MS
        .saturating_sub(speedup)
        .max(GRAVITY_FLOOR_MS)
}
