//! Scoring module - Classic Nintendo line scoring and level progression
//!
//! Points for a clear are `LINE_SCORES[n] * (level + 1)` using the level before
//! the clear. The level is `lines / LINES_PER_LEVEL`.

use crate::types::{BASE_FALL_MS, FALL_STEP_MS, LINES_PER_LEVEL, LINE_SCORES, MIN_FALL_MS};

/// Calculate line clear score
/// lines: number of lines cleared (1-4)
/// level: current level (0-based)
pub fn line_score(lines: u32, level: u32) -> u32 {
    if lines == 0 || lines > 4 {
        return 0;
    }
    LINE_SCORES[lines as usize].saturating_mul(level + 1)
}

pub fn level_for_lines(lines: u32) -> u32 {
    lines / LINES_PER_LEVEL
}

/// Gravity interval in milliseconds for a level.
pub fn fall_interval_ms(level: u32) -> u32 {
    BASE_FALL_MS
        .saturating_sub(FALL_STEP_MS.saturating_mul(level))
        .max(MIN_FALL_MS)
}

/// Running score, cleared lines and level of one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Scorer {
    score: u32,
    lines: u32,
    level: u32,
}

impl Scorer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit a clear of `lines` rows. Returns true iff the level went up.
    ///
    /// # Panics
    ///
    /// If `lines` is not in `1..=4`.
    pub fn add_lines(&mut self, lines: u32) -> bool {
        assert!(
            (1..=4).contains(&lines),
            "a single freeze clears 1 to 4 lines, got {lines}"
        );
        self.score = self.score.saturating_add(line_score(lines, self.level));
        self.lines += lines;
        let previous = self.level;
        self.level = level_for_lines(self.lines);
        self.level > previous
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
