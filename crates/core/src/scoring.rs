//! Scoring module - line-clear points, levels and drop speed
//!
//! Points are `LINE_SCORES[n] * level`. The level is `1 + lines / 10` and the
//! drop interval shrinks by 60ms per level down to a 120ms floor.

use crate::types::{
    BASE_DROP_MS, DROP_INTERVAL_FLOOR_MS, DROP_STEP_MS, LINES_PER_LEVEL, LINE_SCORES,
};

/// Points for clearing `lines` rows in one lock at `level`.
///
/// More than four rows (only possible on a hand-built board) scores as four.
pub fn line_clear_score(lines: u32, level: u32) -> u32 {
    let idx = (lines as usize).min(LINE_SCORES.len() - 1);
    LINE_SCORES[idx].saturating_mul(level)
}

/// Level reached after `total_lines` cleared lines (starts at 1).
pub fn level_for_lines(total_lines: u32) -> u32 {
    1 + total_lines / LINES_PER_LEVEL
}

/// Drop interval for a level, in milliseconds
pub fn drop_interval_ms(level: u32) -> u32 {
    let reduction = level.saturating_sub(1).saturating_mul(DROP_STEP_MS);
    BASE_DROP_MS
        .saturating_sub(reduction)
        .max(DROP_INTERVAL_FLOOR_MS)
}

/// What one lock contributed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClearResult {
    pub lines: u32,
    pub points: u32,
    pub level_changed: bool,
}

/// Score, lines, level and drop speed of one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub drop_interval_ms: u32,
}

impl Progress {
    /// Fresh session values: score 0, lines 0, level 1, 800ms.
    pub fn new() -> Self {
        Self {
            score: 0,
            lines: 0,
            level: 1,
            drop_interval_ms: BASE_DROP_MS,
        }
    }

    /// Progress as it stands after `lines` cleared lines and `score` points.
    pub fn at(lines: u32, score: u32) -> Self {
        let level = level_for_lines(lines);
        Self {
            score,
            lines,
            level,
            drop_interval_ms: drop_interval_ms(level),
        }
    }

    /// Account for `lines` rows cleared by one lock.
    ///
    /// Points use the level in effect before the clear. The interval is only
    /// recomputed when the level changes.
    pub fn apply_clear(&mut self, lines: u32) -> ClearResult {
        if lines == 0 {
            return ClearResult::default();
        }

        let points = line_clear_score(lines, self.level);
        self.score = self.score.saturating_add(points);
        self.lines = self.lines.saturating_add(lines);

        let new_level = level_for_lines(self.lines);
        let level_changed = new_level != self.level;
        if level_changed {
            self.level = new_level;
            self.drop_interval_ms = drop_interval_ms(new_level);
        }

        ClearResult {
            lines,
            points,
            level_changed,
        }
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_scores() {
        assert_eq!(line_clear_score(0, 1), 0);
        assert_eq!(line_clear_score(1, 1), 100);
        assert_eq!(line_clear_score(2, 1), 300);
        assert_eq!(line_clear_score(3, 1), 500);
        assert_eq!(line_clear_score(4, 1), 800);

        assert_eq!(line_clear_score(2, 3), 900);
        assert_eq!(line_clear_score(4, 5), 4000);
    }

    #[test]
    fn test_oversized_clear_scores_as_four() {
        assert_eq!(line_clear_score(6, 2), 1600);
    }

    #[test]
    fn test_level_calculation() {
        assert_eq!(level_for_lines(0), 1);
        assert_eq!(level_for_lines(9), 1);
        assert_eq!(level_for_lines(10), 2);
        assert_eq!(level_for_lines(29), 3);
        assert_eq!(level_for_lines(100), 11);
    }

    #[test]
    fn test_drop_intervals() {
        assert_eq!(drop_interval_ms(1), 800);
        assert_eq!(drop_interval_ms(2), 740);
        assert_eq!(drop_interval_ms(12), 140);
        assert_eq!(drop_interval_ms(13), 120);
        assert_eq!(drop_interval_ms(50), 120);
    }

    #[test]
    fn test_drop_interval_is_non_increasing() {
        let mut prev = drop_interval_ms(1);
        for level in 2..40 {
            let cur = drop_interval_ms(level);
            assert!(cur <= prev);
            prev = cur;
        }
    }

    #[test]
    fn test_progress_level_up() {
        let mut progress = Progress::at(9, 0);
        assert_eq!(progress.level, 1);

        let result = progress.apply_clear(1);
        assert!(result.level_changed);
        assert_eq!(result.points, 100);
        assert_eq!(progress.level, 2);
        assert_eq!(progress.lines, 10);
        assert_eq!(progress.drop_interval_ms, 740);
    }

    #[test]
    fn test_progress_no_clear_is_noop() {
        let mut progress = Progress::new();
        assert_eq!(progress.apply_clear(0), ClearResult::default());
        assert_eq!(progress, Progress::new());
    }
}
