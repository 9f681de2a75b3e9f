//! Scoring module - classic line-clear scoring, level curve, gravity curve
//!
//! Score for a clear is `LINE_SCORES[n] * level`. The level is always
//! recomputed from the lines total (never incremented) so the two can not
//! drift apart, and the gravity interval is in turn a pure function of the
//! level with a hard floor.

use crate::types::{BASE_DROP_MS, DROP_FLOOR_MS, DROP_STEP_MS, LINES_PER_LEVEL, LINE_SCORES};

/// Points awarded for clearing `lines` rows at the given level.
/// `lines` is 0-4; 0 awards nothing.
pub fn line_clear_score(lines: usize, level: u32) -> u32 {
    if lines == 0 || lines >= LINE_SCORES.len() {
        return 0;
    }
    LINE_SCORES[lines] * level
}

/// Level for a lines total. Starts at 1, +1 per ten lines.
pub fn level_for_lines(lines_total: u32) -> u32 {
    (1 + lines_total / LINES_PER_LEVEL).max(1)
}

/// Gravity interval for a level: 700ms at level 1, 50ms faster per level,
/// floored at 100ms.
pub fn gravity_interval_ms(level: u32) -> u32 {
    BASE_DROP_MS
        .saturating_sub(level.saturating_sub(1) * DROP_STEP_MS)
        .max(DROP_FLOOR_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_clear_score_level_one() {
        assert_eq!(line_clear_score(0, 1), 0);
        assert_eq!(line_clear_score(1, 1), 40);
        assert_eq!(line_clear_score(2, 1), 100);
        assert_eq!(line_clear_score(3, 1), 300);
        assert_eq!(line_clear_score(4, 1), 1200);
    }

    #[test]
    fn test_line_clear_score_scales_with_level() {
        assert_eq!(line_clear_score(1, 3), 120);
        assert_eq!(line_clear_score(4, 5), 6000);
    }

    #[test]
    fn test_level_curve() {
        assert_eq!(level_for_lines(0), 1);
        assert_eq!(level_for_lines(9), 1);
        assert_eq!(level_for_lines(10), 2);
        assert_eq!(level_for_lines(25), 3);
        assert_eq!(level_for_lines(100), 11);
    }

    #[test]
    fn test_gravity_curve() {
        assert_eq!(gravity_interval_ms(1), 700);
        assert_eq!(gravity_interval_ms(2), 650);
        assert_eq!(gravity_interval_ms(13), 100);
        // Floored at 100ms from level 13 on.
        assert_eq!(gravity_interval_ms(50), 100);
    }
}
