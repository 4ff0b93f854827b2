//! Difficulty scaling as pure functions of cumulative score
//!
//! Recomputed every tick; no hidden counters, so speed and spawn rate are a
//! function of score alone.

use crate::consts::*;

/// Ticks between obstacle spawns at the given score. Non-increasing in score,
/// floored at `SPAWN_RATE_MIN`.
#[inline]
pub fn spawn_interval(score: u32) -> u32 {
    SPAWN_RATE_BASE
        .saturating_sub(score / DIFFICULTY_STEP)
        .max(SPAWN_RATE_MIN)
}

/// World scroll speed before the slow multiplier. Non-decreasing in score,
/// stepped every `DIFFICULTY_STEP` points.
#[inline]
pub fn base_speed(score: u32) -> f32 {
    GAME_SPEED_BASE + (score / DIFFICULTY_STEP) as f32 * SPEED_INCREMENT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_interval_at_start() {
        assert_eq!(spawn_interval(0), 60);
        assert_eq!(spawn_interval(499), 60);
    }

    #[test]
    fn test_difficulty_step_at_500() {
        // Exactly 500: speed jumps 4.0 -> 4.5, interval drops 60 -> 59
        assert_eq!(base_speed(499), 4.0);
        assert_eq!(base_speed(500), 4.5);
        assert_eq!(spawn_interval(500), 59);
    }

    #[test]
    fn test_spawn_interval_floor() {
        assert_eq!(spawn_interval(20_000), 20);
        assert_eq!(spawn_interval(100_000), 20);
        assert_eq!(spawn_interval(u32::MAX), 20);
    }

    #[test]
    fn test_monotonic_over_score() {
        let mut prev_interval = spawn_interval(0);
        let mut prev_speed = base_speed(0);
        for score in (0..30_000).step_by(250) {
            let interval = spawn_interval(score);
            let speed = base_speed(score);
            assert!(interval <= prev_interval);
            assert!(interval >= SPAWN_RATE_MIN);
            assert!(speed >= prev_speed);
            prev_interval = interval;
            prev_speed = speed;
        }
    }
}
