/// Streak progress calculation
/// 
/// Progress is a percentage of a fixed streak goal, clamped to 0..=100.

/// Number of completions that counts as a full streak
pub const STREAK_GOAL: i64 = 10;

/// Map a streak count to a 0-100 percentage of [`STREAK_GOAL`]
///
/// Uses integer division, so partial percentages truncate.
pub fn progress(streak: i64) -> i64 {
    if streak > STREAK_GOAL {
        return 100;
    }
    (streak * 100 / STREAK_GOAL).max(0)
}
