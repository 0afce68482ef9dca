use std::ops::RangeInclusive;

pub const MIN_ROUND_POINTS: i32 = -25;
pub const MAX_ROUND_POINTS: i32 = 125;
pub const POINTS_STEP: i32 = 5;

// Card points in a hand always add up to 100 (0 when a 1-2 ends the round early).
pub const ROUND_POINTS_TOTAL: i32 = 100;

pub const TICHU_BONUS: i32 = 100;
pub const GRAND_TICHU_BONUS: i32 = 200;
pub const ONE_TWO_BONUS: i32 = 200;

pub const DEFAULT_WINNING_SCORE: i32 = 1000;
pub const MIN_WINNING_SCORE: i32 = 100;
pub const MAX_WINNING_SCORE: i32 = 2000;
pub const WINNING_SCORE_STEP: i32 = 100;

pub fn valid_points_range() -> RangeInclusive<i32> {
    MIN_ROUND_POINTS..=MAX_ROUND_POINTS
}

/// Trick points sum to 100, or to 0 after a 1-2 finish.
pub fn is_balanced_sum(team_a: i32, team_b: i32) -> bool {
    let sum = team_a + team_b;
    sum == ROUND_POINTS_TOTAL || sum == 0
}

/// Points the other team must have taken when one team took `value`.
///
/// Clamped to the valid range and rounded to the nearest step.
pub fn complement_points(value: i32) -> i32 {
    let clamped = ROUND_POINTS_TOTAL
        .saturating_sub(value)
        .clamp(MIN_ROUND_POINTS, MAX_ROUND_POINTS);
    // floor(x / 5 + 1/2) * 5 in integer arithmetic
    (2 * clamped + POINTS_STEP).div_euclid(2 * POINTS_STEP) * POINTS_STEP
}

/// Thresholds offered to the user (100..=2000 in steps of 100).
pub fn winning_score_options() -> impl Iterator<Item = i32> {
    (MIN_WINNING_SCORE..=MAX_WINNING_SCORE).step_by(WINNING_SCORE_STEP as usize)
}

pub fn is_valid_winning_score(score: i32) -> bool {
    (MIN_WINNING_SCORE..=MAX_WINNING_SCORE).contains(&score) && score % WINNING_SCORE_STEP == 0
}

/// Nominal game length used by the games-played counter.
pub const ROUNDS_PER_GAME: usize = 10;

/// Common splits offered as one-tap entries.
pub const QUICK_PRESETS: [(i32, i32); 5] = [(100, 0), (75, 25), (50, 50), (25, 75), (0, 100)];
