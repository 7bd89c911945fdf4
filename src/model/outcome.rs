use crate::model::constants::{EXPECTED_OUTCOME_SCALE, FULL_WIN_PERFORMANCE_DIFF};

/// The score of player B against player A, derived from their performance
/// percentages.
///
/// The difference `perf_b - perf_a` is clamped to
/// `[-FULL_WIN_PERFORMANCE_DIFF, FULL_WIN_PERFORMANCE_DIFF]` and then
/// mapped linearly onto `[0, 1]`, so equal performances score exactly 0.5.
pub fn actual_outcome(perf_a: f64, perf_b: f64) -> f64 {
    let diff = (perf_b - perf_a).clamp(-FULL_WIN_PERFORMANCE_DIFF, FULL_WIN_PERFORMANCE_DIFF);

    (diff + FULL_WIN_PERFORMANCE_DIFF) / (FULL_WIN_PERFORMANCE_DIFF * 2.0)
}

/// The expected score of player B against player A, where `rating_diff` is
/// `rating_a - rating_b`.
pub fn expected_outcome(rating_diff: f64) -> f64 {
    1.0 / (1.0 + 2f64.powf(rating_diff / EXPECTED_OUTCOME_SCALE))
}
