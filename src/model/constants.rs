// Rating constants
pub const DEFAULT_RATING: f64 = 1000.0;
pub const BASE_K: f64 = 35.0;
pub const VICTOR_BONUS_K: f64 = 25.0;
/// Rating difference at which the stronger player is expected to score 2:1
pub const EXPECTED_OUTCOME_SCALE: f64 = 1000.0;
/// Performance difference (in percentage points) that counts as a full win
pub const FULL_WIN_PERFORMANCE_DIFF: f64 = 50.0;
// Time constants
pub const TICKS_PER_MONTH: i64 = 100;
/// Month 1 of the timestamp scheme is January 2024
pub const EPOCH_YEAR: i32 = 2024;
// Game file constants
pub const HEADER_LINES: usize = 3;
pub const MIN_PARTICIPANTS: usize = 2;
pub const EXPECTED_PARTICIPANTS_MIN: usize = 24;
pub const EXPECTED_PARTICIPANTS_MAX: usize = 25;
// Output constants
pub const RESULTS_FILE_SUFFIX: &str = "_results.txt";
pub const LEDGER_FILE_NAME: &str = "current_ratings.txt";
