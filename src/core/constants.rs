//! Game-wide constants.

/// Number of digits in a code (secret, guess, and feedback all share it).
pub const CODE_LENGTH: usize = 4;

/// Digits run `0..DIGIT_BASE`.
pub const DIGIT_BASE: u8 = 10;

/// Daily seed = `year * DAILY_YEAR_FACTOR + month * DAILY_MONTH_FACTOR + day`
/// over the UTC calendar date. Every client playing the same day derives the
/// same seed; changing these breaks cross-client agreement.
pub const DAILY_YEAR_FACTOR: i64 = 56_700;
pub const DAILY_MONTH_FACTOR: i64 = 100;

/// Global cap on resample attempts when a difficulty requires distinct
/// digits. Generation terminates when the cap is hit even if a duplicate
/// remains.
pub const MAX_RESAMPLE_ATTEMPTS: u32 = 100;

/// Input poll interval for the main loop, in milliseconds.
pub const INPUT_POLL_MS: u64 = 50;

// ── Save file names under ~/.numble/ ───────────────────────────
pub const CONFIG_FILE: &str = "config.json";
pub const STATS_FILE: &str = "stats.json";
pub const STREAK_FILE: &str = "streak.json";
