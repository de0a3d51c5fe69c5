//! Secret code generation.
//!
//! Daily codes derive from the UTC calendar date so independent clients
//! agree on the day's code without any coordination; Single Player codes
//! draw from the injected RNG on every reset. Multiplayer codes are not
//! generated here at all - player 1 supplies one.

use crate::core::constants::{
    CODE_LENGTH, DAILY_MONTH_FACTOR, DAILY_YEAR_FACTOR, DIGIT_BASE, MAX_RESAMPLE_ATTEMPTS,
};
use crate::core::game_state::{Difficulty, Mode};
use chrono::{Datelike, NaiveDate};
use rand::Rng;

/// Seed shared by every client for a given UTC date.
pub fn daily_seed(date: NaiveDate) -> i64 {
    date.year() as i64 * DAILY_YEAR_FACTOR
        + date.month() as i64 * DAILY_MONTH_FACTOR
        + date.day() as i64
}

/// Deterministic fraction in `[0, 1)` derived from a seed.
///
/// The sin-based form is part of the daily agreement protocol: clients must
/// produce identical digits from identical seeds, so the exact expression
/// matters more than its statistical quality.
fn seeded_fraction(seed: f64) -> f64 {
    let x = seed.sin() * 10_000.0;
    x - x.floor()
}

fn seeded_digit(seed: i64) -> u8 {
    (seeded_fraction(seed as f64) * DIGIT_BASE as f64).floor() as u8
}

/// True when `code[i]` already appears at a lower index.
fn duplicates_earlier(code: &[u8; CODE_LENGTH], i: usize) -> bool {
    code[..i].contains(&code[i])
}

/// Generate the secret code for a session.
///
/// Returns `None` for multiplayer, where the first full submit after reset
/// becomes the code instead.
pub fn generate<R: Rng>(
    mode: Mode,
    difficulty: Difficulty,
    date: NaiveDate,
    rng: &mut R,
) -> Option<[u8; CODE_LENGTH]> {
    match mode {
        Mode::Multiplayer => None,
        Mode::Daily => Some(generate_daily(difficulty, date)),
        Mode::SinglePlayer => Some(generate_random(difficulty, rng)),
    }
}

/// The daily code: digit `i` comes from `seed + i`. Distinct-digit
/// difficulties resample a duplicated position from `seed + i + attempts`,
/// with `attempts` capped globally; a residual duplicate is kept rather than
/// reseeding, since clients with diverging retry policies would disagree on
/// the day's code.
pub fn generate_daily(difficulty: Difficulty, date: NaiveDate) -> [u8; CODE_LENGTH] {
    let seed = daily_seed(date);
    let mut code = [0u8; CODE_LENGTH];
    for (i, digit) in code.iter_mut().enumerate() {
        *digit = seeded_digit(seed + i as i64);
    }

    if difficulty.distinct_digits() {
        let mut attempts: u32 = 0;
        for i in 0..CODE_LENGTH {
            while duplicates_earlier(&code, i) && attempts < MAX_RESAMPLE_ATTEMPTS {
                code[i] = seeded_digit(seed + i as i64 + attempts as i64);
                attempts += 1;
            }
        }
    }

    code
}

/// A uniformly random code, regenerated on every reset. Distinct-digit
/// difficulties use the same bounded resampling as the daily path, against
/// the injected RNG.
pub fn generate_random<R: Rng>(difficulty: Difficulty, rng: &mut R) -> [u8; CODE_LENGTH] {
    let mut code = [0u8; CODE_LENGTH];
    for digit in code.iter_mut() {
        *digit = rng.gen_range(0..DIGIT_BASE);
    }

    if difficulty.distinct_digits() {
        let mut attempts: u32 = 0;
        for i in 0..CODE_LENGTH {
            while duplicates_earlier(&code, i) && attempts < MAX_RESAMPLE_ATTEMPTS {
                code[i] = rng.gen_range(0..DIGIT_BASE);
                attempts += 1;
            }
        }
    }

    code
}
