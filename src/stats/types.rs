//! Persisted streak and statistics snapshots.

use crate::core::game_state::{Difficulty, Mode};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Consecutive-day daily win streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Streak {
    pub count: u32,
    pub last_played: Option<NaiveDate>,
}

/// Cumulative win counters for one (mode, difficulty) bucket. Daily buckets
/// carry `difficulty: None` - the daily puzzle has no difficulty axis in the
/// stats. The min/max fields stay `None` until a first win supplies a real
/// value, so a fresh bucket never treats zero as a minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBucket {
    pub mode: Mode,
    pub difficulty: Option<Difficulty>,
    pub wins: u32,
    pub total_guesses: u32,
    pub fewest_guesses: Option<u32>,
    pub most_guesses: Option<u32>,
    pub total_seconds: u64,
    pub fastest_seconds: Option<u64>,
    pub slowest_seconds: Option<u64>,
}

impl StatBucket {
    pub fn new(mode: Mode, difficulty: Option<Difficulty>) -> Self {
        Self {
            mode,
            difficulty,
            wins: 0,
            total_guesses: 0,
            fewest_guesses: None,
            most_guesses: None,
            total_seconds: 0,
            fastest_seconds: None,
            slowest_seconds: None,
        }
    }

    pub fn average_guesses(&self) -> f64 {
        if self.wins == 0 {
            0.0
        } else {
            f64::from(self.total_guesses) / f64::from(self.wins)
        }
    }
}

/// All statistics. Loaded once at startup, written after every win.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Stats {
    pub buckets: Vec<StatBucket>,
    /// High-water mark of the daily streak.
    pub highest_streak: u32,
}

impl Stats {
    pub fn bucket(&self, mode: Mode, difficulty: Option<Difficulty>) -> Option<&StatBucket> {
        self.buckets
            .iter()
            .find(|b| b.mode == mode && b.difficulty == difficulty)
    }
}
