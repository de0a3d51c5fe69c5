//! Streak and stats save files.
//!
//! Both snapshots live under ~/.numble/ and are written after every win;
//! missing or malformed files load as defaults.

use super::types::{Stats, Streak};
use crate::core::constants::{STATS_FILE, STREAK_FILE};
use crate::utils::persistence::{load_json_or_default, save_json};
use std::io;

pub fn load_stats() -> Stats {
    load_json_or_default(STATS_FILE)
}

pub fn save_stats(stats: &Stats) -> io::Result<()> {
    save_json(STATS_FILE, stats)
}

pub fn load_streak() -> Streak {
    load_json_or_default(STREAK_FILE)
}

pub fn save_streak(streak: &Streak) -> io::Result<()> {
    save_json(STREAK_FILE, streak)
}
