//! Win statistics and the daily streak.

pub mod logic;
pub mod persistence;
pub mod types;

pub use persistence::{load_stats, load_streak, save_stats, save_streak};
pub use types::{StatBucket, Stats, Streak};
