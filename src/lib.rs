//! Numble - a terminal digit-deduction puzzle.
//!
//! Guess the hidden four-digit code and deduce it from per-position feedback.
//! Three modes (Daily, Single Player, hot-seat Multiplayer) and four
//! difficulty tiers controlling digit distinctness and feedback verbosity.
//!
//! This library exposes the game core so integration tests and external
//! tooling can drive it without a terminal.

pub mod build_info;
pub mod config;
pub mod core;
pub mod input;
pub mod stats;
pub mod ui;
pub mod utils;

pub use config::{GameConfig, Theme};
pub use core::game_state::{Difficulty, GameSession, Mode};
pub use stats::{StatBucket, Stats, Streak};
