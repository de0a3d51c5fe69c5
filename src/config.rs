//! Persisted user configuration.

use crate::core::constants::CONFIG_FILE;
use crate::core::game_state::{Difficulty, Mode};
use crate::utils::persistence::{load_json_or_default, save_json};
use serde::{Deserialize, Serialize};
use std::io;

/// Named color theme; the UI maps it to concrete colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Classic,
    Ocean,
    Mono,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Classic, Theme::Ocean, Theme::Mono];

    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or(Theme::Classic)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Classic => "Classic",
            Self::Ocean => "Ocean",
            Self::Mono => "Mono",
        }
    }
}

/// Settings that survive restarts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub mode: Mode,
    pub difficulty: Difficulty,
    pub theme: Theme,
    /// Set once the user changes any setting through the settings overlay.
    pub edited: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Daily,
            difficulty: Difficulty::Easy,
            theme: Theme::Classic,
            edited: false,
        }
    }
}

pub fn load_config() -> GameConfig {
    load_json_or_default(CONFIG_FILE)
}

pub fn save_config(config: &GameConfig) -> io::Result<()> {
    save_json(CONFIG_FILE, config)
}
