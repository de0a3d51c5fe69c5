//! Terminal rendering: theme palette, layout, and scene dispatch.

pub mod game_scene;
pub mod settings_scene;
pub mod stats_scene;

use crate::config::{GameConfig, Theme};
use crate::core::game_state::GameSession;
use crate::input::Overlay;
use crate::stats::{Stats, Streak};
use chrono::NaiveDate;
use ratatui::style::Color;
use ratatui::Frame;

/// Concrete colors for a theme.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub accent: Color,
    pub exact: Color,
    pub misplaced: Color,
    pub absent: Color,
    pub text: Color,
    pub dim: Color,
}

pub fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Classic => Palette {
            accent: Color::Magenta,
            exact: Color::Green,
            misplaced: Color::Yellow,
            absent: Color::Red,
            text: Color::White,
            dim: Color::DarkGray,
        },
        Theme::Ocean => Palette {
            accent: Color::Cyan,
            exact: Color::LightGreen,
            misplaced: Color::LightBlue,
            absent: Color::LightRed,
            text: Color::White,
            dim: Color::DarkGray,
        },
        Theme::Mono => Palette {
            accent: Color::White,
            exact: Color::White,
            misplaced: Color::Gray,
            absent: Color::DarkGray,
            text: Color::White,
            dim: Color::DarkGray,
        },
    }
}

/// Draw the whole screen: the game scene plus whichever overlay is active.
pub fn draw_ui(
    frame: &mut Frame,
    session: &GameSession,
    streak: &Streak,
    stats: &Stats,
    config: &GameConfig,
    overlay: &Overlay,
    today: NaiveDate,
) {
    let area = frame.size();
    let colors = palette(config.theme);

    game_scene::render_game(frame, area, session, streak, &colors, today);

    match overlay {
        Overlay::Settings { selected_row } => {
            settings_scene::render_settings(frame, area, config, *selected_row, &colors);
        }
        Overlay::Stats => {
            stats_scene::render_stats(frame, area, stats, &colors);
        }
        Overlay::None => {}
    }
}

/// `mm:ss` for the session timer and stats readouts.
pub fn format_seconds(total: u64) -> String {
    format!("{}:{:02}", total / 60, total % 60)
}
