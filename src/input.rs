//! Input dispatch for the game screen.
//!
//! Maps crossterm key events to core session inputs and runs the overlay
//! priority chain (settings, stats) before the game itself sees a key.

use crate::config::{GameConfig, Theme};
use crate::core::game_logic::{
    self, process_input, InputOutcome, SessionInput,
};
use crate::core::game_state::{Difficulty, FeedbackMark, GameSession, Mode};
use crate::stats::{Stats, Streak};
use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent};
use rand::Rng;

/// Which overlay sits on top of the game screen. At most one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Settings { selected_row: usize },
    Stats,
}

/// Rows in the settings overlay, top to bottom.
pub const SETTINGS_ROWS: usize = 3;

/// What the shell should do after a key was handled.
pub enum InputResult {
    Continue,
    /// A core input was processed; the outcome may request snapshot saves.
    Outcome(InputOutcome),
    /// The session was reset; the shell restarts its tick clock.
    SessionReset,
    /// Config changed and should be saved; the session may have reset too.
    SettingsChanged { session_reset: bool },
    Quit,
}

/// Handle one key event against the full game state.
#[allow(clippy::too_many_arguments)]
pub fn handle_key<R: Rng>(
    key: KeyEvent,
    session: &mut GameSession,
    config: &mut GameConfig,
    streak: &mut Streak,
    stats: &mut Stats,
    overlay: &mut Overlay,
    today: NaiveDate,
    rng: &mut R,
) -> InputResult {
    // 1. Settings overlay captures everything while open.
    if let Overlay::Settings { selected_row } = *overlay {
        return handle_settings(key, selected_row, session, config, overlay, today, rng);
    }

    // 2. Stats overlay: any close key dismisses.
    if *overlay == Overlay::Stats {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Enter
        ) {
            *overlay = Overlay::None;
        }
        return InputResult::Continue;
    }

    // 3. Shell-level keys.
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => return InputResult::Quit,
        KeyCode::Tab => {
            *overlay = Overlay::Settings { selected_row: 0 };
            return InputResult::Continue;
        }
        KeyCode::Char('s') | KeyCode::Char('S') if !session.is_marking() => {
            *overlay = Overlay::Stats;
            return InputResult::Continue;
        }
        KeyCode::Char('n') | KeyCode::Char('N') if session.won => {
            game_logic::reset_session(session, today, rng);
            return InputResult::SessionReset;
        }
        _ => {}
    }

    // 4. Game keys.
    let input = match key.code {
        // While the judge is marking, the digit row doubles as mark entry.
        KeyCode::Char(c) if session.is_marking() => match c {
            '1' => Some(SessionInput::Mark(FeedbackMark::Exact)),
            '2' => Some(SessionInput::Mark(FeedbackMark::Misplaced)),
            '3' => Some(SessionInput::Mark(FeedbackMark::Absent)),
            _ => None,
        },
        KeyCode::Char(c) => c.to_digit(10).map(|d| SessionInput::Digit(d as u8)),
        KeyCode::Backspace => Some(SessionInput::Backspace),
        KeyCode::Enter => Some(SessionInput::Submit),
        _ => None,
    };

    match input {
        Some(input) => InputResult::Outcome(process_input(session, input, streak, stats, today)),
        None => InputResult::Continue,
    }
}

fn handle_settings<R: Rng>(
    key: KeyEvent,
    selected_row: usize,
    session: &mut GameSession,
    config: &mut GameConfig,
    overlay: &mut Overlay,
    today: NaiveDate,
    rng: &mut R,
) -> InputResult {
    match key.code {
        KeyCode::Esc | KeyCode::Tab | KeyCode::Char('q') => {
            *overlay = Overlay::None;
            InputResult::Continue
        }
        KeyCode::Up => {
            *overlay = Overlay::Settings {
                selected_row: selected_row.saturating_sub(1),
            };
            InputResult::Continue
        }
        KeyCode::Down => {
            *overlay = Overlay::Settings {
                selected_row: (selected_row + 1).min(SETTINGS_ROWS - 1),
            };
            InputResult::Continue
        }
        KeyCode::Left => cycle_setting(session, config, selected_row, -1, today, rng),
        KeyCode::Right => cycle_setting(session, config, selected_row, 1, today, rng),
        _ => InputResult::Continue,
    }
}

fn step_index(current: usize, len: usize, step: isize) -> usize {
    (current as isize + step).rem_euclid(len as isize) as usize
}

/// Cycle the value on a settings row. Mode and difficulty changes reset the
/// session; a theme change is cosmetic.
fn cycle_setting<R: Rng>(
    session: &mut GameSession,
    config: &mut GameConfig,
    row: usize,
    step: isize,
    today: NaiveDate,
    rng: &mut R,
) -> InputResult {
    config.edited = true;
    match row {
        0 => {
            let current = Mode::ALL
                .iter()
                .position(|m| *m == config.mode)
                .unwrap_or(0);
            config.mode = Mode::from_index(step_index(current, Mode::ALL.len(), step));
            game_logic::change_mode(session, config.mode, today, rng);
            InputResult::SettingsChanged {
                session_reset: true,
            }
        }
        1 => {
            let current = Difficulty::ALL
                .iter()
                .position(|d| *d == config.difficulty)
                .unwrap_or(0);
            config.difficulty =
                Difficulty::from_index(step_index(current, Difficulty::ALL.len(), step));
            game_logic::change_difficulty(session, config.difficulty, today, rng);
            InputResult::SettingsChanged {
                session_reset: true,
            }
        }
        _ => {
            let current = Theme::ALL
                .iter()
                .position(|t| *t == config.theme)
                .unwrap_or(0);
            config.theme = Theme::from_index(step_index(current, Theme::ALL.len(), step));
            InputResult::SettingsChanged {
                session_reset: false,
            }
        }
    }
}
