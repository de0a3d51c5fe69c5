//! The per-session state machine.
//!
//! Consumes discrete input events (digit keys, backspace, submit, judge
//! marks) and mutates the session, returning an [`InputOutcome`] describing
//! what happened so the shell can persist snapshots and react - the core
//! itself performs no IO.

use crate::core::answer;
use crate::core::constants::{CODE_LENGTH, DIGIT_BASE};
use crate::core::game_state::{
    Difficulty, FeedbackMark, GameSession, GuessRecord, Mode, MultiplayerPhase,
};
use crate::core::marking::{is_winning, mark_guess};
use crate::stats::{Stats, Streak};
use chrono::NaiveDate;
use rand::Rng;

// ── Transient status messages ──────────────────────────────────
pub const MSG_PRESS_SUBMIT: &str = "Press Enter to submit";
pub const MSG_NUMBER_USED: &str = "Number already used";
pub const MSG_GUESS_MADE: &str = "Guess already made";
pub const MSG_INCOMPLETE: &str = "Enter all four digits first";
pub const MSG_SET_NUMBER: &str = "Player 1, set the number";
pub const MSG_MAKE_GUESS: &str = "Player 2, make your guess";
pub const MSG_DAILY_LOCKED: &str = "Daily solved - come back tomorrow";

fn mark_prompt(next_position: usize) -> String {
    format!("Mark digit {} of {}", next_position + 1, CODE_LENGTH)
}

/// A discrete input event from the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionInput {
    Digit(u8),
    Backspace,
    Submit,
    /// Multiplayer only: the judge's classification for the next position.
    Mark(FeedbackMark),
}

/// What an input event made the session do. The shell maps these to
/// effects; persistence is requested through the [`InputOutcome`] flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The working guess changed.
    BufferChanged,
    /// Multiplayer: player 1's code was accepted.
    AnswerSet,
    /// Multiplayer: a full guess is now waiting for judge marks.
    MarkingStarted,
    /// Multiplayer: one judge mark was recorded.
    MarkRecorded,
    /// A guess was scored and appended to history.
    GuessScored,
    /// The session was won; streak/stats snapshots were updated.
    Won,
    /// The input was rejected; `session.message` says why.
    Rejected,
    /// The daily puzzle was already solved today; input is locked out.
    LockedOut,
}

/// Result of processing one input event.
#[derive(Debug, Clone, Default)]
pub struct InputOutcome {
    pub events: Vec<SessionEvent>,
    /// Stats were updated and should be written back to disk.
    pub stats_changed: bool,
    /// The streak was updated and should be written back to disk.
    pub streak_changed: bool,
}

impl InputOutcome {
    pub fn contains(&self, event: SessionEvent) -> bool {
        self.events.contains(&event)
    }
}

/// Process one input event.
///
/// `today` is the UTC calendar date. `streak` and `stats` are the loaded
/// snapshots; a win replaces them in place and sets the corresponding
/// changed flag so the caller knows to persist.
pub fn process_input(
    session: &mut GameSession,
    input: SessionInput,
    streak: &mut Streak,
    stats: &mut Stats,
    today: NaiveDate,
) -> InputOutcome {
    let mut out = InputOutcome::default();
    session.message = None;

    // One daily win per calendar day; everything else would corrupt the
    // streak and the stats.
    if session.mode == Mode::Daily && streak.won_on(today) {
        session.message = Some(MSG_DAILY_LOCKED.to_string());
        out.events.push(SessionEvent::LockedOut);
        return out;
    }

    // Won is terminal until reset.
    if session.won {
        return out;
    }

    match input {
        SessionInput::Digit(d) => handle_digit(session, d, &mut out),
        SessionInput::Backspace => handle_backspace(session, &mut out),
        SessionInput::Submit => handle_submit(session, streak, stats, today, &mut out),
        SessionInput::Mark(mark) => handle_mark(session, mark, streak, stats, today, &mut out),
    }

    out
}

fn handle_digit(session: &mut GameSession, digit: u8, out: &mut InputOutcome) {
    if session.is_marking() || digit >= DIGIT_BASE {
        return;
    }
    if session.buffer.is_full() {
        session.message = Some(MSG_PRESS_SUBMIT.to_string());
        return;
    }
    if session.difficulty.distinct_digits() && session.buffer.contains(digit) {
        session.message = Some(MSG_NUMBER_USED.to_string());
        out.events.push(SessionEvent::Rejected);
        return;
    }

    session.buffer.push_digit(digit);
    if session.buffer.is_full() {
        session.message = Some(MSG_PRESS_SUBMIT.to_string());
    }
    out.events.push(SessionEvent::BufferChanged);
}

fn handle_backspace(session: &mut GameSession, out: &mut InputOutcome) {
    if session.is_marking() {
        return;
    }
    if session.buffer.backspace() {
        out.events.push(SessionEvent::BufferChanged);
    }
}

fn handle_submit(
    session: &mut GameSession,
    streak: &mut Streak,
    stats: &mut Stats,
    today: NaiveDate,
    out: &mut InputOutcome,
) {
    if session.is_marking() {
        return;
    }
    let Some(digits) = session.buffer.digits() else {
        session.message = Some(MSG_INCOMPLETE.to_string());
        out.events.push(SessionEvent::Rejected);
        return;
    };

    // Multiplayer: the first full submit after reset is player 1's code.
    if session.awaiting_secret() {
        if session.difficulty.distinct_digits() && has_duplicates(&digits) {
            session.message = Some(MSG_NUMBER_USED.to_string());
            out.events.push(SessionEvent::Rejected);
            return;
        }
        session.answer = Some(digits);
        session.buffer.clear();
        session.multiplayer_phase = Some(MultiplayerPhase::Guessing);
        session.message = Some(MSG_MAKE_GUESS.to_string());
        out.events.push(SessionEvent::AnswerSet);
        return;
    }

    if session.history.iter().any(|r| r.digits == digits) {
        session.message = Some(MSG_GUESS_MADE.to_string());
        out.events.push(SessionEvent::Rejected);
        return;
    }

    // Multiplayer guesses are scored by the human judge, never by the
    // engine; the guess stays in the buffer until all four marks are in.
    if session.mode == Mode::Multiplayer {
        session.multiplayer_phase = Some(MultiplayerPhase::Marking);
        session.pending_mark.clear();
        session.message = Some(mark_prompt(0));
        out.events.push(SessionEvent::MarkingStarted);
        return;
    }

    let Some(code) = session.answer else {
        return;
    };
    let feedback = mark_guess(&digits, &code);
    session.history.push(GuessRecord { digits, feedback });
    session.buffer.clear();

    if is_winning(&feedback) {
        enter_won(session, streak, stats, today, out);
    } else {
        out.events.push(SessionEvent::GuessScored);
    }
}

fn handle_mark(
    session: &mut GameSession,
    mark: FeedbackMark,
    streak: &mut Streak,
    stats: &mut Stats,
    today: NaiveDate,
    out: &mut InputOutcome,
) {
    if !session.is_marking() {
        return;
    }

    session.pending_mark.push(mark);
    if session.pending_mark.len() < CODE_LENGTH {
        session.message = Some(mark_prompt(session.pending_mark.len()));
        out.events.push(SessionEvent::MarkRecorded);
        return;
    }

    // All four positions marked: assemble the record from the guess still
    // sitting in the buffer. The judge's marks are taken verbatim - no
    // cross-check against the code.
    let Some(digits) = session.buffer.digits() else {
        return;
    };
    let mut feedback = [FeedbackMark::Absent; CODE_LENGTH];
    for (slot, m) in feedback.iter_mut().zip(session.pending_mark.iter()) {
        *slot = *m;
    }

    session.history.push(GuessRecord { digits, feedback });
    session.buffer.clear();
    session.pending_mark.clear();
    session.multiplayer_phase = Some(MultiplayerPhase::Guessing);

    if is_winning(&feedback) {
        enter_won(session, streak, stats, today, out);
    } else {
        session.message = Some(MSG_MAKE_GUESS.to_string());
        out.events.push(SessionEvent::GuessScored);
    }
}

/// Freeze the session and fold the win into the persisted snapshots.
fn enter_won(
    session: &mut GameSession,
    streak: &mut Streak,
    stats: &mut Stats,
    today: NaiveDate,
    out: &mut InputOutcome,
) {
    session.won = true;

    // Streak first, so the stats snapshot sees the new count.
    if session.mode == Mode::Daily {
        *streak = streak.record_win(today);
        out.streak_changed = true;
    }

    // Daily has no difficulty axis in the stats.
    let difficulty = match session.mode {
        Mode::Daily => None,
        _ => Some(session.difficulty),
    };
    *stats = stats.record_win(
        session.mode,
        difficulty,
        session.history.len() as u32,
        session.elapsed_seconds,
        streak.count,
    );
    out.stats_changed = true;

    out.events.push(SessionEvent::Won);
}

fn has_duplicates(digits: &[u8; CODE_LENGTH]) -> bool {
    digits
        .iter()
        .enumerate()
        .any(|(i, d)| digits[..i].contains(d))
}

/// Start a fresh session in place: new code, cleared history, buffer,
/// timer, and won flag. Multiplayer returns to awaiting player 1's code.
pub fn reset_session<R: Rng>(session: &mut GameSession, today: NaiveDate, rng: &mut R) {
    session.answer = answer::generate(session.mode, session.difficulty, today, rng);
    session.history.clear();
    session.buffer.clear();
    session.pending_mark.clear();
    session.won = false;
    session.elapsed_seconds = 0;
    session.message = None;
    session.multiplayer_phase = match session.mode {
        Mode::Multiplayer => {
            session.message = Some(MSG_SET_NUMBER.to_string());
            Some(MultiplayerPhase::AwaitingSecret)
        }
        _ => None,
    };
}

/// Construct and start a session.
pub fn new_session<R: Rng>(
    mode: Mode,
    difficulty: Difficulty,
    today: NaiveDate,
    rng: &mut R,
) -> GameSession {
    let mut session = GameSession::new(mode, difficulty);
    reset_session(&mut session, today, rng);
    session
}

/// Switch mode and reset.
pub fn change_mode<R: Rng>(session: &mut GameSession, mode: Mode, today: NaiveDate, rng: &mut R) {
    session.mode = mode;
    reset_session(session, today, rng);
}

/// Switch difficulty and reset.
pub fn change_difficulty<R: Rng>(
    session: &mut GameSession,
    difficulty: Difficulty,
    today: NaiveDate,
    rng: &mut R,
) {
    session.difficulty = difficulty;
    reset_session(session, today, rng);
}
