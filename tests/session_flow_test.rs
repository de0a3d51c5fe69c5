//! Integration test: single-player session flow.
//!
//! Drives whole games through the public input API: digit entry, rejection
//! paths, scoring, winning, and reset.

use chrono::NaiveDate;
use numble::core::game_logic::{
    new_session, process_input, reset_session, InputOutcome, SessionEvent, SessionInput,
    MSG_GUESS_MADE, MSG_NUMBER_USED, MSG_PRESS_SUBMIT,
};
use numble::core::game_state::FeedbackMark;
use numble::{Difficulty, GameSession, Mode, Stats, Streak};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 9, 1).expect("valid date")
}

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(1234)
}

struct Game {
    session: GameSession,
    streak: Streak,
    stats: Stats,
}

impl Game {
    fn solo(difficulty: Difficulty, code: [u8; 4]) -> Self {
        let mut session = new_session(Mode::SinglePlayer, difficulty, today(), &mut rng());
        session.answer = Some(code);
        Self {
            session,
            streak: Streak::default(),
            stats: Stats::default(),
        }
    }

    fn send(&mut self, input: SessionInput) -> InputOutcome {
        process_input(
            &mut self.session,
            input,
            &mut self.streak,
            &mut self.stats,
            today(),
        )
    }

    fn guess(&mut self, digits: [u8; 4]) -> InputOutcome {
        for d in digits {
            self.send(SessionInput::Digit(d));
        }
        self.send(SessionInput::Submit)
    }
}

// =============================================================================
// Whole-game scenarios
// =============================================================================

#[test]
fn test_game_played_to_a_win() {
    let mut game = Game::solo(Difficulty::Medium, [1, 2, 3, 4]);
    for _ in 0..40 {
        game.session.second_tick();
    }

    let out = game.guess([5, 6, 7, 8]);
    assert!(out.contains(SessionEvent::GuessScored));
    assert_eq!(
        game.session.history[0].feedback,
        [FeedbackMark::Absent; 4]
    );

    let out = game.guess([4, 3, 2, 1]);
    assert!(out.contains(SessionEvent::GuessScored));
    assert_eq!(
        game.session.history[1].feedback,
        [FeedbackMark::Misplaced; 4]
    );

    let out = game.guess([1, 2, 3, 4]);
    assert!(out.contains(SessionEvent::Won));
    assert!(game.session.won);
    assert_eq!(game.session.history.len(), 3);
    assert!(out.stats_changed);

    let bucket = game
        .stats
        .bucket(Mode::SinglePlayer, Some(Difficulty::Medium))
        .expect("bucket recorded");
    assert_eq!(bucket.wins, 1);
    assert_eq!(bucket.total_guesses, 3);
    assert_eq!(bucket.fewest_guesses, Some(3));
    assert_eq!(bucket.fastest_seconds, Some(40));
}

#[test]
fn test_feedback_matches_scoring_rules() {
    let mut game = Game::solo(Difficulty::Medium, [1, 1, 2, 3]);
    game.guess([1, 1, 1, 1]);
    assert_eq!(
        game.session.history[0].feedback,
        [
            FeedbackMark::Exact,
            FeedbackMark::Exact,
            FeedbackMark::Absent,
            FeedbackMark::Absent
        ]
    );
}

#[test]
fn test_won_session_is_frozen_until_reset() {
    let mut game = Game::solo(Difficulty::Medium, [9, 8, 7, 6]);
    game.guess([9, 8, 7, 6]);
    assert!(game.session.won);
    let elapsed = game.session.elapsed_seconds;

    // Input and ticks change nothing.
    let out = game.guess([1, 2, 3, 4]);
    assert!(out.events.is_empty());
    assert_eq!(game.session.history.len(), 1);
    game.session.second_tick();
    assert_eq!(game.session.elapsed_seconds, elapsed);

    // Reset thaws everything.
    reset_session(&mut game.session, today(), &mut rng());
    assert!(!game.session.won);
    assert!(game.session.history.is_empty());
    assert_eq!(game.session.elapsed_seconds, 0);
    let out = game.send(SessionInput::Digit(3));
    assert!(out.contains(SessionEvent::BufferChanged));
}

// =============================================================================
// Rejection paths
// =============================================================================

#[test]
fn test_duplicate_guess_leaves_single_history_entry() {
    let mut game = Game::solo(Difficulty::Medium, [9, 9, 9, 9]);
    game.guess([1, 2, 3, 4]);
    assert_eq!(game.session.history.len(), 1);

    let out = game.guess([1, 2, 3, 4]);
    assert!(out.contains(SessionEvent::Rejected));
    assert_eq!(game.session.message.as_deref(), Some(MSG_GUESS_MADE));
    assert_eq!(game.session.history.len(), 1);
}

#[test]
fn test_rejected_duplicate_can_be_edited_and_resubmitted() {
    let mut game = Game::solo(Difficulty::Medium, [9, 9, 9, 9]);
    game.guess([1, 2, 3, 4]);
    game.guess([1, 2, 3, 4]);
    // The duplicate is still in the buffer: fix just the last digit.
    game.send(SessionInput::Backspace);
    game.send(SessionInput::Digit(5));
    let out = game.send(SessionInput::Submit);
    assert!(out.contains(SessionEvent::GuessScored));
    assert_eq!(game.session.history.len(), 2);
    assert_eq!(game.session.history[1].digits, [1, 2, 3, 5]);
}

#[test]
fn test_distinct_digit_rule_applies_to_guess_entry() {
    let mut game = Game::solo(Difficulty::Hard, [1, 2, 3, 4]);
    game.send(SessionInput::Digit(7));
    let out = game.send(SessionInput::Digit(7));
    assert!(out.contains(SessionEvent::Rejected));
    assert_eq!(game.session.message.as_deref(), Some(MSG_NUMBER_USED));

    // A different digit goes through.
    game.send(SessionInput::Digit(8));
    assert!(game.session.buffer.contains(8));
}

#[test]
fn test_overfull_entry_prompts_for_submit() {
    let mut game = Game::solo(Difficulty::Medium, [1, 2, 3, 4]);
    for d in [1, 2, 3, 4, 5, 6] {
        game.send(SessionInput::Digit(d));
    }
    assert_eq!(game.session.buffer.digits(), Some([1, 2, 3, 4]));
    assert_eq!(game.session.message.as_deref(), Some(MSG_PRESS_SUBMIT));
}

#[test]
fn test_message_is_transient() {
    let mut game = Game::solo(Difficulty::Hard, [1, 2, 3, 4]);
    game.send(SessionInput::Digit(7));
    game.send(SessionInput::Digit(7));
    assert!(game.session.message.is_some());

    // The next input replaces the message.
    game.send(SessionInput::Digit(8));
    assert!(game.session.message.is_none());
}

// =============================================================================
// Timer
// =============================================================================

#[test]
fn test_timer_counts_only_until_win() {
    let mut game = Game::solo(Difficulty::Medium, [2, 4, 6, 8]);
    game.session.second_tick();
    game.session.second_tick();
    game.session.second_tick();
    game.guess([2, 4, 6, 8]);

    let bucket = game
        .stats
        .bucket(Mode::SinglePlayer, Some(Difficulty::Medium))
        .expect("bucket recorded");
    assert_eq!(bucket.fastest_seconds, Some(3));
    assert_eq!(bucket.total_seconds, 3);

    for _ in 0..10 {
        game.session.second_tick();
    }
    assert_eq!(game.session.elapsed_seconds, 3);
}
