//! Session data structures: modes, difficulties, the working guess buffer,
//! and the scored guess history.

use crate::core::constants::CODE_LENGTH;
use serde::{Deserialize, Serialize};

/// Play modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// One shared puzzle per UTC calendar day, identical on every client.
    Daily,
    /// A fresh random code on every reset.
    SinglePlayer,
    /// Hot-seat: player 1 sets the code and judges, player 2 guesses.
    Multiplayer,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Daily, Mode::SinglePlayer, Mode::Multiplayer];

    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or(Mode::Daily)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::SinglePlayer => "Single Player",
            Self::Multiplayer => "Multiplayer",
        }
    }
}

/// Difficulty tiers. Easy and Hard require distinct digits; Hard and Extreme
/// show only a sorted feedback summary instead of per-position marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Extreme,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Extreme,
    ];

    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or(Difficulty::Easy)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::Extreme => "Extreme",
        }
    }

    /// Codes and guesses may not repeat a digit.
    pub fn distinct_digits(&self) -> bool {
        matches!(self, Self::Easy | Self::Hard)
    }

    /// Feedback is shown as a sorted summary, not per position.
    pub fn summary_feedback(&self) -> bool {
        matches!(self, Self::Hard | Self::Extreme)
    }
}

/// One cell of the working guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessSlot {
    /// Not reached yet.
    Empty,
    /// The next writable cell.
    Cursor,
    /// A committed digit.
    Digit(u8),
}

/// The four-slot working guess. Holds exactly one `Cursor` cell, or none
/// once every slot carries a digit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessBuffer {
    slots: [GuessSlot; CODE_LENGTH],
}

impl GuessBuffer {
    pub fn new() -> Self {
        let mut slots = [GuessSlot::Empty; CODE_LENGTH];
        slots[0] = GuessSlot::Cursor;
        Self { slots }
    }

    pub fn slots(&self) -> &[GuessSlot; CODE_LENGTH] {
        &self.slots
    }

    fn cursor_index(&self) -> Option<usize> {
        self.slots.iter().position(|s| *s == GuessSlot::Cursor)
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(|s| matches!(s, GuessSlot::Digit(_)))
    }

    pub fn is_empty(&self) -> bool {
        self.slots[0] == GuessSlot::Cursor
    }

    pub fn contains(&self, digit: u8) -> bool {
        self.slots.iter().any(|s| *s == GuessSlot::Digit(digit))
    }

    /// Write a digit at the cursor and advance it. Returns false when full.
    pub fn push_digit(&mut self, digit: u8) -> bool {
        let Some(i) = self.cursor_index() else {
            return false;
        };
        self.slots[i] = GuessSlot::Digit(digit);
        if i + 1 < CODE_LENGTH {
            self.slots[i + 1] = GuessSlot::Cursor;
        }
        true
    }

    /// Clear the most recently filled slot and move the cursor back to it.
    /// Returns false when nothing has been entered yet.
    pub fn backspace(&mut self) -> bool {
        match self.cursor_index() {
            Some(0) => false,
            Some(i) => {
                self.slots[i] = GuessSlot::Empty;
                self.slots[i - 1] = GuessSlot::Cursor;
                true
            }
            // Full buffer: reopen the last slot.
            None => {
                self.slots[CODE_LENGTH - 1] = GuessSlot::Cursor;
                true
            }
        }
    }

    /// The committed digits, available once the buffer is full.
    pub fn digits(&self) -> Option<[u8; CODE_LENGTH]> {
        let mut out = [0u8; CODE_LENGTH];
        for (i, slot) in self.slots.iter().enumerate() {
            match slot {
                GuessSlot::Digit(d) => out[i] = *d,
                _ => return None,
            }
        }
        Some(out)
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

impl Default for GuessBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Feedback for a single position in a scored guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackMark {
    /// Right digit, right place.
    Exact,
    /// Right digit, wrong place.
    Misplaced,
    /// Digit not in the code (beyond its consumed occurrences).
    Absent,
}

/// A scored guess. Appended to the session history in submission order and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub digits: [u8; CODE_LENGTH],
    pub feedback: [FeedbackMark; CODE_LENGTH],
}

/// Hot-seat multiplayer sub-state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MultiplayerPhase {
    /// Player 1 is entering the secret code.
    AwaitingSecret,
    /// Player 2 is entering a guess.
    Guessing,
    /// Player 1 is marking the submitted guess, one position at a time.
    Marking,
}

/// One game session. Reset on mode/difficulty change or explicitly after a
/// win.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub mode: Mode,
    pub difficulty: Difficulty,
    /// The secret code. `None` in multiplayer until player 1 sets it.
    pub answer: Option<[u8; CODE_LENGTH]>,
    pub history: Vec<GuessRecord>,
    pub buffer: GuessBuffer,
    /// Terminal: once set, nothing mutates until reset.
    pub won: bool,
    pub elapsed_seconds: u64,
    /// Transient status line, replaced on every input event.
    pub message: Option<String>,
    /// `Some` only in multiplayer.
    pub multiplayer_phase: Option<MultiplayerPhase>,
    /// Judge marks collected so far for the guess under marking.
    pub pending_mark: Vec<FeedbackMark>,
}

impl GameSession {
    /// A blank session with no code yet; `game_logic::reset_session`
    /// generates the code and the multiplayer prompt.
    pub fn new(mode: Mode, difficulty: Difficulty) -> Self {
        Self {
            mode,
            difficulty,
            answer: None,
            history: Vec::new(),
            buffer: GuessBuffer::new(),
            won: false,
            elapsed_seconds: 0,
            message: None,
            multiplayer_phase: match mode {
                Mode::Multiplayer => Some(MultiplayerPhase::AwaitingSecret),
                _ => None,
            },
            pending_mark: Vec::new(),
        }
    }

    pub fn is_marking(&self) -> bool {
        self.multiplayer_phase == Some(MultiplayerPhase::Marking)
    }

    pub fn awaiting_secret(&self) -> bool {
        self.multiplayer_phase == Some(MultiplayerPhase::AwaitingSecret)
    }

    pub fn guess_count(&self) -> usize {
        self.history.len()
    }

    /// Advance the timer by one second. Ticks after a win are no-ops, so a
    /// stray tick delivered late changes nothing.
    pub fn second_tick(&mut self) {
        if !self.won {
            self.elapsed_seconds += 1;
        }
    }
}
