//! Core game logic: code generation, guess scoring, and the session
//! state machine.

pub mod answer;
pub mod constants;
pub mod game_logic;
pub mod game_state;
pub mod marking;

pub use constants::*;
