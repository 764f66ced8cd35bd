//! The six mini-game engines.
//!
//! Each engine is an independent value: its own state, its own moves, its own
//! reports. No engine reads another's state. All of them implement
//! [`GameEngine`], the four-primitive contract the hub routes through.

pub mod guess;
pub mod memory;
pub mod quiz;
pub mod rps;
pub mod simon;
pub mod tictactoe;

use crate::core::GameRng;

/// The contract every mini-game engine implements.
///
/// ## Implementation Notes
///
/// - `new_game` draws any initial randomness (secret number, card layout)
///   from the injected RNG and nothing else.
/// - `apply` must be total: an illegal move yields an "ignored" report
///   variant, never a panic or an error.
/// - `is_terminal` is `false` forever for games with no end state (RPS).
pub trait GameEngine: Sized {
    /// One user (or timer-driven) action.
    type Move;
    /// What the transition tells the host: feedback, outcomes, pulses.
    type Report;

    /// Create a fresh game.
    fn new_game(rng: &mut GameRng) -> Self;

    /// Apply a move to the state.
    fn apply(&mut self, mv: Self::Move, rng: &mut GameRng) -> Self::Report;

    /// Check whether the game has reached a terminal state.
    fn is_terminal(&self) -> bool;
}
