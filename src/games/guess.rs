//! Number Guesser: find the secret number between 1 and 100.

use serde::{Deserialize, Serialize};

use crate::core::{GameError, GameRng};

use super::GameEngine;

/// Smallest possible secret.
pub const MIN_SECRET: u32 = 1;
/// Largest possible secret.
pub const MAX_SECRET: u32 = 100;

/// Feedback for one guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Feedback {
    TooLow,
    TooHigh,
    /// The guess matched; carries the attempt count that found it.
    Correct { attempts: u32 },
}

/// Number-guessing game state.
///
/// The secret is fixed for the session; `attempts` counts every applied
/// guess, whether or not it was in range.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessState {
    secret: u32,
    attempts: u32,
    last_feedback: Option<Feedback>,
}

impl GuessState {
    /// The number of guesses applied so far.
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Feedback from the most recent guess, if any.
    #[must_use]
    pub fn last_feedback(&self) -> Option<Feedback> {
        self.last_feedback
    }

    /// Whether the secret has been found.
    #[must_use]
    pub fn is_won(&self) -> bool {
        matches!(self.last_feedback, Some(Feedback::Correct { .. }))
    }

    /// Apply a guess. Increments `attempts` on every call.
    pub fn guess(&mut self, value: u32) -> Feedback {
        self.attempts += 1;

        let feedback = if value == self.secret {
            Feedback::Correct {
                attempts: self.attempts,
            }
        } else if value < self.secret {
            Feedback::TooLow
        } else {
            Feedback::TooHigh
        };

        self.last_feedback = Some(feedback);
        feedback
    }

    #[cfg(test)]
    fn with_secret(secret: u32) -> Self {
        Self {
            secret,
            attempts: 0,
            last_feedback: None,
        }
    }
}

/// Interpret raw text as a guess.
///
/// Rejects non-numeric input without touching any state; the caller's
/// `GuessState` is only reachable through the parsed value.
pub fn parse_guess(input: &str) -> Result<u32, GameError> {
    input
        .trim()
        .parse::<u32>()
        .map_err(|_| GameError::InvalidInput(input.to_string()))
}

impl GameEngine for GuessState {
    type Move = u32;
    type Report = Feedback;

    fn new_game(rng: &mut GameRng) -> Self {
        Self {
            secret: rng.gen_range_u32(MIN_SECRET..MAX_SECRET + 1),
            attempts: 0,
            last_feedback: None,
        }
    }

    fn apply(&mut self, mv: u32, _rng: &mut GameRng) -> Feedback {
        self.guess(mv)
    }

    fn is_terminal(&self) -> bool {
        self.is_won()
    }
}
