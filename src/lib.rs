//! # game-hub
//!
//! Rule engines for six browser mini-games, plus a thin host dispatcher.
//!
//! ## Design Principles
//!
//! 1. **Engines are pure state machines**: each game exposes an initial-state
//!    constructor, a move-application function, and a terminal-state check.
//!    No engine touches the UI, a clock, or a global RNG.
//!
//! 2. **Randomness is injected**: every draw goes through [`GameRng`], a
//!    seeded ChaCha8 generator with a serializable snapshot, so any session
//!    can be replayed deterministically.
//!
//! 3. **Timers are data**: pacing delays (card-flip resolution, Simon
//!    playback) are emitted as [`DelayRequest`] values stamped with a session
//!    [`Generation`]. The host schedules them and calls back `Hub::fire`;
//!    a request from a dead session is discarded, never applied.
//!
//! ## Modules
//!
//! - `core`: RNG, error taxonomy, scheduling primitives
//! - `games`: the six engines (guess, rps, memory, quiz, tictactoe, simon)
//! - `hub`: active-game selection and action routing

pub mod core;
pub mod games;
pub mod hub;

// Re-export commonly used types
pub use crate::core::{
    DeferredAction, DelayRequest, GameError, GameRng, GameRngState, Generation, Pulse,
};

pub use crate::games::GameEngine;

pub use crate::games::guess::{parse_guess, Feedback, GuessState};
pub use crate::games::memory::{FlipReport, MemoryState, ResolveReport};
pub use crate::games::quiz::{AnswerReport, Question, QuizState};
pub use crate::games::rps::{Outcome, Round, RpsMove, RpsState};
pub use crate::games::simon::{SimonMove, SimonPhase, SimonReport, SimonState};
pub use crate::games::tictactoe::{Mark, MoveReport, Status, TicTacToeState};

pub use crate::hub::{GameId, Hub, HubAction, HubEvent, HubReport};
