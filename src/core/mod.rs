//! Core building blocks shared by every engine: RNG, errors, scheduling.
//!
//! Nothing in this module knows about any particular game. Engines consume
//! these types; the hub owns the instances.

pub mod error;
pub mod rng;
pub mod schedule;

pub use error::GameError;
pub use rng::{GameRng, GameRngState};
pub use schedule::{DeferredAction, DelayRequest, Generation, Pulse};
