//! Pacing delays as data.
//!
//! The core never owns a timer. When a transition should be applied later
//! (resolving a flipped pair, ending Simon playback, starting the next Simon
//! round), the hub hands the host a [`DelayRequest`] and the host calls back
//! `Hub::fire` once the delay elapses.
//!
//! Every request is stamped with the hub's current [`Generation`]. The
//! generation is bumped whenever a game is selected, deselected, or restarted,
//! so a timer that outlives its session is recognized as stale and discarded
//! instead of mutating a later session's state.

use serde::{Deserialize, Serialize};

/// Session token. Two requests compare equal only within one play session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Generation(pub u64);

impl Generation {
    /// Advance to the next session.
    pub fn bump(&mut self) {
        self.0 += 1;
    }
}

/// A timer-driven transition, named so the hub can route it back to the
/// active engine when the host fires it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeferredAction {
    /// Compare the two face-up memory cards and match or hide them.
    ResolveFlips,
    /// Simon playback finished; unlock player input.
    PresentationDone,
    /// Pause after a completed Simon round, then deal the next one.
    NextRound,
}

/// A scheduled-callback request: "apply `action` after `delay_ms`, unless
/// the session identified by `generation` is gone by then."
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelayRequest {
    pub generation: Generation,
    pub delay_ms: u32,
    pub action: DeferredAction,
}

/// A visual highlight the host should perform: pulse color `color` starting
/// `at_ms` after the report, for `duration_ms`.
///
/// Simon playback is expressed entirely as a list of these; the engine never
/// touches the screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pulse {
    pub color: u8,
    pub at_ms: u32,
    pub duration_ms: u32,
}
