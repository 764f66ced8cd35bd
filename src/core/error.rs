//! Error taxonomy.
//!
//! Engines are total over their input domain: an illegal move (occupied
//! cell, flip of a resolved card, input during playback) is a no-op report,
//! not an error. The only typed failure is input that cannot be interpreted
//! at all, which is rejected before any state is touched.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("not a number: {0:?}")]
    InvalidInput(String),
}
