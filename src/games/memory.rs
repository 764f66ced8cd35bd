//! Memory Match: 8 pairs hidden in 16 positions.
//!
//! Flipping the second card of a pair starts a resolution window: the host
//! shows both faces for [`RESOLVE_DELAY_MS`], then fires
//! `DeferredAction::ResolveFlips` and the pair is either matched or hidden
//! again. Flips during the window are ignored, so a third card can never
//! race into the comparison.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::GameRng;

use super::GameEngine;

/// Number of distinct face values.
pub const PAIR_COUNT: usize = 8;
/// Total cards on the board.
pub const CARD_COUNT: usize = PAIR_COUNT * 2;
/// How long both faces stay visible before resolution. Pacing only.
pub const RESOLVE_DELAY_MS: u32 = 1000;

/// What one flip did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlipReport {
    /// Already matched, already face-up, pair pending, or index out of range.
    Ignored,
    /// First card of a pair turned face-up.
    Revealed { index: usize },
    /// Second card turned face-up; the host should schedule `ResolveFlips`
    /// after [`RESOLVE_DELAY_MS`].
    PairPending { first: usize, second: usize },
}

/// Outcome of a resolution window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolveReport {
    /// No pair was pending. Stale or duplicate timer.
    NothingPending,
    /// Faces differed; both cards are hidden again.
    Mismatch { pair: [usize; 2] },
    /// Faces matched and stay up. `complete` is the win signal; `moves` is
    /// the final count when it is set.
    Match {
        pair: [usize; 2],
        complete: bool,
        moves: u32,
    },
}

/// Memory-match board state.
///
/// `matched` only grows; `flipped` never holds more than two indices and
/// never overlaps `matched`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryState {
    cards: [u8; CARD_COUNT],
    flipped: SmallVec<[usize; 2]>,
    matched: FxHashSet<usize>,
    moves: u32,
}

impl MemoryState {
    /// Face values by position. Stable for the whole session.
    #[must_use]
    pub fn cards(&self) -> &[u8; CARD_COUNT] {
        &self.cards
    }

    /// Indices currently face-up but unresolved.
    #[must_use]
    pub fn flipped(&self) -> &[usize] {
        &self.flipped
    }

    /// Whether a position has been permanently matched.
    #[must_use]
    pub fn is_matched(&self, index: usize) -> bool {
        self.matched.contains(&index)
    }

    /// Number of matched positions.
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.matched.len()
    }

    /// Completed pair attempts so far.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Whether a pair is face-up awaiting resolution.
    #[must_use]
    pub fn pair_pending(&self) -> bool {
        self.flipped.len() == 2
    }

    /// Turn a card face-up.
    pub fn flip(&mut self, index: usize) -> FlipReport {
        if index >= CARD_COUNT
            || self.pair_pending()
            || self.matched.contains(&index)
            || self.flipped.contains(&index)
        {
            return FlipReport::Ignored;
        }

        self.flipped.push(index);

        match *self.flipped.as_slice() {
            [first, second] => {
                self.moves += 1;
                FlipReport::PairPending { first, second }
            }
            _ => FlipReport::Revealed { index },
        }
    }

    /// Resolve the pending pair: match equal faces, hide unequal ones.
    pub fn resolve_flips(&mut self) -> ResolveReport {
        let [first, second] = match *self.flipped.as_slice() {
            [a, b] => [a, b],
            _ => return ResolveReport::NothingPending,
        };

        self.flipped.clear();

        if self.cards[first] == self.cards[second] {
            self.matched.insert(first);
            self.matched.insert(second);
            ResolveReport::Match {
                pair: [first, second],
                complete: self.matched.len() == CARD_COUNT,
                moves: self.moves,
            }
        } else {
            ResolveReport::Mismatch {
                pair: [first, second],
            }
        }
    }
}

impl GameEngine for MemoryState {
    type Move = usize;
    type Report = FlipReport;

    fn new_game(rng: &mut GameRng) -> Self {
        let mut cards = [0u8; CARD_COUNT];
        for (i, card) in cards.iter_mut().enumerate() {
            *card = (i % PAIR_COUNT) as u8;
        }
        rng.shuffle(&mut cards);

        Self {
            cards,
            flipped: SmallVec::new(),
            matched: FxHashSet::default(),
            moves: 0,
        }
    }

    fn apply(&mut self, mv: usize, _rng: &mut GameRng) -> FlipReport {
        self.flip(mv)
    }

    fn is_terminal(&self) -> bool {
        self.matched.len() == CARD_COUNT
    }
}
