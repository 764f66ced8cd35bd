//! Color Simon: repeat an ever-growing sequence of four colors.
//!
//! Playback is pure data: starting a round yields a list of [`Pulse`] events
//! and a total presentation duration. The host performs the highlights and
//! fires `DeferredAction::PresentationDone` when the duration elapses, which
//! unlocks input. Presses during playback are ignored.

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, Pulse};

use super::GameEngine;

/// Number of color buttons.
pub const COLOR_COUNT: u8 = 4;
/// Highlight pulse length. Pacing only.
pub const HIGHLIGHT_MS: u32 = 300;
/// Spacing between presented colors. Pacing only.
pub const STEP_MS: u32 = 600;
/// Pause between a completed round and the next presentation. Pacing only.
pub const ROUND_GAP_MS: u32 = 1000;

/// Where the round loop currently is.
///
/// Game over is not a resting phase: a mismatch is reported and the state
/// returns to `Idle` at level 0 in the same transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimonPhase {
    /// No round running; `start_round` begins one.
    #[default]
    Idle,
    /// Sequence playback in progress; input locked.
    Presenting,
    /// Player is echoing the sequence.
    AwaitingInput,
    /// Full sequence echoed; next round pending.
    RoundComplete,
}

/// What a transition did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimonReport {
    /// Press during playback, press while idle, start during playback,
    /// or an out-of-range color.
    Ignored,
    /// New round dealt. The host plays `pulses`, then fires
    /// `PresentationDone` after `presentation_ms`.
    Started {
        level: u32,
        pulses: Vec<Pulse>,
        presentation_ms: u32,
    },
    /// Correct press, sequence not yet finished. `pulse` is the echo
    /// highlight for the pressed button.
    Accepted { pulse: Pulse },
    /// Playback finished; the player may start echoing.
    InputUnlocked,
    /// Whole sequence echoed; host schedules `NextRound` after
    /// [`ROUND_GAP_MS`].
    RoundComplete { level: u32 },
    /// Wrong color. Reports the level reached; the state has already reset
    /// to Idle at level 0.
    GameOver { level: u32 },
}

/// One user action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimonMove {
    Start,
    Press(u8),
}

/// Simon session state.
///
/// `level == sequence.len()` at all times; `input` is always a prefix
/// candidate against `sequence` and is cleared every round.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimonState {
    sequence: Vec<u8>,
    input: Vec<u8>,
    level: u32,
    phase: SimonPhase,
}

impl SimonState {
    #[must_use]
    pub fn phase(&self) -> SimonPhase {
        self.phase
    }

    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    #[must_use]
    pub fn sequence(&self) -> &[u8] {
        &self.sequence
    }

    #[must_use]
    pub fn input(&self) -> &[u8] {
        &self.input
    }

    /// Deal the next round: append one random color, lock input, and hand
    /// the host the playback timeline.
    pub fn start_round(&mut self, rng: &mut GameRng) -> SimonReport {
        match self.phase {
            SimonPhase::Idle | SimonPhase::RoundComplete => {}
            SimonPhase::Presenting | SimonPhase::AwaitingInput => return SimonReport::Ignored,
        }

        self.sequence
            .push(rng.gen_range_u32(0..COLOR_COUNT as u32) as u8);
        self.input.clear();
        self.level += 1;
        self.phase = SimonPhase::Presenting;

        let pulses: Vec<Pulse> = self
            .sequence
            .iter()
            .enumerate()
            .map(|(i, &color)| Pulse {
                color,
                at_ms: i as u32 * STEP_MS,
                duration_ms: HIGHLIGHT_MS,
            })
            .collect();
        let presentation_ms = self.sequence.len() as u32 * STEP_MS + HIGHLIGHT_MS;

        SimonReport::Started {
            level: self.level,
            pulses,
            presentation_ms,
        }
    }

    /// Playback finished; unlock input. Ignored if nothing was playing.
    pub fn presentation_done(&mut self) -> SimonReport {
        if self.phase == SimonPhase::Presenting {
            self.phase = SimonPhase::AwaitingInput;
            SimonReport::InputUnlocked
        } else {
            SimonReport::Ignored
        }
    }

    /// Echo one color.
    pub fn press(&mut self, color: u8) -> SimonReport {
        if self.phase != SimonPhase::AwaitingInput || color >= COLOR_COUNT {
            return SimonReport::Ignored;
        }

        self.input.push(color);
        let position = self.input.len() - 1;

        if self.sequence[position] != color {
            let level = self.level;
            self.reset();
            return SimonReport::GameOver { level };
        }

        if self.input.len() == self.sequence.len() {
            self.phase = SimonPhase::RoundComplete;
            return SimonReport::RoundComplete { level: self.level };
        }

        SimonReport::Accepted {
            pulse: Pulse {
                color,
                at_ms: 0,
                duration_ms: HIGHLIGHT_MS,
            },
        }
    }

    fn reset(&mut self) {
        self.sequence.clear();
        self.input.clear();
        self.level = 0;
        self.phase = SimonPhase::Idle;
    }
}

impl GameEngine for SimonState {
    type Move = SimonMove;
    type Report = SimonReport;

    fn new_game(_rng: &mut GameRng) -> Self {
        Self::default()
    }

    fn apply(&mut self, mv: SimonMove, rng: &mut GameRng) -> SimonReport {
        match mv {
            SimonMove::Start => self.start_round(rng),
            SimonMove::Press(color) => self.press(color),
        }
    }

    // Rests in Idle after a game over; never terminal.
    fn is_terminal(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start_and_unlock(state: &mut SimonState, rng: &mut GameRng) -> Vec<u8> {
        match state.start_round(rng) {
            SimonReport::Started { .. } => {}
            other => panic!("expected Started, got {other:?}"),
        }
        assert_eq!(state.presentation_done(), SimonReport::InputUnlocked);
        state.sequence().to_vec()
    }

    #[test]
    fn test_start_round_grows_sequence() {
        let mut rng = GameRng::new(42);
        let mut state = SimonState::default();

        let report = state.start_round(&mut rng);
        match report {
            SimonReport::Started {
                level,
                pulses,
                presentation_ms,
            } => {
                assert_eq!(level, 1);
                assert_eq!(pulses.len(), 1);
                assert_eq!(presentation_ms, STEP_MS + HIGHLIGHT_MS);
            }
            other => panic!("unexpected report {other:?}"),
        }

        assert_eq!(state.level(), 1);
        assert_eq!(state.sequence().len(), 1);
        assert_eq!(state.phase(), SimonPhase::Presenting);
    }

    #[test]
    fn test_pulse_timeline_spacing() {
        let mut rng = GameRng::new(7);
        let mut state = SimonState::default();

        for _ in 0..3 {
            start_and_unlock(&mut state, &mut rng);
            for &color in state.sequence().to_vec().iter() {
                state.press(color);
            }
        }

        match state.start_round(&mut rng) {
            SimonReport::Started { pulses, presentation_ms, .. } => {
                assert_eq!(pulses.len(), 4);
                for (i, pulse) in pulses.iter().enumerate() {
                    assert_eq!(pulse.at_ms, i as u32 * STEP_MS);
                    assert_eq!(pulse.duration_ms, HIGHLIGHT_MS);
                    assert_eq!(pulse.color, state.sequence()[i]);
                }
                assert_eq!(presentation_ms, 4 * STEP_MS + HIGHLIGHT_MS);
            }
            other => panic!("unexpected report {other:?}"),
        }
    }

    #[test]
    fn test_press_ignored_while_presenting() {
        let mut rng = GameRng::new(42);
        let mut state = SimonState::default();
        state.start_round(&mut rng);

        assert_eq!(state.press(0), SimonReport::Ignored);
        assert!(state.input().is_empty());
    }

    #[test]
    fn test_press_ignored_while_idle() {
        let mut state = SimonState::default();
        assert_eq!(state.press(0), SimonReport::Ignored);
    }

    #[test]
    fn test_start_ignored_while_awaiting_input() {
        let mut rng = GameRng::new(42);
        let mut state = SimonState::default();
        start_and_unlock(&mut state, &mut rng);

        assert_eq!(state.start_round(&mut rng), SimonReport::Ignored);
        assert_eq!(state.level(), 1);
    }

    #[test]
    fn test_correct_echo_completes_round() {
        let mut rng = GameRng::new(42);
        let mut state = SimonState::default();
        let sequence = start_and_unlock(&mut state, &mut rng);

        assert_eq!(
            state.press(sequence[0]),
            SimonReport::RoundComplete { level: 1 }
        );
        assert_eq!(state.phase(), SimonPhase::RoundComplete);
    }

    #[test]
    fn test_next_round_extends_by_one() {
        let mut rng = GameRng::new(42);
        let mut state = SimonState::default();

        for round in 1..=5u32 {
            let sequence = start_and_unlock(&mut state, &mut rng);
            assert_eq!(sequence.len() as u32, round);
            assert_eq!(state.level(), round);

            for (i, &color) in sequence.iter().enumerate() {
                let report = state.press(color);
                if i + 1 == sequence.len() {
                    assert_eq!(report, SimonReport::RoundComplete { level: round });
                } else {
                    assert!(matches!(report, SimonReport::Accepted { .. }));
                }
            }
        }
    }

    #[test]
    fn test_mismatch_reports_level_and_resets() {
        let mut rng = GameRng::new(42);
        let mut state = SimonState::default();

        // Build up to level 3.
        for _ in 0..2 {
            let sequence = start_and_unlock(&mut state, &mut rng);
            for &color in &sequence {
                state.press(color);
            }
        }
        let sequence = start_and_unlock(&mut state, &mut rng);

        let wrong = (sequence[0] + 1) % COLOR_COUNT;
        assert_eq!(state.press(wrong), SimonReport::GameOver { level: 3 });

        assert_eq!(state.phase(), SimonPhase::Idle);
        assert_eq!(state.level(), 0);
        assert!(state.sequence().is_empty());
        assert!(state.input().is_empty());
    }

    #[test]
    fn test_mismatch_mid_sequence() {
        let mut rng = GameRng::new(9);
        let mut state = SimonState::default();

        // Reach a sequence of length 2 so a mismatch can land mid-echo.
        let sequence = start_and_unlock(&mut state, &mut rng);
        state.press(sequence[0]);
        let sequence = start_and_unlock(&mut state, &mut rng);

        state.press(sequence[0]);
        let wrong = (sequence[1] + 1) % COLOR_COUNT;
        assert_eq!(state.press(wrong), SimonReport::GameOver { level: 2 });
    }

    #[test]
    fn test_out_of_range_color_ignored() {
        let mut rng = GameRng::new(42);
        let mut state = SimonState::default();
        start_and_unlock(&mut state, &mut rng);

        assert_eq!(state.press(COLOR_COUNT), SimonReport::Ignored);
        assert!(state.input().is_empty());
    }

    #[test]
    fn test_level_tracks_sequence_len() {
        let mut rng = GameRng::new(5);
        let mut state = SimonState::default();

        for _ in 0..6 {
            let sequence = start_and_unlock(&mut state, &mut rng);
            assert_eq!(state.level() as usize, state.sequence().len());
            for &color in &sequence {
                state.press(color);
            }
        }
    }

    #[test]
    fn test_state_serde_round_trip() {
        let mut rng = GameRng::new(3);
        let mut state = SimonState::default();
        start_and_unlock(&mut state, &mut rng);

        let json = serde_json::to_string(&state).unwrap();
        let restored: SimonState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, restored);
    }
}
