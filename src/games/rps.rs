//! Rock Paper Scissors against a uniformly random computer.
//!
//! No terminal state: rounds accumulate until the host deactivates the game.

use serde::{Deserialize, Serialize};

use crate::core::GameRng;

use super::GameEngine;

/// One of the three throws.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RpsMove {
    Rock,
    Paper,
    Scissors,
}

impl RpsMove {
    /// All throws, in draw order.
    pub const ALL: [RpsMove; 3] = [RpsMove::Rock, RpsMove::Paper, RpsMove::Scissors];

    /// The throw this one defeats.
    #[must_use]
    pub fn beats(self) -> RpsMove {
        match self {
            RpsMove::Rock => RpsMove::Scissors,
            RpsMove::Paper => RpsMove::Rock,
            RpsMove::Scissors => RpsMove::Paper,
        }
    }
}

/// Round outcome from the player's perspective.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Loss,
    Tie,
}

/// One resolved round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub player: RpsMove,
    pub computer: RpsMove,
    pub outcome: Outcome,
}

/// Rock-paper-scissors session state. Scores only ever grow.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpsState {
    player_score: u32,
    computer_score: u32,
    last_round: Option<Round>,
}

/// Pure outcome of a throw pair.
#[must_use]
pub fn judge(player: RpsMove, computer: RpsMove) -> Outcome {
    if player == computer {
        Outcome::Tie
    } else if player.beats() == computer {
        Outcome::Win
    } else {
        Outcome::Loss
    }
}

impl RpsState {
    #[must_use]
    pub fn player_score(&self) -> u32 {
        self.player_score
    }

    #[must_use]
    pub fn computer_score(&self) -> u32 {
        self.computer_score
    }

    #[must_use]
    pub fn last_round(&self) -> Option<Round> {
        self.last_round
    }

    /// Play one round: draw the computer's throw, judge, update the score.
    pub fn play(&mut self, player: RpsMove, rng: &mut GameRng) -> Round {
        let computer = *rng
            .choose(&RpsMove::ALL)
            .expect("ALL is non-empty");
        let outcome = judge(player, computer);

        match outcome {
            Outcome::Win => self.player_score += 1,
            Outcome::Loss => self.computer_score += 1,
            Outcome::Tie => {}
        }

        let round = Round {
            player,
            computer,
            outcome,
        };
        self.last_round = Some(round);
        round
    }
}

impl GameEngine for RpsState {
    type Move = RpsMove;
    type Report = Round;

    fn new_game(_rng: &mut GameRng) -> Self {
        Self::default()
    }

    fn apply(&mut self, mv: RpsMove, rng: &mut GameRng) -> Round {
        self.play(mv, rng)
    }

    // Runs until the host deactivates it.
    fn is_terminal(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beats_relation() {
        assert_eq!(RpsMove::Rock.beats(), RpsMove::Scissors);
        assert_eq!(RpsMove::Scissors.beats(), RpsMove::Paper);
        assert_eq!(RpsMove::Paper.beats(), RpsMove::Rock);
    }

    #[test]
    fn test_judge_all_pairs() {
        for player in RpsMove::ALL {
            for computer in RpsMove::ALL {
                let outcome = judge(player, computer);
                if player == computer {
                    assert_eq!(outcome, Outcome::Tie);
                } else if player.beats() == computer {
                    assert_eq!(outcome, Outcome::Win);
                } else {
                    assert_eq!(outcome, Outcome::Loss);
                }
            }
        }
    }

    #[test]
    fn test_exactly_one_score_moves_per_round() {
        let mut rng = GameRng::new(42);
        let mut state = RpsState::default();

        for _ in 0..200 {
            let before = (state.player_score(), state.computer_score());
            let round = state.play(RpsMove::Rock, &mut rng);
            let after = (state.player_score(), state.computer_score());

            match round.outcome {
                Outcome::Win => assert_eq!(after, (before.0 + 1, before.1)),
                Outcome::Loss => assert_eq!(after, (before.0, before.1 + 1)),
                Outcome::Tie => assert_eq!(after, before),
            }
        }
    }

    #[test]
    fn test_scores_never_decrease() {
        let mut rng = GameRng::new(9);
        let mut state = RpsState::default();
        let mut previous = (0, 0);

        for _ in 0..100 {
            state.play(RpsMove::Paper, &mut rng);
            let now = (state.player_score(), state.computer_score());
            assert!(now.0 >= previous.0 && now.1 >= previous.1);
            previous = now;
        }
    }

    #[test]
    fn test_never_terminal() {
        let mut rng = GameRng::new(3);
        let mut state = RpsState::new_game(&mut rng);

        for _ in 0..50 {
            state.play(RpsMove::Scissors, &mut rng);
            assert!(!state.is_terminal());
        }
    }
}
