//! The host dispatcher.
//!
//! The hub owns three things and nothing else: which engine is active, the
//! shared RNG, and the session generation. It has no game logic of its own —
//! every action is forwarded to the active engine, and every pacing delay an
//! engine asks for comes back through [`Hub::fire`] stamped with the
//! generation it was issued under.
//!
//! Selecting or deselecting a game discards the previous engine state
//! entirely and bumps the generation, so timers scheduled for a dead session
//! are recognized and dropped.

use im::Vector;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::core::{DeferredAction, DelayRequest, GameError, GameRng, Generation};
use crate::games::guess::{self, Feedback, GuessState};
use crate::games::memory::{FlipReport, MemoryState, ResolveReport, RESOLVE_DELAY_MS};
use crate::games::quiz::{AnswerReport, QuizState};
use crate::games::rps::{Round, RpsMove, RpsState};
use crate::games::simon::{SimonMove, SimonReport, SimonState, ROUND_GAP_MS};
use crate::games::tictactoe::{MoveReport, TicTacToeState};
use crate::games::GameEngine;

/// Identifies one of the six games.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameId {
    Guess,
    Memory,
    Rps,
    Quiz,
    TicTacToe,
    Simon,
}

impl GameId {
    /// All games, in menu order.
    pub const ALL: [GameId; 6] = [
        GameId::Guess,
        GameId::Memory,
        GameId::Rps,
        GameId::Quiz,
        GameId::TicTacToe,
        GameId::Simon,
    ];

    /// Display title.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            GameId::Guess => "Number Guesser",
            GameId::Memory => "Memory Match",
            GameId::Rps => "Rock Paper Scissors",
            GameId::Quiz => "Quick Quiz",
            GameId::TicTacToe => "Tic Tac Toe",
            GameId::Simon => "Color Simon",
        }
    }

    /// Menu-card blurb.
    #[must_use]
    pub fn blurb(self) -> &'static str {
        match self {
            GameId::Guess => "Can you guess the secret number between 1 and 100?",
            GameId::Memory => "Test your memory with this classic card matching game!",
            GameId::Rps => "Classic game of chance against the computer!",
            GameId::Quiz => "Test your knowledge with fun trivia questions!",
            GameId::TicTacToe => "The timeless classic! Can you beat the AI?",
            GameId::Simon => "Remember and repeat the color sequence!",
        }
    }
}

/// One user action, addressed to a specific engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HubAction {
    /// Raw guess text; parsed at this boundary.
    Guess(String),
    Flip(usize),
    Play(RpsMove),
    Answer(usize),
    Place(usize),
    SimonStart,
    SimonPress(u8),
}

impl HubAction {
    /// The engine this action is addressed to.
    #[must_use]
    pub fn target(&self) -> GameId {
        match self {
            HubAction::Guess(_) => GameId::Guess,
            HubAction::Flip(_) => GameId::Memory,
            HubAction::Play(_) => GameId::Rps,
            HubAction::Answer(_) => GameId::Quiz,
            HubAction::Place(_) => GameId::TicTacToe,
            HubAction::SimonStart | HubAction::SimonPress(_) => GameId::Simon,
        }
    }
}

/// What routing an action (or firing a timer) produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HubReport {
    /// No game selected.
    NoActiveGame,
    /// Action addressed to an engine that is not the active one.
    Ignored,
    /// Guess text failed to parse; state untouched.
    Rejected(GameError),
    /// Fired request's generation no longer matches; discarded.
    Stale,
    Guess(Feedback),
    Flip(FlipReport),
    Resolve(ResolveReport),
    Rps(Round),
    Quiz(AnswerReport),
    TicTacToe(MoveReport),
    Simon(SimonReport),
}

/// Everything that mutated a session, in order. Replaying a history against
/// a hub with the same seed reproduces the session exactly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HubEvent {
    Selected(GameId),
    Deselected,
    Action(HubAction),
    Fired(DeferredAction),
}

enum ActiveGame {
    Guess(GuessState),
    Memory(MemoryState),
    Rps(RpsState),
    Quiz(QuizState),
    TicTacToe(TicTacToeState),
    Simon(SimonState),
}

impl ActiveGame {
    fn id(&self) -> GameId {
        match self {
            ActiveGame::Guess(_) => GameId::Guess,
            ActiveGame::Memory(_) => GameId::Memory,
            ActiveGame::Rps(_) => GameId::Rps,
            ActiveGame::Quiz(_) => GameId::Quiz,
            ActiveGame::TicTacToe(_) => GameId::TicTacToe,
            ActiveGame::Simon(_) => GameId::Simon,
        }
    }

    fn is_terminal(&self) -> bool {
        match self {
            ActiveGame::Guess(state) => state.is_terminal(),
            ActiveGame::Memory(state) => state.is_terminal(),
            ActiveGame::Rps(state) => state.is_terminal(),
            ActiveGame::Quiz(state) => state.is_terminal(),
            ActiveGame::TicTacToe(state) => state.is_terminal(),
            ActiveGame::Simon(state) => state.is_terminal(),
        }
    }
}

/// The host dispatcher.
pub struct Hub {
    rng: GameRng,
    active: Option<ActiveGame>,
    generation: Generation,
    history: Vector<HubEvent>,
}

impl Hub {
    /// Create a hub with no active game.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
            active: None,
            generation: Generation::default(),
            history: Vector::new(),
        }
    }

    /// Rebuild a session by replaying its history against the same seed.
    #[must_use]
    pub fn replay(seed: u64, history: &Vector<HubEvent>) -> Self {
        let mut hub = Hub::new(seed);
        for event in history {
            match event {
                HubEvent::Selected(id) => {
                    hub.select_game(*id);
                }
                HubEvent::Deselected => hub.deselect_game(),
                HubEvent::Action(action) => {
                    hub.apply(action.clone());
                }
                HubEvent::Fired(action) => {
                    let request = DelayRequest {
                        generation: hub.generation,
                        delay_ms: 0,
                        action: *action,
                    };
                    hub.fire(request);
                }
            }
        }
        hub
    }

    /// Which game is active, if any.
    #[must_use]
    pub fn active(&self) -> Option<GameId> {
        self.active.as_ref().map(ActiveGame::id)
    }

    /// Current session token.
    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Whether the active game has reached a terminal state.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.active.as_ref().is_some_and(ActiveGame::is_terminal)
    }

    /// Everything applied so far, for replay.
    #[must_use]
    pub fn history(&self) -> &Vector<HubEvent> {
        &self.history
    }

    /// Activate a game, discarding any previous engine state.
    pub fn select_game(&mut self, id: GameId) -> Generation {
        debug!("selecting {:?} (was {:?})", id, self.active());
        self.generation.bump();
        self.active = Some(match id {
            GameId::Guess => ActiveGame::Guess(GuessState::new_game(&mut self.rng)),
            GameId::Memory => ActiveGame::Memory(MemoryState::new_game(&mut self.rng)),
            GameId::Rps => ActiveGame::Rps(RpsState::new_game(&mut self.rng)),
            GameId::Quiz => ActiveGame::Quiz(QuizState::new_game(&mut self.rng)),
            GameId::TicTacToe => ActiveGame::TicTacToe(TicTacToeState::new_game(&mut self.rng)),
            GameId::Simon => ActiveGame::Simon(SimonState::new_game(&mut self.rng)),
        });
        self.history.push_back(HubEvent::Selected(id));
        self.generation
    }

    /// Deactivate and discard the active game.
    pub fn deselect_game(&mut self) {
        if self.active.is_none() {
            return;
        }
        debug!("deselecting {:?}", self.active());
        self.generation.bump();
        self.active = None;
        self.history.push_back(HubEvent::Deselected);
    }

    /// Route a user action to the active engine.
    ///
    /// Returns the engine's report plus any pacing delays the host should
    /// schedule. Actions addressed to an inactive engine are ignored.
    pub fn apply(&mut self, action: HubAction) -> (HubReport, Vec<DelayRequest>) {
        let game = match self.active.as_mut() {
            Some(game) => game,
            None => return (HubReport::NoActiveGame, vec![]),
        };
        if game.id() != action.target() {
            trace!("ignoring {:?} while {:?} is active", action, game.id());
            return (HubReport::Ignored, vec![]);
        }

        trace!("applying {:?}", action);
        let generation = self.generation;
        let mut requests = Vec::new();
        let report = match (game, &action) {
            (ActiveGame::Guess(state), HubAction::Guess(text)) => match guess::parse_guess(text) {
                Ok(value) => HubReport::Guess(state.guess(value)),
                Err(err) => return (HubReport::Rejected(err), vec![]),
            },
            (ActiveGame::Memory(state), HubAction::Flip(index)) => {
                let report = state.flip(*index);
                if matches!(report, FlipReport::PairPending { .. }) {
                    requests.push(make_request(
                        generation,
                        RESOLVE_DELAY_MS,
                        DeferredAction::ResolveFlips,
                    ));
                }
                HubReport::Flip(report)
            }
            (ActiveGame::Rps(state), HubAction::Play(mv)) => {
                HubReport::Rps(state.play(*mv, &mut self.rng))
            }
            (ActiveGame::Quiz(state), HubAction::Answer(choice)) => {
                HubReport::Quiz(state.answer(*choice))
            }
            (ActiveGame::TicTacToe(state), HubAction::Place(cell)) => {
                HubReport::TicTacToe(state.place(*cell, &mut self.rng))
            }
            (ActiveGame::Simon(state), HubAction::SimonStart) => {
                let report = state.apply(SimonMove::Start, &mut self.rng);
                schedule_simon(generation, &report, &mut requests);
                HubReport::Simon(report)
            }
            (ActiveGame::Simon(state), HubAction::SimonPress(color)) => {
                let report = state.press(*color);
                schedule_simon(generation, &report, &mut requests);
                HubReport::Simon(report)
            }
            // target() matched above; any other pairing is unreachable.
            _ => return (HubReport::Ignored, vec![]),
        };

        self.history.push_back(HubEvent::Action(action));
        (report, requests)
    }

    /// Apply a due deferred transition. Requests whose generation no longer
    /// matches the current session are discarded.
    pub fn fire(&mut self, request: DelayRequest) -> (HubReport, Vec<DelayRequest>) {
        if request.generation != self.generation {
            debug!(
                "discarding stale {:?} from {:?} (now {:?})",
                request.action, request.generation, self.generation
            );
            return (HubReport::Stale, vec![]);
        }

        let game = match self.active.as_mut() {
            Some(game) => game,
            None => return (HubReport::NoActiveGame, vec![]),
        };

        let generation = self.generation;
        let mut requests = Vec::new();
        let report = match (game, request.action) {
            (ActiveGame::Memory(state), DeferredAction::ResolveFlips) => {
                HubReport::Resolve(state.resolve_flips())
            }
            (ActiveGame::Simon(state), DeferredAction::PresentationDone) => {
                HubReport::Simon(state.presentation_done())
            }
            (ActiveGame::Simon(state), DeferredAction::NextRound) => {
                let report = state.start_round(&mut self.rng);
                schedule_simon(generation, &report, &mut requests);
                HubReport::Simon(report)
            }
            _ => return (HubReport::Ignored, vec![]),
        };

        self.history.push_back(HubEvent::Fired(request.action));
        (report, requests)
    }

    /// Read access for hosts rendering the board.
    #[must_use]
    pub fn guess_state(&self) -> Option<&GuessState> {
        match self.active.as_ref() {
            Some(ActiveGame::Guess(state)) => Some(state),
            _ => None,
        }
    }

    #[must_use]
    pub fn memory_state(&self) -> Option<&MemoryState> {
        match self.active.as_ref() {
            Some(ActiveGame::Memory(state)) => Some(state),
            _ => None,
        }
    }

    #[must_use]
    pub fn rps_state(&self) -> Option<&RpsState> {
        match self.active.as_ref() {
            Some(ActiveGame::Rps(state)) => Some(state),
            _ => None,
        }
    }

    #[must_use]
    pub fn quiz_state(&self) -> Option<&QuizState> {
        match self.active.as_ref() {
            Some(ActiveGame::Quiz(state)) => Some(state),
            _ => None,
        }
    }

    #[must_use]
    pub fn tictactoe_state(&self) -> Option<&TicTacToeState> {
        match self.active.as_ref() {
            Some(ActiveGame::TicTacToe(state)) => Some(state),
            _ => None,
        }
    }

    #[must_use]
    pub fn simon_state(&self) -> Option<&SimonState> {
        match self.active.as_ref() {
            Some(ActiveGame::Simon(state)) => Some(state),
            _ => None,
        }
    }
}

fn make_request(generation: Generation, delay_ms: u32, action: DeferredAction) -> DelayRequest {
    DelayRequest {
        generation,
        delay_ms,
        action,
    }
}

fn schedule_simon(generation: Generation, report: &SimonReport, requests: &mut Vec<DelayRequest>) {
    match report {
        SimonReport::Started {
            presentation_ms, ..
        } => {
            requests.push(make_request(
                generation,
                *presentation_ms,
                DeferredAction::PresentationDone,
            ));
        }
        SimonReport::RoundComplete { .. } => {
            requests.push(make_request(generation, ROUND_GAP_MS, DeferredAction::NextRound));
        }
        _ => {}
    }
}
