//! Property tests over the rule engines.

use proptest::prelude::*;

use game_hub::games::memory::{CARD_COUNT, PAIR_COUNT};
use game_hub::games::quiz::default_bank;
use game_hub::{
    Feedback, GameEngine, GameRng, GuessState, MemoryState, Outcome, QuizState, RpsMove,
};

proptest! {
    /// Binary search over the feedback always lands on the secret, in at
    /// most seven valid guesses, with `attempts` counting every one.
    #[test]
    fn guess_feedback_is_consistent(seed in any::<u64>()) {
        let mut rng = GameRng::new(seed);
        let mut state = GuessState::new_game(&mut rng);

        let (mut lo, mut hi) = (1u32, 100u32);
        let mut guesses = 0u32;
        loop {
            let mid = (lo + hi) / 2;
            guesses += 1;
            match state.guess(mid) {
                Feedback::Correct { attempts } => {
                    prop_assert_eq!(attempts, guesses);
                    break;
                }
                Feedback::TooLow => lo = mid + 1,
                Feedback::TooHigh => hi = mid - 1,
            }
            prop_assert!(lo <= hi, "feedback contradicted itself");
            prop_assert!(guesses <= 7, "binary search should finish in 7 guesses");
        }
        prop_assert_eq!(state.attempts(), guesses);
    }

    /// The beats-relation is a strict cycle: every non-tie has exactly one
    /// winner, and reversing the throws reverses the outcome.
    #[test]
    fn rps_outcome_antisymmetric(a in 0usize..3, b in 0usize..3) {
        let (a, b) = (RpsMove::ALL[a], RpsMove::ALL[b]);
        let forward = game_hub::games::rps::judge(a, b);
        let backward = game_hub::games::rps::judge(b, a);

        match forward {
            Outcome::Tie => {
                prop_assert_eq!(a, b);
                prop_assert_eq!(backward, Outcome::Tie);
            }
            Outcome::Win => prop_assert_eq!(backward, Outcome::Loss),
            Outcome::Loss => prop_assert_eq!(backward, Outcome::Win),
        }
    }

    /// Score never exceeds the number of questions answered, and the quiz
    /// is terminal exactly when the bank is exhausted.
    #[test]
    fn quiz_score_bounded_by_progress(choices in proptest::collection::vec(0usize..8, 0..10)) {
        let mut state = QuizState::with_questions(default_bank());
        let total = state.total();

        for &choice in &choices {
            state.answer(choice);
            prop_assert!(state.score() as usize <= state.current_index());
            prop_assert!(state.current_index() <= total);
        }

        prop_assert_eq!(state.is_terminal(), choices.len() >= total);
    }

    /// Under any flip sequence (resolving whenever a pair is pending), the
    /// board invariants hold: at most two cards face-up, face-up and
    /// matched sets disjoint, matched only growing and always even.
    #[test]
    fn memory_invariants_under_arbitrary_flips(
        seed in any::<u64>(),
        flips in proptest::collection::vec(0usize..CARD_COUNT + 2, 0..100),
    ) {
        let mut rng = GameRng::new(seed);
        let mut state = MemoryState::new_game(&mut rng);
        let mut matched_before = 0;

        for &index in &flips {
            state.flip(index);

            prop_assert!(state.flipped().len() <= 2);
            for &f in state.flipped() {
                prop_assert!(!state.is_matched(f));
            }

            if state.pair_pending() {
                state.resolve_flips();
            }

            prop_assert!(state.matched_count() % 2 == 0);
            prop_assert!(state.matched_count() >= matched_before);
            prop_assert!(state.matched_count() <= CARD_COUNT);
            matched_before = state.matched_count();
        }
    }

    /// Every shuffle deals each face value exactly twice.
    #[test]
    fn memory_deal_is_paired(seed in any::<u64>()) {
        let mut rng = GameRng::new(seed);
        let state = MemoryState::new_game(&mut rng);

        for value in 0..PAIR_COUNT as u8 {
            let count = state.cards().iter().filter(|&&c| c == value).count();
            prop_assert_eq!(count, 2);
        }
    }
}
