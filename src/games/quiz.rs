//! Quick Quiz: a fixed ordered question bank, four options each.

use serde::{Deserialize, Serialize};

use crate::core::GameRng;

use super::GameEngine;

/// Options per question.
pub const OPTION_COUNT: usize = 4;

/// One multiple-choice question.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub prompt: String,
    pub options: [String; OPTION_COUNT],
    pub correct: usize,
}

impl Question {
    pub fn new(
        prompt: impl Into<String>,
        options: [&str; OPTION_COUNT],
        correct: usize,
    ) -> Self {
        assert!(correct < OPTION_COUNT, "correct index out of range");
        Self {
            prompt: prompt.into(),
            options: options.map(String::from),
            correct,
        }
    }
}

/// The reference three-question bank.
#[must_use]
pub fn default_bank() -> Vec<Question> {
    vec![
        Question::new("What is 5 + 7?", ["10", "12", "15", "11"], 1),
        Question::new("What color is the sky?", ["Green", "Blue", "Red", "Yellow"], 1),
        Question::new("How many days in a week?", ["5", "6", "7", "8"], 2),
    ]
}

/// What answering did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerReport {
    /// Quiz already finished.
    Ignored,
    /// Advanced to the next question.
    Advanced { correct: bool },
    /// That was the last question.
    Finished { correct: bool, score: u32, total: usize },
}

/// Quiz progress. `score <= current` always holds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizState {
    questions: Vec<Question>,
    current: usize,
    score: u32,
}

impl QuizState {
    /// Start a quiz over a custom bank.
    #[must_use]
    pub fn with_questions(questions: Vec<Question>) -> Self {
        Self {
            questions,
            current: 0,
            score: 0,
        }
    }

    /// The question awaiting an answer, if any.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    /// Index of the question awaiting an answer.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Whether every question has been answered.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.current >= self.questions.len()
    }

    /// Answer the current question. An out-of-range choice is scored as
    /// incorrect; the quiz always advances.
    pub fn answer(&mut self, choice: usize) -> AnswerReport {
        let question = match self.questions.get(self.current) {
            Some(q) => q,
            None => return AnswerReport::Ignored,
        };

        let correct = choice == question.correct;
        if correct {
            self.score += 1;
        }
        self.current += 1;

        if self.is_complete() {
            AnswerReport::Finished {
                correct,
                score: self.score,
                total: self.questions.len(),
            }
        } else {
            AnswerReport::Advanced { correct }
        }
    }
}

impl GameEngine for QuizState {
    type Move = usize;
    type Report = AnswerReport;

    fn new_game(_rng: &mut GameRng) -> Self {
        Self::with_questions(default_bank())
    }

    fn apply(&mut self, mv: usize, _rng: &mut GameRng) -> AnswerReport {
        self.answer(mv)
    }

    fn is_terminal(&self) -> bool {
        self.is_complete()
    }
}
