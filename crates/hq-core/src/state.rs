//! Quiz progression state.
//!
//! `QuizState` tracks how far the player got, the fragments collected so far,
//! and the zodiac/ascendant drawn for this run. `answers().len()` always
//! equals `current_index()`: answering appends and advances in one step.

use crate::content::Sign;
use crate::fate::Fate;

/// Where the quiz is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    /// No questions loaded yet (or the load failed).
    Loading,
    /// At least one question remains.
    InProgress,
    /// Every question has been answered.
    Finished,
}

impl QuizPhase {
    /// Derive the phase from the answered count and the question count.
    pub fn of(current_index: usize, question_count: usize) -> Self {
        if question_count == 0 {
            QuizPhase::Loading
        } else if current_index >= question_count {
            QuizPhase::Finished
        } else {
            QuizPhase::InProgress
        }
    }
}

/// Progress through one quiz run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizState {
    current_index: usize,
    answers: Vec<String>,
    fate: Fate,
    draws: u64,
}

impl QuizState {
    /// A fresh state: no answers, no signs drawn.
    pub fn new() -> Self {
        Self::default()
    }

    /// A state that has already collected `answers` under the given fate.
    pub fn from_parts(answers: Vec<String>, fate: Fate) -> Self {
        Self {
            current_index: answers.len(),
            answers,
            fate,
            draws: 0,
        }
    }

    /// Index of the next question to answer.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Collected horoscope fragments in answer order.
    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    /// The drawn zodiac.
    pub fn zodiac(&self) -> Option<&Sign> {
        self.fate.zodiac.as_ref()
    }

    /// The drawn ascendant.
    pub fn ascendant(&self) -> Option<&Sign> {
        self.fate.ascendant.as_ref()
    }

    /// How many times a fate has been drawn for this state.
    pub fn draws(&self) -> u64 {
        self.draws
    }

    /// Record an answer and move to the next question.
    ///
    /// No-op returning `false` when `question_count` questions are already
    /// answered.
    pub fn advance(&mut self, fragment: String, question_count: usize) -> bool {
        if self.current_index >= question_count {
            return false;
        }
        self.answers.push(fragment);
        self.current_index += 1;
        true
    }

    /// Go back to the first question under a freshly drawn fate.
    pub fn reset(&mut self, fate: Fate) {
        self.current_index = 0;
        self.answers.clear();
        self.fate = fate;
        self.draws += 1;
    }
}
