//! Single-selection quiz state with lock-and-reveal feedback.

use crate::catalog::Quiz;
use std::fmt;

/// Outcome revealed once an answer is recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizFeedback {
    Correct,
    Incorrect { correct_answer: String },
}

impl fmt::Display for QuizFeedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizFeedback::Correct => write!(f, "Correct!"),
            QuizFeedback::Incorrect { correct_answer } => {
                write!(f, "Incorrect. Correct answer: {}", correct_answer)
            }
        }
    }
}

/// Answer tracking for one lesson's quiz. The first selection locks in;
/// everything after it is ignored until the lesson session resets.
#[derive(Debug, Clone, Default)]
pub struct QuizAnswerState {
    selected: Option<usize>,
}

impl QuizAnswerState {
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_locked(&self) -> bool {
        self.selected.is_some()
    }

    /// Record the first answer; later selections are no-ops.
    pub fn select(&mut self, index: usize) {
        if self.selected.is_none() {
            self.selected = Some(index);
        }
    }

    /// Feedback for the recorded answer, if one exists.
    pub fn feedback(&self, quiz: &Quiz) -> Option<QuizFeedback> {
        let selected = self.selected?;
        if selected == quiz.correct_answer_index {
            Some(QuizFeedback::Correct)
        } else {
            Some(QuizFeedback::Incorrect {
                correct_answer: quiz.options[quiz.correct_answer_index].clone(),
            })
        }
    }

    pub fn reset(&mut self) {
        self.selected = None;
    }
}
