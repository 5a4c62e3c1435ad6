//! Question data model.
//!
//! A [`Question`] is pure data: it never knows how it is displayed. Choice
//! positions are their identity for the lifetime of the question.

use crate::error::QuizError;

/// Minimum number of choices a question must offer.
pub const MIN_CHOICES: usize = 2;

/// A single multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    choices: Vec<String>,
    answer_index: usize,
}

impl Question {
    /// Build a question, rejecting one whose answer index does not point at
    /// one of its choices.
    pub fn new(
        prompt: impl Into<String>,
        answer_index: usize,
        choices: Vec<String>,
    ) -> Result<Self, QuizError> {
        let prompt = prompt.into();

        if choices.len() < MIN_CHOICES {
            return Err(QuizError::InvalidQuestion {
                prompt,
                reason: format!(
                    "needs at least {MIN_CHOICES} choices, got {}",
                    choices.len()
                ),
            });
        }

        if answer_index >= choices.len() {
            return Err(QuizError::InvalidQuestion {
                prompt,
                reason: format!(
                    "answer index {answer_index} out of range for {} choices",
                    choices.len()
                ),
            });
        }

        Ok(Self {
            prompt,
            choices,
            answer_index,
        })
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    pub fn answer_index(&self) -> usize {
        self.answer_index
    }

    /// Returns `true` if `choice` is the correct answer.
    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.answer_index
    }
}

/// Parse a choice token coming from a front end into a zero-based index.
///
/// Tokens are trimmed; anything that is not a plain non-negative integer
/// yields `None`, which callers treat as a wrong answer.
pub fn parse_choice(token: &str) -> Option<usize> {
    token.trim().parse::<usize>().ok()
}
