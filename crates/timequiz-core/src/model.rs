//! Question sets and quiz settings.
//!
//! A question set is static configuration data: it is loaded once (from the
//! built-in list or a TOML file) and never mutated during a session.

use serde::{Deserialize, Serialize};

use crate::error::QuizError;
use crate::question::Question;

/// Default number of seconds on the clock at quiz start.
pub const DEFAULT_TIME_LIMIT: i64 = 75;

/// Default number of seconds taken off the clock per wrong answer.
pub const DEFAULT_PENALTY: i64 = 10;

/// A named, ordered collection of questions.
#[derive(Debug, Clone)]
pub struct QuestionSet {
    /// Human-readable name shown on the intro screen.
    pub name: String,
    /// Short description shown under the name.
    pub description: String,
    /// The questions, in the order they are asked.
    pub questions: Vec<Question>,
}

impl QuestionSet {
    /// The five coding questions the quiz ships with.
    pub fn builtin() -> Self {
        let raw: [(&str, usize, [&str; 4]); 5] = [
            (
                "Commonly used data types DO NOT include ____.",
                2,
                ["strings", "booleans", "alerts", "numbers"],
            ),
            (
                "The condition in an if / else statement is enclosed within ____.",
                2,
                ["quotes", "curly brackets", "parentheses", "square brackets"],
            ),
            (
                "Arrays in Javascript can be used to store ____.",
                3,
                [
                    "numbers and strings",
                    "other arrays",
                    "booleans",
                    "all of the above",
                ],
            ),
            (
                "String values must be enclosed within ____ when being assigned to variables.",
                2,
                ["commas", "curly brackets", "quotes", "parentheses"],
            ),
            (
                "A very useful tool used during development and debugging for printing content to the debugger is:",
                3,
                ["JavaScript", "terminal/bash", "for loops", "console.log()"],
            ),
        ];

        let questions = raw
            .into_iter()
            .filter_map(|(prompt, answer, choices)| {
                Question::new(prompt, answer, choices.map(String::from).to_vec()).ok()
            })
            .collect();

        Self {
            name: "Coding Quiz Challenge".into(),
            description: "Try to answer the following code-related questions within the time \
                          limit. Keep in mind that incorrect answers will penalize your \
                          score/time by ten seconds!"
                .into(),
            questions,
        }
    }
}

/// Tunables for a quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSettings {
    /// Starting clock value, also the score before the quiz begins.
    pub time_limit: i64,
    /// Amount subtracted for each wrong answer.
    pub penalty: i64,
    /// Reject blank names when submitting a high score.
    pub require_name: bool,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            time_limit: DEFAULT_TIME_LIMIT,
            penalty: DEFAULT_PENALTY,
            require_name: false,
        }
    }
}

impl QuizSettings {
    /// Check that the settings describe a playable quiz.
    pub fn validate(&self) -> Result<(), QuizError> {
        if self.time_limit <= 0 {
            return Err(QuizError::InvalidSettings(format!(
                "time_limit must be positive, got {}",
                self.time_limit
            )));
        }
        if self.penalty < 0 {
            return Err(QuizError::InvalidSettings(format!(
                "penalty must not be negative, got {}",
                self.penalty
            )));
        }
        Ok(())
    }
}
