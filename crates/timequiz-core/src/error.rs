//! Quiz error types.
//!
//! Every failure in this crate is local and recoverable. The controller
//! turns storage and name problems into notices on the presentation layer
//! instead of aborting the session.

use thiserror::Error;

/// Errors that can occur while running a quiz session.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    /// The current question was requested after the quiz completed.
    #[error("no questions left: the quiz has already completed")]
    OutOfQuestions,

    /// A quiz was built from an empty question list.
    #[error("a quiz needs at least one question")]
    EmptyQuiz,

    /// A question broke its construction invariants.
    #[error("invalid question {prompt:?}: {reason}")]
    InvalidQuestion { prompt: String, reason: String },

    /// Quiz settings that cannot produce a playable session.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// The backing key-value store could not be read or written.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),

    /// A blank name was submitted while names are required.
    #[error("please enter your initials")]
    InvalidName,
}

impl QuizError {
    /// Returns `true` if the error came from the persistence layer.
    pub fn is_storage(&self) -> bool {
        matches!(self, QuizError::StorageUnavailable(_))
    }
}
