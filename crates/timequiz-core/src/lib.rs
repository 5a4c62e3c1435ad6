//! timequiz-core — Quiz engine, score clock, leaderboard and controller.
//!
//! This crate holds everything that decides what happens in a quiz session.
//! Drawing screens and persisting to disk are left to the crates that
//! implement [`presenter::Presenter`] and [`leaderboard::KeyValueStore`].

pub mod clock;
pub mod controller;
pub mod driver;
pub mod engine;
pub mod error;
pub mod leaderboard;
pub mod model;
pub mod parser;
pub mod presenter;
pub mod question;

pub use controller::QuizController;
pub use error::QuizError;
pub use leaderboard::{KeyValueStore, Leaderboard, MemoryStore, ScoreRecord};
pub use model::{QuestionSet, QuizSettings};
pub use presenter::{Intent, Presenter, Screen};
pub use question::Question;
