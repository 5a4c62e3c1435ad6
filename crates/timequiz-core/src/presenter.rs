//! The boundary between the quiz and whatever draws it.
//!
//! The controller only ever talks to a [`Presenter`]; front ends only ever
//! send [`Intent`]s back.

use crate::leaderboard::ScoreRecord;
use crate::question::Question;

/// Which screen the controller is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Intro,
    InQuiz,
    Outro,
    Leaderboard,
}

/// A user action emitted by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    StartQuiz,
    /// Zero-based choice token as attached to the rendered choice.
    ChoiceSelected(String),
    SubmitName(String),
    ViewLeaderboard,
    GoBack,
    ClearScores,
}

/// Rendering callbacks invoked by the controller.
pub trait Presenter {
    fn render_intro(&mut self);

    /// `index` is zero-based; `total` is the number of questions.
    fn render_question(&mut self, question: &Question, index: usize, total: usize);

    fn render_feedback(&mut self, is_correct: bool);

    fn render_score(&mut self, value: i64);

    fn render_outro(&mut self, final_score: i64);

    /// An empty slice is the "no scores yet" state.
    fn render_leaderboard(&mut self, records: &[ScoreRecord]);

    /// A recoverable problem the player should know about.
    fn render_notice(&mut self, message: &str);
}

/// No-op presenter.
pub struct NoopPresenter;

impl Presenter for NoopPresenter {
    fn render_intro(&mut self) {}
    fn render_question(&mut self, _: &Question, _: usize, _: usize) {}
    fn render_feedback(&mut self, _: bool) {}
    fn render_score(&mut self, _: i64) {}
    fn render_outro(&mut self, _: i64) {}
    fn render_leaderboard(&mut self, _: &[ScoreRecord]) {}
    fn render_notice(&mut self, _: &str) {}
}

/// One call made on a [`RecordingPresenter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    Intro,
    Question {
        prompt: String,
        index: usize,
        total: usize,
    },
    Feedback(bool),
    Score(i64),
    Outro(i64),
    Leaderboard(Vec<ScoreRecord>),
    Notice(String),
}

/// Presenter that remembers every call, for driving the controller in tests
/// without a terminal.
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    pub calls: Vec<Rendered>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent score rendered, if any.
    pub fn last_score(&self) -> Option<i64> {
        self.calls.iter().rev().find_map(|c| match c {
            Rendered::Score(v) => Some(*v),
            _ => None,
        })
    }

    /// Every feedback rendered, in order.
    pub fn feedback(&self) -> Vec<bool> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Rendered::Feedback(ok) => Some(*ok),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, pred: impl Fn(&Rendered) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }
}

impl Presenter for RecordingPresenter {
    fn render_intro(&mut self) {
        self.calls.push(Rendered::Intro);
    }

    fn render_question(&mut self, question: &Question, index: usize, total: usize) {
        self.calls.push(Rendered::Question {
            prompt: question.prompt().to_string(),
            index,
            total,
        });
    }

    fn render_feedback(&mut self, is_correct: bool) {
        self.calls.push(Rendered::Feedback(is_correct));
    }

    fn render_score(&mut self, value: i64) {
        self.calls.push(Rendered::Score(value));
    }

    fn render_outro(&mut self, final_score: i64) {
        self.calls.push(Rendered::Outro(final_score));
    }

    fn render_leaderboard(&mut self, records: &[ScoreRecord]) {
        self.calls.push(Rendered::Leaderboard(records.to_vec()));
    }

    fn render_notice(&mut self, message: &str) {
        self.calls.push(Rendered::Notice(message.to_string()));
    }
}
