//! Quiz controller: the screen state machine.
//!
//! ```text
//! Intro ──start──▶ InQuiz ──expiry / last answer──▶ Outro ──name──▶ Leaderboard
//!   ▲  └────────────────view scores─────────────────────────────────▶ │
//!   └──────────────────────────────back───────────────────────────────┘
//! ```
//!
//! Every operation is guarded by the current screen, so a late tick or a
//! stray click after the quiz ended is a no-op rather than a corruption.

use crate::clock::{ClockState, ScoreClock, Tick};
use crate::engine::{Advance, QuizEngine};
use crate::error::QuizError;
use crate::leaderboard::{KeyValueStore, Leaderboard, ScoreRecord};
use crate::model::QuizSettings;
use crate::presenter::{Intent, Presenter, Screen};
use crate::question::parse_choice;

pub struct QuizController<P, S> {
    settings: QuizSettings,
    engine: QuizEngine,
    clock: ScoreClock,
    leaderboard: Leaderboard<S>,
    presenter: P,
    screen: Screen,
    quiz_over: bool,
    final_score: Option<i64>,
    scores: Option<Vec<ScoreRecord>>,
    session: u64,
}

impl<P: Presenter, S: KeyValueStore> QuizController<P, S> {
    /// Build a controller. Nothing is rendered until [`on_init`](Self::on_init).
    pub fn new(
        settings: QuizSettings,
        engine: QuizEngine,
        leaderboard: Leaderboard<S>,
        presenter: P,
    ) -> Result<Self, QuizError> {
        settings.validate()?;
        Ok(Self {
            settings,
            engine,
            clock: ScoreClock::new(),
            leaderboard,
            presenter,
            screen: Screen::Intro,
            quiz_over: false,
            final_score: None,
            scores: None,
            session: 0,
        })
    }

    /// Reset the score and show the intro screen.
    pub fn on_init(&mut self) {
        self.clock.stop();
        self.clock = ScoreClock::new();
        self.quiz_over = false;
        self.final_score = None;
        self.screen = Screen::Intro;
        self.presenter.render_intro();
    }

    pub fn start_quiz(&mut self) {
        if self.screen != Screen::Intro {
            tracing::debug!(screen = ?self.screen, "start ignored outside the intro");
            return;
        }

        self.clock.stop();
        self.session += 1;
        self.clock = ScoreClock::new();
        self.clock.start(self.settings.time_limit);
        self.quiz_over = false;
        self.final_score = None;
        self.screen = Screen::InQuiz;

        tracing::info!(
            session = self.session,
            questions = self.engine.len(),
            time_limit = self.settings.time_limit,
            "quiz started"
        );

        let total = self.engine.len();
        let first = self.engine.start();
        self.presenter.render_question(first, 0, total);
        self.presenter.render_score(self.clock.value());
    }

    /// Handle one clock period.
    pub fn on_tick(&mut self) {
        if self.screen != Screen::InQuiz {
            return;
        }

        match self.clock.tick() {
            Some(Tick::Running(value)) => self.presenter.render_score(value),
            Some(Tick::Expired(value)) => {
                self.presenter.render_score(value);
                tracing::info!(session = self.session, "time expired");
                self.end_quiz();
                return;
            }
            None => {}
        }

        if self.engine.is_complete() {
            self.end_quiz();
        }
    }

    /// Score the current question, then move on.
    ///
    /// `token` is the zero-based choice index as sent by the front end.
    /// Anything that does not parse, or is out of range, is a wrong answer.
    pub fn submit_answer(&mut self, token: &str) {
        if self.screen != Screen::InQuiz || self.quiz_over {
            tracing::debug!(screen = ?self.screen, "answer ignored outside the quiz");
            return;
        }

        let correct = parse_choice(token).is_some_and(|i| self.engine.check_answer(i));
        if !correct {
            if let Some(value) = self.clock.penalize(self.settings.penalty) {
                self.presenter.render_score(value);
            }
        }
        self.presenter.render_feedback(correct);

        let total = self.engine.len();
        match self.engine.advance() {
            Advance::Next(question) => {
                let question = question.clone();
                let index = self.engine.cursor();
                self.presenter.render_question(&question, index, total);
            }
            Advance::Complete => self.end_quiz(),
        }
    }

    /// Stop the clock and show the final score. Safe to call twice.
    pub fn end_quiz(&mut self) {
        if self.screen != Screen::InQuiz {
            return;
        }

        self.clock.stop();
        self.quiz_over = true;
        let final_score = self.clock.value();
        self.final_score = Some(final_score);
        self.screen = Screen::Outro;

        tracing::info!(session = self.session, final_score, "quiz over");
        self.presenter.render_outro(final_score);
    }

    /// Record the final score under `name` and show the leaderboard.
    ///
    /// With `require_name` set, a blank name is rejected with
    /// [`QuizError::InvalidName`] and the outro stays up. A store that cannot
    /// be written drops the score with a notice.
    pub fn submit_high_score(&mut self, name: &str) -> Result<(), QuizError> {
        if self.screen != Screen::Outro {
            tracing::debug!(screen = ?self.screen, "high score ignored outside the outro");
            return Ok(());
        }
        let Some(final_score) = self.final_score else {
            return Ok(());
        };

        if self.settings.require_name && name.trim().is_empty() {
            let err = QuizError::InvalidName;
            self.presenter.render_notice(&err.to_string());
            return Err(err);
        }

        let record = ScoreRecord::new(name, final_score).recorded_now();
        if let Err(e) = self.leaderboard.append(record) {
            tracing::warn!("dropping high score: {e}");
            self.presenter
                .render_notice(&format!("Your score could not be saved ({e})."));
        }

        self.show_leaderboard();
        Ok(())
    }

    pub fn show_leaderboard(&mut self) {
        if self.screen == Screen::InQuiz {
            tracing::debug!("leaderboard ignored during the quiz");
            return;
        }

        let records = match self.leaderboard.list() {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!("high scores unavailable: {e}");
                self.presenter.render_notice("High scores are unavailable.");
                Vec::new()
            }
        };

        self.screen = Screen::Leaderboard;
        self.presenter.render_leaderboard(&records);
        self.scores = Some(records);
    }

    /// Back from the leaderboard to a fresh intro.
    pub fn go_back(&mut self) {
        if self.screen != Screen::Leaderboard {
            return;
        }
        self.on_init();
    }

    /// Wipe the stored scores and stay on the (now empty) leaderboard.
    pub fn clear_high_scores(&mut self) {
        if self.screen != Screen::Leaderboard {
            return;
        }

        if let Err(e) = self.leaderboard.clear() {
            tracing::warn!("could not clear high scores: {e}");
            self.presenter
                .render_notice(&format!("High scores could not be cleared ({e})."));
            return;
        }

        tracing::info!("high scores cleared");
        self.scores = Some(Vec::new());
        self.presenter.render_leaderboard(&[]);
    }

    /// Route an intent to its handler.
    pub fn dispatch(&mut self, intent: Intent) {
        match intent {
            Intent::StartQuiz => self.start_quiz(),
            Intent::ChoiceSelected(token) => self.submit_answer(&token),
            Intent::SubmitName(name) => {
                if let Err(e) = self.submit_high_score(&name) {
                    tracing::debug!("name rejected: {e}");
                }
            }
            Intent::ViewLeaderboard => self.show_leaderboard(),
            Intent::GoBack => self.go_back(),
            Intent::ClearScores => self.clear_high_scores(),
        }
    }

    /// Stop any running clock, e.g. when the front end goes away.
    pub fn shutdown(&mut self) {
        self.clock.stop();
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Current score: the clock value during and after a quiz, the time
    /// limit before one starts.
    pub fn score(&self) -> i64 {
        match self.final_score {
            Some(score) => score,
            None if self.clock.state() != ClockState::Idle => self.clock.value(),
            None => self.settings.time_limit,
        }
    }

    pub fn final_score(&self) -> Option<i64> {
        self.final_score
    }

    pub fn is_quiz_over(&self) -> bool {
        self.quiz_over
    }

    pub fn is_clock_running(&self) -> bool {
        self.clock.is_running()
    }

    /// Increments each time a quiz starts. Drivers key their timers on it.
    pub fn session(&self) -> u64 {
        self.session
    }

    /// Records from the last leaderboard read; `None` if never shown.
    pub fn scores(&self) -> Option<&[ScoreRecord]> {
        self.scores.as_deref()
    }

    pub fn engine(&self) -> &QuizEngine {
        &self.engine
    }

    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn leaderboard(&self) -> &Leaderboard<S> {
        &self.leaderboard
    }
}
