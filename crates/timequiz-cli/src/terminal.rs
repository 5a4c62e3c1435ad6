//! Line-oriented terminal front end.
//!
//! [`TerminalPresenter`] draws each screen as plain text; [`TerminalInput`]
//! turns typed lines into intents according to the screen on display.

use std::fmt::Display;
use std::io::Write;

use async_trait::async_trait;
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, ContentArrangement, Table};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

use timequiz_core::driver::IntentSource;
use timequiz_core::{Intent, Presenter, Question, ScoreRecord, Screen};

/// Renders quiz screens as text on any writer (stdout in the binary).
pub struct TerminalPresenter<W: Write> {
    out: W,
    title: String,
    description: String,
    last_score: Option<i64>,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            out,
            title: title.into(),
            description: description.into(),
            last_score: None,
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: impl Display) {
        if let Err(e) = writeln!(self.out, "{text}") {
            tracing::debug!("terminal write failed: {e}");
        }
    }

    fn prompt(&mut self, text: impl Display) {
        let result = write!(self.out, "{text}").and_then(|_| self.out.flush());
        if let Err(e) = result {
            tracing::debug!("terminal write failed: {e}");
        }
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn render_intro(&mut self) {
        self.last_score = None;
        let rule = "=".repeat(self.title.chars().count());
        let (title, description) = (self.title.clone(), self.description.clone());
        self.line("");
        self.line(&title);
        self.line(rule);
        if !description.is_empty() {
            self.line(description);
        }
        self.line("");
        self.prompt("[s] start quiz   [h] high scores   [q] quit > ");
    }

    fn render_question(&mut self, question: &Question, index: usize, total: usize) {
        self.line("");
        self.line(format!("Question {}/{}: {}", index + 1, total, question.prompt()));
        for (i, choice) in question.choices().iter().enumerate() {
            self.line(format!("  {}. {}", i + 1, choice));
        }
        self.prompt(format!("Your answer (1-{}) > ", question.choices().len()));
    }

    fn render_feedback(&mut self, is_correct: bool) {
        if is_correct {
            self.line("Correct!");
        } else {
            self.line("Wrong!");
        }
    }

    /// Prints only milestones and penalties; a line per second would bury
    /// the question.
    fn render_score(&mut self, value: i64) {
        let penalized = self.last_score.is_some_and(|last| last - value > 1);
        let first = self.last_score.is_none();
        self.last_score = Some(value);

        if first || penalized || value % 10 == 0 || value <= 5 {
            self.line(format!("[time: {value}]"));
        }
    }

    fn render_outro(&mut self, final_score: i64) {
        self.line("");
        self.line("All done!");
        self.line(format!("Your final score is {final_score}."));
        self.prompt("Enter your initials > ");
    }

    fn render_leaderboard(&mut self, records: &[ScoreRecord]) {
        self.line("");
        self.line("High Scores");
        if records.is_empty() {
            self.line("No high scores yet.");
        } else {
            self.line(leaderboard_table(records));
        }
        self.prompt("[b] back   [c] clear high scores   [q] quit > ");
    }

    fn render_notice(&mut self, message: &str) {
        self.line(format!("! {message}"));
    }
}

/// Tabulate records in the order given.
pub fn leaderboard_table(records: &[ScoreRecord]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "Name", "Score", "Date"]);

    for (i, record) in records.iter().enumerate() {
        let date = record
            .recorded_at
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default();
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&record.name),
            Cell::new(record.score).set_alignment(CellAlignment::Right),
            Cell::new(date),
        ]);
    }

    table
}

/// What a typed line means on a given screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Intent(Intent),
    Quit,
    Invalid(&'static str),
}

/// Interpret one line of input for `screen`.
///
/// Choices are shown numbered from 1; they are sent to the controller as
/// zero-based tokens. Letters work too (`a` is the first choice).
pub fn parse_line(screen: Screen, line: &str) -> Command {
    let input = line.trim();
    let lower = input.to_ascii_lowercase();

    match screen {
        Screen::Intro => match lower.as_str() {
            "" | "s" | "start" => Command::Intent(Intent::StartQuiz),
            "h" | "scores" | "highscores" => Command::Intent(Intent::ViewLeaderboard),
            "q" | "quit" | "exit" => Command::Quit,
            _ => Command::Invalid("Type s to start, h for high scores or q to quit."),
        },
        Screen::InQuiz => {
            if let Ok(n) = lower.parse::<usize>() {
                return match n.checked_sub(1) {
                    Some(index) => Command::Intent(Intent::ChoiceSelected(index.to_string())),
                    None => Command::Invalid("Choices start at 1."),
                };
            }
            let mut chars = lower.chars();
            match (chars.next(), chars.next()) {
                (Some(c @ 'a'..='z'), None) => {
                    let index = (c as u8 - b'a') as usize;
                    Command::Intent(Intent::ChoiceSelected(index.to_string()))
                }
                _ => Command::Invalid("Type the number of your answer."),
            }
        }
        Screen::Outro => Command::Intent(Intent::SubmitName(input.to_string())),
        Screen::Leaderboard => match lower.as_str() {
            "" | "b" | "back" => Command::Intent(Intent::GoBack),
            "c" | "clear" => Command::Intent(Intent::ClearScores),
            "q" | "quit" | "exit" => Command::Quit,
            _ => Command::Invalid("Type b to go back, c to clear or q to quit."),
        },
    }
}

/// Reads intents from lines of text (stdin in the binary).
pub struct TerminalInput<R> {
    lines: Lines<R>,
}

impl<R: AsyncBufRead + Unpin + Send> TerminalInput<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
        }
    }
}

#[async_trait]
impl<R: AsyncBufRead + Unpin + Send> IntentSource for TerminalInput<R> {
    async fn next_intent(&mut self, screen: Screen) -> Option<Intent> {
        loop {
            let line = match self.lines.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => return None,
                Err(e) => {
                    tracing::warn!("failed to read input: {e}");
                    return None;
                }
            };

            match parse_line(screen, &line) {
                Command::Intent(intent) => return Some(intent),
                Command::Quit => return None,
                Command::Invalid(hint) => {
                    println!("{hint}");
                }
            }
        }
    }
}
