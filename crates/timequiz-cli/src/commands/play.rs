//! The `timequiz play` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tokio::io::BufReader;

use timequiz_core::driver;
use timequiz_core::engine::QuizEngine;
use timequiz_core::parser::parse_question_set;
use timequiz_core::{QuestionSet, QuizController};

use crate::terminal::{TerminalInput, TerminalPresenter};

pub async fn execute(
    config_path: Option<PathBuf>,
    questions: Option<PathBuf>,
    time_limit: Option<i64>,
    scores_file: Option<PathBuf>,
) -> Result<()> {
    let mut config = super::resolve_config(config_path, scores_file)?;
    if let Some(limit) = time_limit {
        config.time_limit = limit;
    }

    let set = match questions.or_else(|| config.questions.clone()) {
        Some(path) => parse_question_set(&path)?,
        None => QuestionSet::builtin(),
    };
    tracing::info!(quiz = %set.name, questions = set.questions.len(), "loaded question set");

    let engine = QuizEngine::new(set.questions).context("cannot start quiz")?;
    let leaderboard = super::open_leaderboard(&config);
    let presenter = TerminalPresenter::new(std::io::stdout(), set.name, set.description);

    let mut controller = QuizController::new(config.settings(), engine, leaderboard, presenter)
        .context("invalid quiz settings")?;
    controller.on_init();

    let mut input = TerminalInput::new(BufReader::new(tokio::io::stdin()));
    driver::run(&mut controller, &mut input, config.tick()).await;

    println!();
    println!("Bye!");
    Ok(())
}
