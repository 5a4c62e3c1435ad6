//! The `timequiz validate` command.

use std::path::PathBuf;

use anyhow::Result;

use timequiz_core::parser::{parse_question_set, validate_question_set};

pub fn execute(questions_path: PathBuf) -> Result<()> {
    let set = parse_question_set(&questions_path)?;
    println!("Question set: {} ({} questions)", set.name, set.questions.len());

    let warnings = validate_question_set(&set);
    for w in &warnings {
        let prefix = w
            .question
            .map(|n| format!("  [question {n}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Question set valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
