//! TOML question set parser.
//!
//! Loads question sets from TOML files and validates them.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::QuestionSet;
use crate::question::Question;

/// Intermediate TOML structure for parsing question set files.
#[derive(Debug, Deserialize)]
struct TomlQuestionFile {
    quiz: TomlQuizHeader,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

#[derive(Debug, Deserialize)]
struct TomlQuizHeader {
    name: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    prompt: String,
    choices: Vec<String>,
    answer: usize,
}

/// Parse a single TOML file into a `QuestionSet`.
pub fn parse_question_set(path: &Path) -> Result<QuestionSet> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read question set file: {}", path.display()))?;

    parse_question_set_str(&content, path)
}

/// Parse a TOML string into a `QuestionSet` (useful for testing).
pub fn parse_question_set_str(content: &str, source_path: &Path) -> Result<QuestionSet> {
    let parsed: TomlQuestionFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    if parsed.questions.is_empty() {
        anyhow::bail!("{} defines no questions", source_path.display());
    }

    let questions = parsed
        .questions
        .into_iter()
        .enumerate()
        .map(|(i, q)| {
            Question::new(q.prompt, q.answer, q.choices)
                .with_context(|| format!("question {} in {}", i + 1, source_path.display()))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(QuestionSet {
        name: parsed.quiz.name,
        description: parsed.quiz.description,
        questions,
    })
}

/// A warning from question set validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// One-based question number (if applicable).
    pub question: Option<usize>,
    /// Warning message.
    pub message: String,
}

/// Validate a question set for common authoring mistakes.
///
/// Hard invariants (answer index in range, enough choices) are enforced at
/// parse time; these are the soft ones.
pub fn validate_question_set(set: &QuestionSet) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    let mut seen_prompts = HashSet::new();
    for (i, q) in set.questions.iter().enumerate() {
        let number = Some(i + 1);

        if q.prompt().trim().is_empty() {
            warnings.push(ValidationWarning {
                question: number,
                message: "prompt is empty".into(),
            });
        } else if !seen_prompts.insert(q.prompt().trim()) {
            warnings.push(ValidationWarning {
                question: number,
                message: format!("duplicate prompt: {}", q.prompt().trim()),
            });
        }

        let mut seen_choices = HashSet::new();
        for choice in q.choices() {
            if choice.trim().is_empty() {
                warnings.push(ValidationWarning {
                    question: number,
                    message: "blank choice".into(),
                });
            } else if !seen_choices.insert(choice.trim()) {
                warnings.push(ValidationWarning {
                    question: number,
                    message: format!("duplicate choice: {}", choice.trim()),
                });
            }
        }
    }

    if set.name.trim().is_empty() {
        warnings.push(ValidationWarning {
            question: None,
            message: "quiz name is empty".into(),
        });
    }

    warnings
}
