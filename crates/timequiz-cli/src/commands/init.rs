//! The `timequiz init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create timequiz.toml
    if std::path::Path::new("timequiz.toml").exists() {
        println!("timequiz.toml already exists, skipping.");
    } else {
        std::fs::write("timequiz.toml", SAMPLE_CONFIG)?;
        println!("Created timequiz.toml");
    }

    // Create example question set
    std::fs::create_dir_all("questions")?;
    let example_path = std::path::Path::new("questions/example.toml");
    if example_path.exists() {
        println!("questions/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_QUESTIONS)?;
        println!("Created questions/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit questions/example.toml with your own questions");
    println!("  2. Run: timequiz validate --questions questions/example.toml");
    println!("  3. Run: timequiz play");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# timequiz configuration

# Seconds on the clock when the quiz starts.
time_limit = 75
# Seconds taken off for each wrong answer.
penalty = 10
# Refuse blank initials on the high score prompt.
require_name = false

questions = "questions/example.toml"
scores_file = "timequiz-scores.json"
"#;

const EXAMPLE_QUESTIONS: &str = r#"[quiz]
name = "Rust Warm-up"
description = "Answer before the clock runs out. Wrong answers cost ten seconds."

[[questions]]
prompt = "Which keyword declares a mutable binding?"
choices = ["var", "let mut", "mut let", "const"]
answer = 1

[[questions]]
prompt = "What does the `?` operator do with an `Err` value?"
choices = ["panics", "ignores it", "returns it from the function", "logs it"]
answer = 2

[[questions]]
prompt = "Which type owns a growable, heap-allocated string?"
choices = ["&str", "String", "char", "Box<str>"]
answer = 1
"#;
