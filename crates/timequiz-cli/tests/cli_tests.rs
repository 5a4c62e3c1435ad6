//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn timequiz(dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("timequiz").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env_remove("TIMEQUIZ_SCORES_FILE");
    cmd
}

const SMALL_SET: &str = r#"
[quiz]
name = "Capitals"

[[questions]]
prompt = "Capital of France?"
choices = ["Berlin", "Paris", "Rome"]
answer = 1

[[questions]]
prompt = "Capital of Japan?"
choices = ["Tokyo", "Kyoto"]
answer = 0
"#;

/// Start, answer the built-in questions correctly, save as AAA, quit.
const PERFECT_RUN: &str = "s\n3\n3\n4\n3\n4\nAAA\nq\n";

#[test]
fn validate_question_set() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("capitals.toml"), SMALL_SET).unwrap();

    timequiz(&dir)
        .args(["validate", "--questions", "capitals.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Capitals (2 questions)"))
        .stdout(predicate::str::contains("Question set valid."));
}

#[test]
fn validate_reports_warnings() {
    let dir = TempDir::new().unwrap();
    let content = r#"
[quiz]
name = "Dupes"

[[questions]]
prompt = "Same?"
choices = ["yes", "yes"]
answer = 0
"#;
    std::fs::write(dir.path().join("dupes.toml"), content).unwrap();

    timequiz(&dir)
        .args(["validate", "--questions", "dupes.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("WARNING"))
        .stdout(predicate::str::contains("warning(s) found"));
}

#[test]
fn validate_nonexistent_file() {
    let dir = TempDir::new().unwrap();
    timequiz(&dir)
        .args(["validate", "--questions", "nope.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn validate_rejects_out_of_range_answer() {
    let dir = TempDir::new().unwrap();
    let content = r#"
[quiz]
name = "Broken"

[[questions]]
prompt = "Pick"
choices = ["a", "b"]
answer = 2
"#;
    std::fs::write(dir.path().join("bad.toml"), content).unwrap();

    timequiz(&dir)
        .args(["validate", "--questions", "bad.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("question 1"));
}

#[test]
fn init_creates_files_once() {
    let dir = TempDir::new().unwrap();

    timequiz(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created timequiz.toml"))
        .stdout(predicate::str::contains("Created questions/example.toml"));

    assert!(dir.path().join("timequiz.toml").exists());
    assert!(dir.path().join("questions/example.toml").exists());

    timequiz(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists, skipping"));

    timequiz(&dir)
        .args(["validate", "--questions", "questions/example.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Question set valid."));
}

#[test]
fn scores_empty_by_default() {
    let dir = TempDir::new().unwrap();
    timequiz(&dir)
        .args(["scores", "--scores-file", "scores.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No high scores yet."));
}

#[test]
fn play_saves_score_then_clear() {
    let dir = TempDir::new().unwrap();

    timequiz(&dir)
        .args(["play", "--scores-file", "scores.json"])
        .write_stdin(PERFECT_RUN)
        .assert()
        .success()
        .stdout(predicate::str::contains("Coding Quiz Challenge"))
        .stdout(predicate::str::contains("Correct!"))
        .stdout(predicate::str::contains("All done!"))
        .stdout(predicate::str::contains("AAA"))
        .stdout(predicate::str::contains("Wrong!").not());

    timequiz(&dir)
        .args(["scores", "--scores-file", "scores.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("AAA"));

    timequiz(&dir)
        .args(["clear-scores", "--scores-file", "scores.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("High scores cleared."));

    timequiz(&dir)
        .args(["scores", "--scores-file", "scores.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No high scores yet."));
}

#[test]
fn clear_scores_fails_when_store_cannot_be_opened() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("blocker"), "not a directory").unwrap();

    timequiz(&dir)
        .args(["clear-scores", "--scores-file", "blocker/scores.json"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("High scores cleared.").not())
        .stderr(predicate::str::contains("cannot open high scores"));
}

#[test]
fn play_custom_questions_and_json_scores() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("capitals.toml"), SMALL_SET).unwrap();

    timequiz(&dir)
        .args(["play", "--questions", "capitals.toml", "--time-limit", "40"])
        .env("TIMEQUIZ_SCORES_FILE", dir.path().join("env-scores.json"))
        .write_stdin("s\n1\n1\nBOB\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Capital of France?"))
        .stdout(predicate::str::contains("Wrong!"));

    let output = timequiz(&dir)
        .args(["scores", "--json"])
        .env("TIMEQUIZ_SCORES_FILE", dir.path().join("env-scores.json"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let records: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["name"], "BOB");
    assert!(records[0]["score"].as_i64().unwrap() <= 30);
    assert!(records[0]["recorded_at"].is_string());
}

#[test]
fn play_uses_config_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("capitals.toml"), SMALL_SET).unwrap();
    std::fs::write(
        dir.path().join("timequiz.toml"),
        "questions = \"capitals.toml\"\nscores_file = \"cfg-scores.json\"\n",
    )
    .unwrap();

    timequiz(&dir)
        .arg("play")
        .write_stdin("s\n2\n1\nCFG\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Capitals"));

    assert!(dir.path().join("cfg-scores.json").exists());
    timequiz(&dir)
        .args(["scores", "--ranked"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CFG"));
}

#[test]
fn play_ends_cleanly_on_eof() {
    let dir = TempDir::new().unwrap();
    timequiz(&dir)
        .args(["play", "--scores-file", "scores.json"])
        .write_stdin("s\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bye!"));

    assert!(!dir.path().join("scores.json").exists());
}

#[test]
fn explicit_config_must_exist() {
    let dir = TempDir::new().unwrap();
    timequiz(&dir)
        .args(["scores", "--config", "missing.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}
