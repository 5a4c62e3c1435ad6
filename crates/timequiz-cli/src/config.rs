//! Configuration loading.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use timequiz_core::model::{DEFAULT_PENALTY, DEFAULT_TIME_LIMIT};
use timequiz_core::QuizSettings;

/// Environment variable that overrides `scores_file`.
pub const SCORES_FILE_ENV: &str = "TIMEQUIZ_SCORES_FILE";

/// Top-level timequiz configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimequizConfig {
    /// Seconds on the clock at quiz start.
    #[serde(default = "default_time_limit")]
    pub time_limit: i64,
    /// Seconds taken off per wrong answer.
    #[serde(default = "default_penalty")]
    pub penalty: i64,
    /// Clock period in milliseconds.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    /// Refuse blank names on the high score prompt.
    #[serde(default)]
    pub require_name: bool,
    /// Question set to play instead of the built-in one.
    #[serde(default)]
    pub questions: Option<PathBuf>,
    /// Where high scores are kept.
    #[serde(default = "default_scores_file")]
    pub scores_file: PathBuf,
}

fn default_time_limit() -> i64 {
    DEFAULT_TIME_LIMIT
}
fn default_penalty() -> i64 {
    DEFAULT_PENALTY
}
fn default_tick_ms() -> u64 {
    1000
}
fn default_scores_file() -> PathBuf {
    match dirs_path() {
        Some(dir) => dir.join("scores.json"),
        None => PathBuf::from("timequiz-scores.json"),
    }
}

impl Default for TimequizConfig {
    fn default() -> Self {
        Self {
            time_limit: default_time_limit(),
            penalty: default_penalty(),
            tick_ms: default_tick_ms(),
            require_name: false,
            questions: None,
            scores_file: default_scores_file(),
        }
    }
}

impl TimequizConfig {
    pub fn settings(&self) -> QuizSettings {
        QuizSettings {
            time_limit: self.time_limit,
            penalty: self.penalty,
            require_name: self.require_name,
        }
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }

    /// Make relative file paths relative to `base`, the config file's directory.
    fn resolve_paths(&mut self, base: &Path) {
        if let Some(questions) = &self.questions {
            if questions.is_relative() {
                self.questions = Some(base.join(questions));
            }
        }
        if self.scores_file.is_relative() {
            self.scores_file = base.join(&self.scores_file);
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `timequiz.toml` in the current directory
/// 2. `~/.config/timequiz/config.toml`
///
/// Relative `questions` and `scores_file` paths in a config file are taken
/// relative to that file. `TIMEQUIZ_SCORES_FILE` overrides `scores_file`
/// from any source.
pub fn load_config_from(path: Option<&Path>) -> Result<TimequizConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("timequiz.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            if global.exists() {
                Some(global)
            } else {
                None
            }
        } else {
            None
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let mut config = toml::from_str::<TimequizConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            if let Some(base) = path.parent() {
                config.resolve_paths(base);
            }
            tracing::debug!(path = %path.display(), "loaded config");
            config
        }
        None => TimequizConfig::default(),
    };

    if let Ok(file) = std::env::var(SCORES_FILE_ENV) {
        if !file.is_empty() {
            config.scores_file = PathBuf::from(file);
        }
    }

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("timequiz"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = TimequizConfig::default();
        assert_eq!(config.time_limit, 75);
        assert_eq!(config.penalty, 10);
        assert_eq!(config.tick(), Duration::from_secs(1));
        assert!(config.questions.is_none());
        assert!(config.scores_file.ends_with("scores.json"));
    }

    #[test]
    fn parse_partial_config() {
        let toml_str = r#"
time_limit = 30
require_name = true
questions = "questions/rust.toml"
"#;
        let config: TimequizConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.time_limit, 30);
        assert_eq!(config.penalty, 10);
        assert!(config.require_name);
        assert_eq!(
            config.questions.as_deref(),
            Some(Path::new("questions/rust.toml"))
        );

        let settings = config.settings();
        assert_eq!(settings.time_limit, 30);
        assert!(settings.require_name);
    }

    #[test]
    fn explicit_path_must_exist() {
        let err = load_config_from(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("timequiz.toml");
        std::fs::write(&path, "penalty = 5\ntick_ms = 250\n").unwrap();

        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.penalty, 5);
        assert_eq!(config.tick(), Duration::from_millis(250));
    }

    #[test]
    fn rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "time_limit = \"soon\"").unwrap();

        let err = load_config_from(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse config"));
    }

    #[test]
    fn relative_paths_follow_the_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let conf_dir = dir.path().join("conf");
        std::fs::create_dir(&conf_dir).unwrap();
        let path = conf_dir.join("config.toml");
        let absolute = dir.path().join("elsewhere").join("scores.json");
        std::fs::write(
            &path,
            format!(
                "questions = \"sets/q.toml\"\nscores_file = '{}'\n",
                absolute.display()
            ),
        )
        .unwrap();

        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.questions, Some(conf_dir.join("sets/q.toml")));
        if std::env::var(SCORES_FILE_ENV).is_err() {
            assert_eq!(config.scores_file, absolute);
        }
    }
}
