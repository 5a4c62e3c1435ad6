//! Subcommand implementations.

pub mod clear_scores;
pub mod init;
pub mod play;
pub mod scores;
pub mod validate;

use std::path::PathBuf;

use anyhow::Result;

use timequiz_core::{KeyValueStore, Leaderboard, MemoryStore};
use timequiz_store::FileStore;

use crate::config::{load_config_from, TimequizConfig};

/// Load the config and apply command-line overrides.
fn resolve_config(config: Option<PathBuf>, scores_file: Option<PathBuf>) -> Result<TimequizConfig> {
    let mut config = load_config_from(config.as_deref())?;
    if let Some(file) = scores_file {
        config.scores_file = file;
    }
    Ok(config)
}

/// Open the high score store, falling back to memory if the file location
/// cannot be used so the quiz still runs.
fn open_leaderboard(config: &TimequizConfig) -> Leaderboard<Box<dyn KeyValueStore>> {
    let store: Box<dyn KeyValueStore> = match FileStore::open(&config.scores_file) {
        Ok(store) => Box::new(store),
        Err(e) => {
            tracing::warn!("high scores will not be saved: {e:#}");
            eprintln!("Warning: high scores will not be saved ({e:#}).");
            Box::new(MemoryStore::new())
        }
    };
    Leaderboard::new(store)
}
