//! The `timequiz clear-scores` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use timequiz_core::Leaderboard;
use timequiz_store::FileStore;

pub fn execute(config_path: Option<PathBuf>, scores_file: Option<PathBuf>) -> Result<()> {
    let config = super::resolve_config(config_path, scores_file)?;

    // Unlike play, a store that cannot be opened is an error here.
    let store = FileStore::open(&config.scores_file).with_context(|| {
        format!(
            "cannot open high scores at {}",
            config.scores_file.display()
        )
    })?;
    let mut leaderboard = Leaderboard::new(store);

    leaderboard.clear().with_context(|| {
        format!(
            "failed to clear high scores in {}",
            config.scores_file.display()
        )
    })?;

    println!("High scores cleared.");
    Ok(())
}
