//! The `timequiz scores` command.

use std::path::PathBuf;

use anyhow::Result;

use crate::terminal::leaderboard_table;

pub fn execute(
    config_path: Option<PathBuf>,
    scores_file: Option<PathBuf>,
    ranked: bool,
    json: bool,
) -> Result<()> {
    let config = super::resolve_config(config_path, scores_file)?;
    let leaderboard = super::open_leaderboard(&config);

    let listed = if ranked {
        leaderboard.ranked()
    } else {
        leaderboard.list()
    };
    let records = match listed {
        Ok(records) => records,
        Err(e) => {
            tracing::warn!("high scores unavailable: {e}");
            eprintln!("High scores are unavailable ({e}).");
            Vec::new()
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else if records.is_empty() {
        println!("No high scores yet.");
    } else {
        println!("{}", leaderboard_table(&records));
    }

    Ok(())
}
