//! timequiz CLI — a countdown trivia quiz in the terminal.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;
mod terminal;

#[derive(Parser)]
#[command(name = "timequiz", version, about = "Countdown trivia quiz with a local leaderboard")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the quiz
    Play {
        /// Question set TOML file (default: built-in questions)
        #[arg(long)]
        questions: Option<PathBuf>,

        /// Seconds on the clock at the start
        #[arg(long)]
        time_limit: Option<i64>,

        /// High score file
        #[arg(long)]
        scores_file: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show the high scores
    Scores {
        /// Order by score instead of by entry
        #[arg(long)]
        ranked: bool,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,

        /// High score file
        #[arg(long)]
        scores_file: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Delete all high scores
    ClearScores {
        /// High score file
        #[arg(long)]
        scores_file: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate a question set TOML file
    Validate {
        /// Path to the question set
        #[arg(long)]
        questions: PathBuf,
    },

    /// Create a starter config and example question set
    Init,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("timequiz=warn".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            questions,
            time_limit,
            scores_file,
            config,
        } => commands::play::execute(config, questions, time_limit, scores_file).await,
        Commands::Scores {
            ranked,
            json,
            scores_file,
            config,
        } => commands::scores::execute(config, scores_file, ranked, json),
        Commands::ClearScores {
            scores_file,
            config,
        } => commands::clear_scores::execute(config, scores_file),
        Commands::Validate { questions } => commands::validate::execute(questions),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
