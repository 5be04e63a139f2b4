//! wordgame CLI: play and manage English/Spanish word-pair quizzes.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "wordgame", version, about = "English/Spanish word-pair quiz")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a round in the terminal
    Play {
        /// Dataset name (looked up as <data-dir>/<name>.json) or path to a .json file
        #[arg(long)]
        dataset: Option<String>,

        /// Directory holding dataset files
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,

        /// Seed for reproducible prompts
        #[arg(long)]
        seed: Option<u64>,

        /// Seconds allowed per prompt
        #[arg(long)]
        timeout: Option<u64>,

        /// Prompts per round
        #[arg(long)]
        max_prompts: Option<u32>,

        /// Wrong answers before the round ends
        #[arg(long)]
        max_wrong: Option<u32>,

        /// Never show a correct pair when a mismatched one was drawn
        #[arg(long)]
        exclusive: bool,

        /// Print the round summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate dataset JSON files
    Validate {
        /// Path to a dataset file or directory
        #[arg(long)]
        dataset: PathBuf,
    },

    /// Compute a final score
    Score {
        /// Correct attempts
        #[arg(long)]
        correct: u32,

        /// Maximum attempts in the round
        #[arg(long)]
        max: u32,
    },

    /// Create starter config and dataset
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("wordgame=warn".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            dataset,
            data_dir,
            config,
            seed,
            timeout,
            max_prompts,
            max_wrong,
            exclusive,
            json,
        } => {
            commands::play::execute(commands::play::PlayOptions {
                dataset,
                data_dir,
                config,
                seed,
                timeout,
                max_prompts,
                max_wrong,
                exclusive,
                json,
            })
            .await
        }
        Commands::Validate { dataset } => commands::validate::execute(dataset),
        Commands::Score { correct, max } => commands::score::execute(correct, max),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
