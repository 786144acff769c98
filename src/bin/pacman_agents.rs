//! pacman-agents CLI - offline tooling for the classifier and Q-learning agents
//!
//! - Train and inspect the naive-Bayes move classifier
//! - Predict a move for a feature vector
//! - Replay recorded episodes through the Q-learner

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pacman-agents")]
#[command(version, about = "Move classifier and Q-learning agents for grid games", long_about = None)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train or query the naive-Bayes move classifier
    Classify(pacman_agents::cli::commands::classify::ClassifyArgs),

    /// Replay recorded episodes through the Q-learner
    Qlearn(pacman_agents::cli::commands::qlearn::QLearnArgs),
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Classify(args) => pacman_agents::cli::commands::classify::execute(args),
        Commands::Qlearn(args) => pacman_agents::cli::commands::qlearn::execute(args),
    }
}
