//! Q-learn command - replay recorded episodes through the Q-learning agent
//!
//! The trace file is JSON:
//!
//! ```json
//! {
//!   "episodes": [
//!     {
//!       "turns": [
//!         {
//!           "state": "1,1",
//!           "legal": ["North", "East", "Stop"],
//!           "position": {"x": 1.0, "y": 1.0},
//!           "threats": [{"x": 3.0, "y": 1.0}],
//!           "score": 0.0
//!         }
//!       ],
//!       "final_score": 10.0
//!     }
//!   ]
//! }
//! ```
//!
//! The recorded world does not react to the agent's choices; replay is a
//! dry run of the learning rule over fixed observations.

use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::{
    app::{App, QLearnConfig},
    cli::output::{print_kv, print_section, print_subsection},
    ports::{Agent, GameView},
    types::{Direction, FeatureVector, Position, StateKey},
};

/// One recorded turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordedTurn {
    /// State key; defaults to the agent's cell
    #[serde(default)]
    pub state: Option<StateKey>,
    pub legal: Vec<Direction>,
    pub position: Position,
    #[serde(default)]
    pub threats: Vec<Position>,
    pub score: f64,
    #[serde(default)]
    pub features: Vec<u8>,
}

impl GameView for RecordedTurn {
    fn legal_actions(&self) -> Vec<Direction> {
        self.legal.clone()
    }

    fn feature_vector(&self) -> FeatureVector {
        FeatureVector::new(self.features.clone())
    }

    fn agent_position(&self) -> Position {
        self.position
    }

    fn threat_positions(&self) -> Vec<Position> {
        self.threats.clone()
    }

    fn score(&self) -> f64 {
        self.score
    }

    fn state_key(&self) -> StateKey {
        self.state
            .clone()
            .unwrap_or_else(|| StateKey::from(self.position))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordedEpisode {
    pub turns: Vec<RecordedTurn>,
    pub final_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpisodeTrace {
    pub episodes: Vec<RecordedEpisode>,
}

/// Outcome of a replay.
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    /// Chosen move per turn, per episode
    pub choices: Vec<Vec<Direction>>,
    pub table_size: usize,
    /// Distinct states with at least one stored value
    pub states: usize,
    pub episodes: usize,
    pub alpha: f64,
    pub epsilon: f64,
    pub training: bool,
}

#[derive(Parser, Debug)]
#[command(about = "Replay recorded episodes through the Q-learner")]
pub struct QLearnArgs {
    /// JSON trace of recorded episodes
    #[arg(long, short = 't')]
    pub trace: PathBuf,

    /// JSON file with alpha/epsilon/gamma/num_training/seed
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Learning rate
    #[arg(long)]
    pub alpha: Option<f64>,

    /// Exploration rate
    #[arg(long)]
    pub epsilon: Option<f64>,

    /// Discount factor
    #[arg(long)]
    pub gamma: Option<f64>,

    /// Episodes before learning is switched off
    #[arg(long, short = 'n')]
    pub num_training: Option<usize>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,
}

impl QLearnArgs {
    /// Config file (or defaults) with command-line overrides applied.
    pub fn resolve_config(&self) -> Result<QLearnConfig> {
        let mut config = match &self.config {
            Some(path) => QLearnConfig::from_json_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => QLearnConfig::default(),
        };
        if let Some(alpha) = self.alpha {
            config.alpha = alpha;
        }
        if let Some(epsilon) = self.epsilon {
            config.epsilon = epsilon;
        }
        if let Some(gamma) = self.gamma {
            config.gamma = gamma;
        }
        if let Some(num_training) = self.num_training {
            config.num_training = num_training;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        config.validate()?;
        Ok(config)
    }
}

fn load_trace(path: &Path) -> Result<EpisodeTrace> {
    let file =
        File::open(path).with_context(|| format!("Failed to open trace: {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file)).context("Failed to parse episode trace")
}

/// Run the replay and return what happened.
pub fn replay(args: &QLearnArgs) -> Result<ReplayReport> {
    let config = args.resolve_config()?;
    let trace = load_trace(&args.trace)?;
    let mut agent = App::new().create_qlearn_agent(&config)?;

    let mut choices = Vec::with_capacity(trace.episodes.len());
    for (index, episode) in trace.episodes.iter().enumerate() {
        let mut episode_choices = Vec::with_capacity(episode.turns.len());
        for (turn_index, turn) in episode.turns.iter().enumerate() {
            let chosen = agent
                .get_action(turn)
                .with_context(|| format!("Episode {index}, turn {turn_index}"))?;
            episode_choices.push(chosen);
        }
        agent.on_episode_end(episode.final_score);
        choices.push(episode_choices);
    }

    Ok(ReplayReport {
        choices,
        table_size: agent.q_table().len(),
        states: agent.q_table().state_count(),
        episodes: agent.episodes_so_far(),
        alpha: agent.alpha(),
        epsilon: agent.epsilon(),
        training: agent.is_training(),
    })
}

pub fn execute(args: QLearnArgs) -> Result<()> {
    let report = replay(&args)?;

    print_section("Q-learning replay");
    print_kv("Trace", &args.trace.display().to_string());
    for (index, episode) in report.choices.iter().enumerate() {
        print_subsection(&format!("Episode {}", index + 1));
        let moves: Vec<&str> = episode.iter().map(Direction::as_str).collect();
        println!("  {}", moves.join(" "));
    }
    print_subsection("Final state");
    print_kv("Episodes", &report.episodes.to_string());
    print_kv("Q-values stored", &report.table_size.to_string());
    print_kv("States seen", &report.states.to_string());
    print_kv("Alpha", &report.alpha.to_string());
    print_kv("Epsilon", &report.epsilon.to_string());
    print_kv(
        "Learning",
        if report.training { "active" } else { "frozen" },
    );
    Ok(())
}
