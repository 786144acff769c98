//! Configuration types for agent creation.

use std::{
    fs::File,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{Error, Result, classifier::MissingLabelPolicy};

/// Default training file name expected next to the game.
pub const DEFAULT_TRAINING_FILE: &str = "good-moves.txt";

/// Configuration for the Q-learning agent.
///
/// # Examples
///
/// ```
/// use pacman_agents::app::QLearnConfig;
///
/// let config = QLearnConfig::default()
///     .with_alpha(0.3)
///     .with_num_training(2000)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QLearnConfig {
    /// Learning rate α
    pub alpha: f64,
    /// Exploration rate ε
    pub epsilon: f64,
    /// Discount factor γ
    pub gamma: f64,
    /// Episodes before learning is switched off
    pub num_training: usize,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
}

impl Default for QLearnConfig {
    fn default() -> Self {
        Self {
            alpha: 0.2,
            epsilon: 0.05,
            gamma: 0.8,
            num_training: 10,
            seed: None,
        }
    }
}

fn check_unit_interval(name: &str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(Error::InvalidConfiguration {
            message: format!("{name} must lie in [0, 1], got {value}"),
        })
    }
}

impl QLearnConfig {
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_gamma(mut self, gamma: f64) -> Self {
        self.gamma = gamma;
        self
    }

    pub fn with_num_training(mut self, num_training: usize) -> Self {
        self.num_training = num_training;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check every rate lies in [0, 1].
    pub fn validate(&self) -> Result<()> {
        check_unit_interval("alpha", self.alpha)?;
        check_unit_interval("epsilon", self.epsilon)?;
        check_unit_interval("gamma", self.gamma)
    }

    /// Read a JSON config file; missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| Error::Io {
            operation: format!("open config file {path:?}"),
            source,
        })?;
        let config: Self = serde_json::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }
}

/// Configuration for the classifier agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Training data in the good-moves text format
    pub training_file: PathBuf,
    /// Handling of labels without examples
    pub missing_labels: MissingLabelPolicy,
    /// Random seed for the illegal-move fallback
    pub seed: Option<u64>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TRAINING_FILE)
    }
}

impl ClassifierConfig {
    pub fn new(training_file: impl Into<PathBuf>) -> Self {
        Self {
            training_file: training_file.into(),
            missing_labels: MissingLabelPolicy::default(),
            seed: None,
        }
    }

    pub fn with_missing_labels(mut self, policy: MissingLabelPolicy) -> Self {
        self.missing_labels = policy;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
