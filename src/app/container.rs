//! Factory that wires configuration and data sources into agents.

use std::sync::Arc;

use super::config::{ClassifierConfig, QLearnConfig};
use crate::{
    Result,
    adapters::TextFileSource,
    classifier::ClassifierAgent,
    ports::TrainingDataSource,
    q_learning::QLearnAgent,
};

/// Application entry point for building agents.
///
/// # Examples
///
/// ```no_run
/// use pacman_agents::app::{App, ClassifierConfig, QLearnConfig};
///
/// let app = App::new();
/// let classifier = app.create_classifier_agent(&ClassifierConfig::default())?;
/// let learner = app.create_qlearn_agent(&QLearnConfig::default().with_seed(7))?;
/// # Ok::<(), pacman_agents::Error>(())
/// ```
///
/// ## Testing without files
///
/// ```
/// use pacman_agents::adapters::InMemorySource;
/// use pacman_agents::app::{App, ClassifierConfig};
///
/// let app = App::for_testing()
///     .with_training_source(InMemorySource::from_text("0101\n1010\n")?)
///     .with_default_seed(42)
///     .build();
/// let agent = app.create_classifier_agent(&ClassifierConfig::default())?;
/// # Ok::<(), pacman_agents::Error>(())
/// ```
pub struct App {
    /// Overrides the training file named in the classifier config
    training_source: Option<Arc<dyn TrainingDataSource + Send + Sync>>,
    /// Default random seed (None = non-deterministic)
    default_seed: Option<u64>,
}

impl App {
    /// Create an app that reads training data from the configured file.
    pub fn new() -> Self {
        Self {
            training_source: None,
            default_seed: None,
        }
    }

    /// Create a builder for injecting sources and seeds.
    pub fn for_testing() -> AppBuilder {
        AppBuilder::new()
    }

    /// Build a classifier agent, training it from the injected source or
    /// from `config.training_file`.
    ///
    /// # Errors
    ///
    /// A missing or unreadable training file is reported as [`crate::Error::Io`].
    pub fn create_classifier_agent(&self, config: &ClassifierConfig) -> Result<ClassifierAgent> {
        let agent = match &self.training_source {
            Some(source) => ClassifierAgent::from_source(source.as_ref(), config.missing_labels)?,
            None => {
                let source = TextFileSource::new(&config.training_file);
                ClassifierAgent::from_source(&source, config.missing_labels)?
            }
        };

        Ok(match config.seed.or(self.default_seed) {
            Some(seed) => agent.with_seed(seed),
            None => agent,
        })
    }

    /// Build a Q-learning agent.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidConfiguration`] for rates outside [0, 1].
    pub fn create_qlearn_agent(&self, config: &QLearnConfig) -> Result<QLearnAgent> {
        let mut config = config.clone();
        if config.seed.is_none() {
            config.seed = self.default_seed;
        }
        QLearnAgent::from_config(&config)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`App`].
pub struct AppBuilder {
    training_source: Option<Arc<dyn TrainingDataSource + Send + Sync>>,
    default_seed: Option<u64>,
}

impl AppBuilder {
    fn new() -> Self {
        Self {
            training_source: None,
            default_seed: None,
        }
    }

    /// Serve classifier training data from `source` instead of disk.
    pub fn with_training_source<S>(mut self, source: S) -> Self
    where
        S: TrainingDataSource + Send + Sync + 'static,
    {
        self.training_source = Some(Arc::new(source));
        self
    }

    /// Seed used when a config does not carry its own.
    pub fn with_default_seed(mut self, seed: u64) -> Self {
        self.default_seed = Some(seed);
        self
    }

    pub fn build(self) -> App {
        App {
            training_source: self.training_source,
            default_seed: self.default_seed,
        }
    }
}
