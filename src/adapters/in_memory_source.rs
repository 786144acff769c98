//! In-memory training data for tests and embedding callers.

use crate::{Result, classifier::TrainingExample, ports::TrainingDataSource};

/// Serves a fixed list of examples without touching the file system.
///
/// # Examples
///
/// ```
/// use pacman_agents::adapters::InMemorySource;
/// use pacman_agents::ports::TrainingDataSource;
///
/// let source = InMemorySource::from_text("0101\n1010\n")?;
/// assert_eq!(source.load()?.len(), 2);
/// # Ok::<(), pacman_agents::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemorySource {
    examples: Vec<TrainingExample>,
}

impl InMemorySource {
    pub fn new(examples: Vec<TrainingExample>) -> Self {
        Self { examples }
    }

    /// Parse text in the training file format.
    pub fn from_text(content: &str) -> Result<Self> {
        crate::classifier::parse_training_data(content).map(Self::new)
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }
}

impl TrainingDataSource for InMemorySource {
    fn load(&self) -> Result<Vec<TrainingExample>> {
        Ok(self.examples.clone())
    }

    fn describe(&self) -> String {
        format!("in-memory ({} examples)", self.examples.len())
    }
}
