//! Training data port.
//!
//! Decouples the classifier from where its examples are stored.

use crate::{Result, classifier::TrainingExample};

/// Port for loading classifier training examples.
///
/// # Examples
///
/// ```no_run
/// use pacman_agents::ports::TrainingDataSource;
/// use pacman_agents::adapters::TextFileSource;
///
/// let source = TextFileSource::new("good-moves.txt");
/// let examples = source.load()?;
/// println!("{} examples from {}", examples.len(), source.describe());
/// # Ok::<(), pacman_agents::Error>(())
/// ```
pub trait TrainingDataSource {
    /// Load every example, in storage order.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be read or a line is malformed.
    fn load(&self) -> Result<Vec<TrainingExample>>;

    /// Human-readable origin for logs.
    fn describe(&self) -> String;
}
