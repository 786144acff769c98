//! Text-file implementation of the training data port.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    Result,
    classifier::{TrainingExample, parse_training_data},
    error::Error,
    ports::TrainingDataSource,
};

/// Reads the good-moves text format from disk.
///
/// The file is read in full on every `load`; agents call it once at startup.
///
/// # Examples
///
/// ```no_run
/// use pacman_agents::adapters::TextFileSource;
/// use pacman_agents::ports::TrainingDataSource;
///
/// let examples = TextFileSource::new("good-moves.txt").load()?;
/// # Ok::<(), pacman_agents::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFileSource {
    path: PathBuf,
}

impl TextFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TrainingDataSource for TextFileSource {
    fn load(&self) -> Result<Vec<TrainingExample>> {
        let content = fs::read_to_string(&self.path).map_err(|source| Error::Io {
            operation: format!("read training file {:?}", self.path),
            source,
        })?;
        parse_training_data(&content)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
