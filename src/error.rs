//! Error types for the pacman_agents crate

use thiserror::Error;

/// Main error type for the pacman_agents crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("training set contains no examples")]
    EmptyTrainingSet,

    #[error("label {label} has no training examples")]
    MissingLabel { label: u8 },

    #[error("invalid label {value} (expected 0-3)")]
    InvalidLabel { value: u8 },

    #[error("malformed training example on line {line}: '{content}'")]
    MalformedExample { line: usize, content: String },

    #[error("example {index} has {got} features, expected {expected}")]
    InconsistentFeatureLength {
        index: usize,
        expected: usize,
        got: usize,
    },

    #[error("feature vector has {got} entries, model was trained on {expected}")]
    FeatureLengthMismatch { expected: usize, got: usize },

    #[error("invalid feature digit '{character}' (expected 0-4)")]
    InvalidFeature { character: char },

    #[error("no legal actions available")]
    NoLegalActions,

    #[error("illegal move {action}: not in legal set [{legal}]")]
    IllegalMove { action: String, legal: String },

    #[error("invalid direction '{input}'. Expected one of: {expected}")]
    ParseDirection { input: String, expected: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
