//! Application layer: configuration and agent construction.
//!
//! [`App`] turns a [`QLearnConfig`] into a [`crate::q_learning::QLearnAgent`]
//! and a [`ClassifierConfig`] into a [`crate::classifier::ClassifierAgent`],
//! reading training data from the configured file unless a
//! [`crate::ports::TrainingDataSource`] was injected.

pub mod config;
pub mod container;

pub use config::{ClassifierConfig, DEFAULT_TRAINING_FILE, QLearnConfig};
pub use container::{App, AppBuilder};
