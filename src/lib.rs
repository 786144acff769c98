//! Decision agents for turn-based grid games
//!
//! This crate provides:
//! - A naive-Bayes move classifier trained from a labelled feature file
//! - A tabular Q-learning agent with ε-greedy selection and threat avoidance
//! - Ports for plugging both into an external game loop
//! - A small CLI for offline inspection and replay

pub mod adapters;
pub mod app;
pub mod classifier;
pub mod cli;
pub mod error;
pub mod ports;
pub mod q_learning;
pub mod types;
pub mod utils;

pub use classifier::{ClassifierAgent, MissingLabelPolicy, NaiveBayesModel};
pub use error::{Error, Result};
pub use q_learning::{QLearnAgent, QTable};
pub use types::{Direction, FeatureVector, Label, Position, StateKey};
