//! Ports (trait boundaries) for external collaborators.
//!
//! The game engine, the turn loop and the training data storage all live
//! outside this crate. These traits are owned by the domain and implemented
//! by the caller or by adapters.

pub mod agent;
pub mod game;
pub mod training_data;

pub use agent::Agent;
pub use game::{GameView, validate_move};
pub use training_data::TrainingDataSource;
