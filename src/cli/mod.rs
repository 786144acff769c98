//! CLI infrastructure for the pacman-agents toolkit
//!
//! Offline entry points for inspecting a trained classifier and for replaying
//! recorded episodes through the Q-learner. The live game loop drives the
//! agents through [`crate::ports::Agent`] instead.

pub mod commands;
pub mod output;
