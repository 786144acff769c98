//! Tabular Q-learning
//!
//! One-step temporal difference control over an explicit
//! (state, action) -> value table, with ε-greedy action selection and a
//! heuristic pre-filter that steers the agent away from nearby threats.
//!
//! ## Update rule
//!
//! ```text
//! Q(s,a) ← Q(s,a) + α[r + γ max_a' Q(s',a') - Q(s,a)]
//! ```
//!
//! The reward `r` is the change in game score between consecutive turns and
//! the terminal step uses `max_a' Q(s',a') = 0`.
//!
//! ## Usage Example
//!
//! ```no_run
//! use pacman_agents::q_learning::QLearnAgent;
//!
//! let agent = QLearnAgent::new(
//!     0.2,  // alpha
//!     0.05, // epsilon
//!     0.8,  // gamma
//!     10,   // training episodes
//! )
//! .with_seed(42);
//! ```

pub mod agent;
pub mod q_table;
pub mod threat_filter;

pub use agent::QLearnAgent;
pub use q_table::{DEFAULT_Q, QTable, greedy_index};
pub use threat_filter::{filter_legal_actions, threat_direction, threat_nearby};
