//! Tabular Q-learning agent
//!
//! Updates are delayed by one step: the reward for the move chosen on turn
//! `t` is only known on turn `t+1` (as the score delta), so every turn first
//! settles the pending step and then picks a new move.

use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};
use tracing::{debug, info};

use super::{q_table::QTable, threat_filter::filter_legal_actions};
use crate::{
    Error, Result,
    app::QLearnConfig,
    ports::{Agent, GameView, validate_move},
    types::{Direction, StateKey},
    utils::build_rng,
};

/// The last decision, waiting for its reward.
#[derive(Debug, Clone, PartialEq)]
struct PendingStep {
    state: StateKey,
    action: Direction,
}

/// Epsilon-greedy Q-learning agent with a fixed training budget.
///
/// After `num_training` episodes the agent freezes: α and ε drop to zero and
/// it plays greedily with the table it has learned.
#[derive(Debug, Clone)]
pub struct QLearnAgent {
    q_table: QTable,
    epsilon: f64,
    num_training: usize,
    episodes_so_far: usize,
    last_score: f64,
    pending: Option<PendingStep>,
    rng: StdRng,
    rng_seed: Option<u64>,
}

impl QLearnAgent {
    /// Create a new Q-learning agent
    ///
    /// # Arguments
    ///
    /// * `alpha` - learning rate
    /// * `epsilon` - exploration rate
    /// * `gamma` - discount factor
    /// * `num_training` - episodes before learning is switched off
    pub fn new(alpha: f64, epsilon: f64, gamma: f64, num_training: usize) -> Self {
        let mut agent = Self {
            q_table: QTable::new(alpha, gamma),
            epsilon,
            num_training,
            episodes_so_far: 0,
            last_score: 0.0,
            pending: None,
            rng: build_rng(None),
            rng_seed: None,
        };
        if num_training == 0 {
            agent.freeze();
        }
        agent
    }

    /// Build from a validated configuration.
    pub fn from_config(config: &QLearnConfig) -> Result<Self> {
        config.validate()?;
        let agent = Self::new(
            config.alpha,
            config.epsilon,
            config.gamma,
            config.num_training,
        );
        Ok(match config.seed {
            Some(seed) => agent.with_seed(seed),
            None => agent,
        })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self.rng_seed = Some(seed);
        self
    }

    pub fn value(&self, state: &StateKey, action: Direction) -> f64 {
        self.q_table.value(state, action)
    }

    pub fn max_value(&self, state: &StateKey, actions: &[Direction]) -> f64 {
        self.q_table.max_value(state, actions)
    }

    pub fn update(&mut self, state: &StateKey, action: Direction, next_max: f64, reward: f64) {
        self.q_table.update(state, action, next_max, reward);
    }

    /// ε-greedy action selection
    ///
    /// Greedy choices start the scan at a random index; see
    /// [`super::q_table::greedy_index`] for the tie-break.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoLegalActions`] if `legal` is empty.
    pub fn choose_action(&mut self, state: &StateKey, legal: &[Direction]) -> Result<Direction> {
        if legal.is_empty() {
            return Err(Error::NoLegalActions);
        }
        if self.rng.random::<f64>() < self.epsilon {
            // Explore: random action
            return legal.choose(&mut self.rng).copied().ok_or(Error::NoLegalActions);
        }
        let start = self.rng.random_range(0..legal.len());
        Ok(legal[self.q_table.greedy_index(state, legal, start)])
    }

    /// One decision: settle the pending step, prune, select, remember.
    pub fn on_turn(&mut self, view: &dyn GameView) -> Result<Direction> {
        let state = view.state_key();
        let engine_legal = view.legal_actions();
        let score = view.score();
        let reward = score - self.last_score;

        let previous = self.pending.take();
        if let Some(step) = &previous {
            let next_max = self.q_table.max_value(&state, &engine_legal);
            self.q_table
                .update(&step.state, step.action, next_max, reward);
        }

        let moves: Vec<Direction> = engine_legal
            .iter()
            .copied()
            .filter(|a| !a.is_stop())
            .collect();
        let chosen = if moves.is_empty() {
            // only Stop (or nothing) is available
            *engine_legal.first().ok_or(Error::NoLegalActions)?
        } else {
            let candidates = filter_legal_actions(
                &moves,
                view.agent_position(),
                &view.threat_positions(),
                previous.map(|step| step.action),
            );
            self.choose_action(&state, &candidates)?
        };

        debug!(%state, score, reward, %chosen, "q-learning decision");
        self.last_score = score;
        self.pending = Some(PendingStep {
            state,
            action: chosen,
        });
        Ok(chosen)
    }

    /// Terminal update and bookkeeping at the end of an episode.
    pub fn on_episode_end(&mut self, final_score: f64) {
        let reward = final_score - self.last_score;
        if let Some(step) = self.pending.take() {
            self.q_table.update(&step.state, step.action, 0.0, reward);
        }
        self.last_score = 0.0;
        self.episodes_so_far += 1;
        info!(
            episode = self.episodes_so_far,
            final_score,
            table_size = self.q_table.len(),
            "episode finished"
        );

        if self.episodes_so_far == self.num_training {
            info!(
                episodes = self.episodes_so_far,
                "training done, turning off epsilon and alpha"
            );
            self.freeze();
        }
    }

    fn freeze(&mut self) {
        self.q_table.set_learning_rate(0.0);
        self.epsilon = 0.0;
    }

    pub fn alpha(&self) -> f64 {
        self.q_table.learning_rate()
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    pub fn gamma(&self) -> f64 {
        self.q_table.discount_factor()
    }

    pub fn episodes_so_far(&self) -> usize {
        self.episodes_so_far
    }

    pub fn num_training(&self) -> usize {
        self.num_training
    }

    /// Whether learning is still active.
    pub fn is_training(&self) -> bool {
        self.episodes_so_far < self.num_training
    }

    /// Whether a step is waiting for its reward (mid-episode).
    pub fn has_pending_step(&self) -> bool {
        self.pending.is_some()
    }

    pub fn q_table(&self) -> &QTable {
        &self.q_table
    }

    pub fn rng_seed(&self) -> Option<u64> {
        self.rng_seed
    }
}

impl Agent for QLearnAgent {
    fn get_action(&mut self, view: &dyn GameView) -> Result<Direction> {
        let chosen = self.on_turn(view)?;
        validate_move(chosen, &view.legal_actions())
    }

    fn final_state(&mut self, view: &dyn GameView) -> Result<()> {
        self.on_episode_end(view.score());
        Ok(())
    }

    fn name(&self) -> &str {
        "Q-Learning"
    }

    fn set_rng_seed(&mut self, seed: u64) -> Result<()> {
        self.rng = StdRng::seed_from_u64(seed);
        self.rng_seed = Some(seed);
        Ok(())
    }
}
