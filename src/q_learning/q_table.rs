//! Q-table implementation for temporal difference learning

use std::collections::HashMap;

use tracing::debug;

use crate::types::{Direction, StateKey};

/// Value returned for state-action pairs that were never updated.
pub const DEFAULT_Q: f64 = 0.0;

/// Q-table mapping (state, action) pairs to Q-values
///
/// Entries are created lazily by [`QTable::update`] and never removed.
#[derive(Debug, Clone)]
pub struct QTable {
    /// Q-values: state -> action -> Q-value
    values: HashMap<StateKey, HashMap<Direction, f64>>,
    /// Learning rate α
    learning_rate: f64,
    /// Discount factor γ
    discount_factor: f64,
}

impl QTable {
    /// Create a new Q-table
    pub fn new(learning_rate: f64, discount_factor: f64) -> Self {
        Self {
            values: HashMap::new(),
            learning_rate,
            discount_factor,
        }
    }

    /// Get Q-value for a state-action pair, [`DEFAULT_Q`] when unseen
    pub fn value(&self, state: &StateKey, action: Direction) -> f64 {
        self.values
            .get(state)
            .and_then(|row| row.get(&action))
            .copied()
            .unwrap_or(DEFAULT_Q)
    }

    /// Set Q-value for a state-action pair
    pub fn set(&mut self, state: StateKey, action: Direction, value: f64) {
        self.values.entry(state).or_default().insert(action, value);
    }

    /// Maximum Q-value over `actions`; 0.0 when `actions` is empty
    pub fn max_value(&self, state: &StateKey, actions: &[Direction]) -> f64 {
        if actions.is_empty() {
            return 0.0;
        }
        actions
            .iter()
            .map(|&action| self.value(state, action))
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Q-learning update
    ///
    /// Q(s,a) ← Q(s,a) + α[r + γ max_a' Q(s',a') - Q(s,a)]
    ///
    /// `Stop` is never learned over, and a zero learning rate leaves the
    /// table untouched (no entries are created).
    pub fn update(&mut self, state: &StateKey, action: Direction, next_max: f64, reward: f64) {
        if action.is_stop() || self.learning_rate == 0.0 {
            return;
        }
        let current = self.value(state, action);
        let td_error = reward + self.discount_factor * next_max - current;
        let updated = current + self.learning_rate * td_error;
        debug!(%state, %action, reward, next_max, current, updated, "q update");
        self.set(state.clone(), action, updated);
    }

    /// Index of the greedy choice among `actions`, scanning from `start`
    ///
    /// See [`greedy_index`] for the tie-break rule.
    pub fn greedy_index(&self, state: &StateKey, actions: &[Direction], start: usize) -> usize {
        let values: Vec<f64> = actions.iter().map(|&a| self.value(state, a)).collect();
        greedy_index(&values, start)
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn set_learning_rate(&mut self, learning_rate: f64) {
        self.learning_rate = learning_rate;
    }

    pub fn discount_factor(&self) -> f64 {
        self.discount_factor
    }

    /// Number of stored state-action values
    pub fn len(&self) -> usize {
        self.values.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of distinct states with at least one stored value
    pub fn state_count(&self) -> usize {
        self.values.len()
    }
}

/// Greedy argmax with a seeded starting point.
///
/// `values[start]` is the initial best; indices are then scanned from 0 in
/// order and the best is replaced only by a strictly greater value. A unique
/// maximum always wins. On ties the start index wins if it is tied for the
/// maximum, otherwise the first maximal index does.
///
/// `values` must be non-empty and `start < values.len()`.
pub fn greedy_index(values: &[f64], start: usize) -> usize {
    debug_assert!(start < values.len());
    let mut best = start;
    for (index, &value) in values.iter().enumerate() {
        if value > values[best] {
            best = index;
        }
    }
    best
}
