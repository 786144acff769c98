//! Small numeric and randomness helpers shared by both agents.

use rand::{SeedableRng, rngs::StdRng};

/// Build the agent RNG: seeded when a seed is given, otherwise from OS entropy.
pub(crate) fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

/// Normalize non-negative weights into a probability distribution.
///
/// Returns `None` when the input is empty or the total is zero or not finite.
pub fn normalize_weights<I>(weights: I) -> Option<Vec<f64>>
where
    I: IntoIterator<Item = f64>,
{
    let weights: Vec<f64> = weights.into_iter().collect();
    if weights.is_empty() {
        return None;
    }
    let sum: f64 = weights.iter().sum();
    if !sum.is_finite() || sum <= 0.0 {
        return None;
    }
    Some(weights.into_iter().map(|w| w / sum).collect())
}

/// Turn log-scores into a normalized distribution without underflow.
///
/// Entries equal to `f64::NEG_INFINITY` map to probability zero.
pub fn softmax_log_scores(log_scores: &[f64]) -> Option<Vec<f64>> {
    let max = log_scores
        .iter()
        .copied()
        .filter(|s| s.is_finite())
        .fold(f64::NEG_INFINITY, f64::max);
    if !max.is_finite() {
        return None;
    }
    normalize_weights(log_scores.iter().map(|&s| {
        if s.is_finite() {
            (s - max).exp()
        } else {
            0.0
        }
    }))
}
