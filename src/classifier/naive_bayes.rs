//! Naive-Bayes model over binary feature presence.
//!
//! Each feature is treated as present (non-zero) or absent, independently
//! given the label. Presence probabilities are Laplace-smoothed:
//!
//! ```text
//! P(f_i present | y) = (n_{y,i} + 1) / (n_y + 2)
//! ```
//!
//! so every estimate lies strictly inside (0, 1). Labels are always scanned
//! in index order 0..4, which makes ties resolve to the lowest label.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::dataset::TrainingExample;
use crate::{
    Error, Result,
    types::{FeatureVector, Label},
    utils::softmax_log_scores,
};

/// What to do when a label has no training examples.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingLabelPolicy {
    /// Give the label prior zero; it is never predicted.
    #[default]
    ZeroPrior,
    /// Fail training with [`Error::MissingLabel`].
    Reject,
}

/// Trained class-conditional model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NaiveBayesModel {
    feature_len: usize,
    label_counts: [usize; Label::COUNT],
    likelihoods: [Vec<f64>; Label::COUNT],
}

impl NaiveBayesModel {
    /// Estimate priors and presence likelihoods from labelled examples.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyTrainingSet`] when `examples` is empty
    /// - [`Error::InconsistentFeatureLength`] when vectors differ in length
    /// - [`Error::MissingLabel`] under [`MissingLabelPolicy::Reject`]
    pub fn train(examples: &[TrainingExample], policy: MissingLabelPolicy) -> Result<Self> {
        let first = examples.first().ok_or(Error::EmptyTrainingSet)?;
        let feature_len = first.features.len();

        let mut label_counts = [0usize; Label::COUNT];
        let mut present_counts: [Vec<usize>; Label::COUNT] =
            std::array::from_fn(|_| vec![0; feature_len]);

        for (index, example) in examples.iter().enumerate() {
            if example.features.len() != feature_len {
                return Err(Error::InconsistentFeatureLength {
                    index,
                    expected: feature_len,
                    got: example.features.len(),
                });
            }
            let label = example.label.index();
            label_counts[label] += 1;
            for (feature, count) in present_counts[label].iter_mut().enumerate() {
                if example.features.is_present(feature) {
                    *count += 1;
                }
            }
        }

        if policy == MissingLabelPolicy::Reject
            && let Some(label) = Label::all().find(|l| label_counts[l.index()] == 0)
        {
            return Err(Error::MissingLabel {
                label: label.value(),
            });
        }

        let likelihoods = std::array::from_fn(|label| {
            let n = label_counts[label] as f64;
            present_counts[label]
                .iter()
                .map(|&present| (present as f64 + 1.0) / (n + 2.0))
                .collect()
        });

        debug!(
            examples = examples.len(),
            feature_len,
            ?label_counts,
            "trained naive-Bayes model"
        );

        Ok(Self {
            feature_len,
            label_counts,
            likelihoods,
        })
    }

    /// Number of features each input must have.
    pub fn feature_len(&self) -> usize {
        self.feature_len
    }

    /// Total examples seen during training.
    pub fn example_count(&self) -> usize {
        self.label_counts.iter().sum()
    }

    /// Examples seen for `label`.
    pub fn label_count(&self, label: Label) -> usize {
        self.label_counts[label.index()]
    }

    /// Whether `label` had at least one training example.
    pub fn is_trained(&self, label: Label) -> bool {
        self.label_count(label) > 0
    }

    /// Labels with at least one example, in scan order.
    pub fn trained_labels(&self) -> impl Iterator<Item = Label> + '_ {
        Label::all().filter(|&l| self.is_trained(l))
    }

    /// Relative frequency of `label` in the training set.
    pub fn prior(&self, label: Label) -> f64 {
        self.label_count(label) as f64 / self.example_count() as f64
    }

    /// Presence probability of every feature given `label`.
    pub fn likelihoods(&self, label: Label) -> &[f64] {
        &self.likelihoods[label.index()]
    }

    fn check_len(&self, features: &FeatureVector) -> Result<()> {
        if features.len() == self.feature_len {
            Ok(())
        } else {
            Err(Error::FeatureLengthMismatch {
                expected: self.feature_len,
                got: features.len(),
            })
        }
    }

    /// `ln(prior * Π likelihood)`, or `-∞` for an untrained label.
    fn log_score(&self, label: Label, features: &FeatureVector) -> f64 {
        if !self.is_trained(label) {
            return f64::NEG_INFINITY;
        }
        self.likelihoods(label)
            .iter()
            .enumerate()
            .fold(self.prior(label).ln(), |acc, (feature, &p)| {
                if features.is_present(feature) {
                    acc + p.ln()
                } else {
                    acc + (1.0 - p).ln()
                }
            })
    }

    /// Posterior over the four labels, indexed by label.
    pub fn scores(&self, features: &FeatureVector) -> Result<[f64; Label::COUNT]> {
        self.check_len(features)?;
        let log_scores: Vec<f64> = Label::all()
            .map(|l| self.log_score(l, features))
            .collect();
        let mut posterior = [0.0; Label::COUNT];
        if let Some(normalized) = softmax_log_scores(&log_scores) {
            posterior.copy_from_slice(&normalized);
        }
        Ok(posterior)
    }

    /// Most probable label. Ties go to the lowest label index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FeatureLengthMismatch`] if `features` has the wrong length.
    pub fn predict(&self, features: &FeatureVector) -> Result<Label> {
        self.check_len(features)?;
        let mut best: Option<(Label, f64)> = None;
        for label in self.trained_labels() {
            let score = self.log_score(label, features);
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((label, score)),
            }
        }
        // A model always has at least one trained label.
        best.map(|(label, _)| label).ok_or(Error::EmptyTrainingSet)
    }
}
