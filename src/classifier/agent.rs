//! Classifier-driven agent.

use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, info};

use super::{
    naive_bayes::{MissingLabelPolicy, NaiveBayesModel},
    policy::select_move,
};
use crate::{
    Result,
    ports::{Agent, GameView, TrainingDataSource, validate_move},
    types::{Direction, FeatureVector},
    utils::build_rng,
};

/// Agent that predicts a move from the local feature vector.
///
/// The model is trained once at construction; afterwards every turn is pure
/// inference plus the legal-move fallback.
#[derive(Debug, Clone)]
pub struct ClassifierAgent {
    model: NaiveBayesModel,
    rng: StdRng,
    rng_seed: Option<u64>,
}

impl ClassifierAgent {
    pub fn new(model: NaiveBayesModel) -> Self {
        Self {
            model,
            rng: build_rng(None),
            rng_seed: None,
        }
    }

    /// Load examples from `source` and train the model.
    ///
    /// # Errors
    ///
    /// Propagates load failures (a missing file is fatal) and training errors.
    pub fn from_source(source: &dyn TrainingDataSource, policy: MissingLabelPolicy) -> Result<Self> {
        let examples = source.load()?;
        let model = NaiveBayesModel::train(&examples, policy)?;
        info!(
            source = %source.describe(),
            examples = examples.len(),
            features = model.feature_len(),
            "classifier trained"
        );
        Ok(Self::new(model))
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self.rng_seed = Some(seed);
        self
    }

    pub fn model(&self) -> &NaiveBayesModel {
        &self.model
    }

    pub fn rng_seed(&self) -> Option<u64> {
        self.rng_seed
    }

    /// Predict and map to a legal move.
    pub fn decide(&mut self, features: &FeatureVector, legal: &[Direction]) -> Result<Direction> {
        let label = self.model.predict(features)?;
        let chosen = select_move(label, legal, &mut self.rng)?;
        debug!(%features, %label, %chosen, "classifier decision");
        Ok(chosen)
    }
}

impl Agent for ClassifierAgent {
    fn get_action(&mut self, view: &dyn GameView) -> Result<Direction> {
        let legal = view.legal_actions();
        let chosen = self.decide(&view.feature_vector(), &legal)?;
        validate_move(chosen, &legal)
    }

    fn final_state(&mut self, view: &dyn GameView) -> Result<()> {
        info!(score = view.score(), "classifier episode finished");
        Ok(())
    }

    fn name(&self) -> &str {
        "Classifier"
    }

    fn set_rng_seed(&mut self, seed: u64) -> Result<()> {
        self.rng = StdRng::seed_from_u64(seed);
        self.rng_seed = Some(seed);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{adapters::InMemorySource, classifier::parse_training_data};

    fn agent() -> ClassifierAgent {
        let source = InMemorySource::new(parse_training_data("0101\n1010\n").unwrap());
        ClassifierAgent::from_source(&source, MissingLabelPolicy::ZeroPrior)
            .unwrap()
            .with_seed(3)
    }

    #[test]
    fn test_decide_uses_prediction_when_legal() {
        let mut agent = agent();
        let features = FeatureVector::new(vec![0, 1, 0]);
        let chosen = agent
            .decide(&features, &[Direction::North, Direction::East])
            .unwrap();
        assert_eq!(chosen, Direction::East);
    }

    #[test]
    fn test_decide_falls_back_when_illegal() {
        let mut agent = agent();
        let features = FeatureVector::new(vec![0, 1, 0]);
        let legal = [Direction::West, Direction::South];
        let chosen = agent.decide(&features, &legal).unwrap();
        assert!(legal.contains(&chosen));
    }
}
