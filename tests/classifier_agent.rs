use std::io::Write;

use pacman_agents::{
    ClassifierAgent, Direction, Error, FeatureVector, Label, MissingLabelPolicy, NaiveBayesModel,
    adapters::{InMemorySource, TextFileSource},
    app::{App, ClassifierConfig},
    classifier::TrainingExample,
    ports::{Agent, TrainingDataSource},
};
use rand::{Rng, SeedableRng, rngs::StdRng};

mod common;

use common::{ScriptedGame, approx_eq};

fn write_training_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn two_line_file_recovers_label_one_profile() {
    let file = write_training_file("0101\n1010\n");
    let examples = TextFileSource::new(file.path()).load().unwrap();
    assert_eq!(examples.len(), 2);
    assert_eq!(examples[0].features.len(), 3);

    let model = NaiveBayesModel::train(&examples, MissingLabelPolicy::ZeroPrior).unwrap();
    let label_one = Label::new(1).unwrap();
    let label_zero = Label::new(0).unwrap();

    assert_eq!(
        model.predict(&FeatureVector::new(vec![0, 1, 0])).unwrap(),
        label_one
    );
    assert_eq!(
        model.predict(&FeatureVector::new(vec![1, 0, 1])).unwrap(),
        label_zero
    );

    let p = model.likelihoods(label_one);
    assert!(approx_eq(p[0], 1.0 / 3.0));
    assert!(approx_eq(p[1], 2.0 / 3.0));
    assert!(approx_eq(p[2], 1.0 / 3.0));
    assert!(approx_eq(model.prior(label_one), 0.5));
}

#[test]
fn random_complete_datasets_keep_probability_invariants() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..25 {
        let feature_len = rng.random_range(1..8);
        let extra = rng.random_range(0..30);
        let mut examples = Vec::new();
        for i in 0..(Label::COUNT + extra) {
            let label = if i < Label::COUNT {
                i as u8
            } else {
                rng.random_range(0..Label::COUNT as u8)
            };
            let features: Vec<u8> = (0..feature_len).map(|_| rng.random_range(0..=4)).collect();
            examples.push(TrainingExample::new(features, Label::new(label).unwrap()));
        }

        let model = NaiveBayesModel::train(&examples, MissingLabelPolicy::Reject).unwrap();
        let prior_sum: f64 = Label::all().map(|l| model.prior(l)).sum();
        assert!(approx_eq(prior_sum, 1.0), "priors sum to {prior_sum}");
        for label in Label::all() {
            assert!(
                model
                    .likelihoods(label)
                    .iter()
                    .all(|p| (0.0..=1.0).contains(p))
            );
        }

        let query = FeatureVector::new((0..feature_len).map(|_| rng.random_range(0..=4)).collect());
        let first = model.predict(&query).unwrap();
        assert_eq!(first, model.predict(&query).unwrap());
        assert!(model.is_trained(first));
    }
}

#[test]
fn agent_plays_predicted_move_when_legal() {
    let source = InMemorySource::from_text("0101\n1010\n").unwrap();
    let mut agent = ClassifierAgent::from_source(&source, MissingLabelPolicy::ZeroPrior)
        .unwrap()
        .with_seed(11);

    let view = ScriptedGame::at(1, 1)
        .with_features(&[0, 1, 0])
        .with_legal(&[Direction::North, Direction::East, Direction::Stop]);
    assert_eq!(agent.get_action(&view).unwrap(), Direction::East);
}

#[test]
fn agent_falls_back_to_legal_move() {
    let source = InMemorySource::from_text("0101\n1010\n").unwrap();
    let mut agent = ClassifierAgent::from_source(&source, MissingLabelPolicy::ZeroPrior)
        .unwrap()
        .with_seed(11);

    let legal = [Direction::South, Direction::West];
    let view = ScriptedGame::at(1, 1)
        .with_features(&[0, 1, 0])
        .with_legal(&legal);
    for _ in 0..10 {
        let chosen = agent.get_action(&view).unwrap();
        assert!(legal.contains(&chosen));
    }
}

#[test]
fn fallback_is_reproducible_with_seed() {
    let app = App::for_testing()
        .with_training_source(InMemorySource::from_text("0101\n1010\n").unwrap())
        .with_default_seed(99)
        .build();
    let config = ClassifierConfig::default();
    let mut first = app.create_classifier_agent(&config).unwrap();
    let mut second = app.create_classifier_agent(&config).unwrap();

    let view = ScriptedGame::at(0, 0)
        .with_features(&[1, 0, 1])
        .with_legal(&[Direction::East, Direction::South, Direction::West]);
    let a: Vec<Direction> = (0..15).map(|_| first.get_action(&view).unwrap()).collect();
    let b: Vec<Direction> = (0..15).map(|_| second.get_action(&view).unwrap()).collect();
    assert_eq!(a, b);
}

#[test]
fn missing_training_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let config = ClassifierConfig::new(dir.path().join("good-moves.txt"));
    let err = App::new().create_classifier_agent(&config).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn reject_policy_fails_on_absent_label() {
    let app = App::for_testing()
        .with_training_source(InMemorySource::from_text("0101\n1010\n0112\n").unwrap())
        .build();
    let config = ClassifierConfig::default().with_missing_labels(MissingLabelPolicy::Reject);
    let err = app.create_classifier_agent(&config).unwrap_err();
    assert!(matches!(err, Error::MissingLabel { label: 3 }));
}

#[test]
fn wrong_feature_length_surfaces_as_error() {
    let source = InMemorySource::from_text("0101\n1010\n").unwrap();
    let mut agent = ClassifierAgent::from_source(&source, MissingLabelPolicy::ZeroPrior).unwrap();
    let view = ScriptedGame::at(0, 0).with_features(&[0, 1]);
    assert!(matches!(
        agent.get_action(&view),
        Err(Error::FeatureLengthMismatch { .. })
    ));
}

#[test]
fn reseeding_replays_the_fallback_sequence() {
    let source = InMemorySource::from_text("0101\n1010\n").unwrap();
    let mut reseeded = ClassifierAgent::from_source(&source, MissingLabelPolicy::ZeroPrior).unwrap();
    let mut seeded = ClassifierAgent::from_source(&source, MissingLabelPolicy::ZeroPrior)
        .unwrap()
        .with_seed(5);
    assert_eq!(reseeded.rng_seed(), None);

    let view = ScriptedGame::at(2, 2)
        .with_features(&[0, 1, 0])
        .with_legal(&[Direction::North, Direction::South, Direction::West]);
    // burn a few draws so the reseed has state to discard
    for _ in 0..3 {
        reseeded.get_action(&view).unwrap();
    }
    reseeded.set_rng_seed(5).unwrap();
    assert_eq!(reseeded.rng_seed(), Some(5));

    let a: Vec<Direction> = (0..20).map(|_| reseeded.get_action(&view).unwrap()).collect();
    let b: Vec<Direction> = (0..20).map(|_| seeded.get_action(&view).unwrap()).collect();
    assert_eq!(a, b);
}
