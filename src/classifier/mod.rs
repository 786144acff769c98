//! Naive-Bayes move classifier
//!
//! Trained once from a static file of labelled feature vectors, then used
//! for pure inference every turn.
//!
//! ```no_run
//! use pacman_agents::classifier::{MissingLabelPolicy, NaiveBayesModel, parse_training_data};
//! use pacman_agents::types::FeatureVector;
//!
//! let examples = parse_training_data("0101\n1010\n")?;
//! let model = NaiveBayesModel::train(&examples, MissingLabelPolicy::ZeroPrior)?;
//! let label = model.predict(&FeatureVector::new(vec![0, 1, 0]))?;
//! assert_eq!(label.value(), 1);
//! # Ok::<(), pacman_agents::Error>(())
//! ```

pub mod agent;
pub mod dataset;
pub mod naive_bayes;
pub mod policy;

pub use agent::ClassifierAgent;
pub use dataset::{TrainingExample, parse_line, parse_training_data};
pub use naive_bayes::{MissingLabelPolicy, NaiveBayesModel};
pub use policy::select_move;
