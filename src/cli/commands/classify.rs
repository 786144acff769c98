//! Classify command - train and query the naive-Bayes move classifier

use std::{
    fs::File,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use serde_json::to_writer_pretty;

use crate::{
    adapters::TextFileSource,
    app::DEFAULT_TRAINING_FILE,
    classifier::{MissingLabelPolicy, NaiveBayesModel},
    cli::output::{format_probabilities, print_kv, print_section, print_subsection},
    ports::TrainingDataSource,
    types::{Direction, FeatureVector, Label},
};

#[derive(Parser, Debug)]
#[command(about = "Train or query the move classifier")]
pub struct ClassifyArgs {
    #[command(subcommand)]
    pub command: ClassifyCommand,
}

#[derive(Subcommand, Debug)]
pub enum ClassifyCommand {
    /// Train from a data file and print the model
    Train(TrainArgs),

    /// Predict a move for one feature vector
    Predict(PredictArgs),
}

#[derive(Args, Debug, Clone)]
pub struct DataArgs {
    /// Training data file (one example per line, label last)
    #[arg(long, short = 'd', default_value = DEFAULT_TRAINING_FILE)]
    pub data: PathBuf,

    /// Fail when a label has no examples instead of giving it prior zero
    #[arg(long, default_value_t = false)]
    pub reject_missing_labels: bool,
}

impl DataArgs {
    fn policy(&self) -> MissingLabelPolicy {
        if self.reject_missing_labels {
            MissingLabelPolicy::Reject
        } else {
            MissingLabelPolicy::ZeroPrior
        }
    }

    fn train(&self) -> Result<NaiveBayesModel> {
        let source = TextFileSource::new(&self.data);
        let examples = source
            .load()
            .with_context(|| format!("Failed to load training data from {}", source.describe()))?;
        NaiveBayesModel::train(&examples, self.policy()).context("Failed to train classifier")
    }
}

#[derive(Args, Debug)]
pub struct TrainArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Optional path for writing a JSON model summary
    #[arg(long)]
    pub summary: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct PredictArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Feature digits, e.g. 0101
    #[arg(long, short = 'f')]
    pub features: String,
}

#[derive(Debug, Serialize)]
struct LabelSummary {
    label: u8,
    direction: Direction,
    examples: usize,
    prior: f64,
    likelihoods: Vec<f64>,
}

#[derive(Debug, Serialize)]
struct ModelSummary {
    examples: usize,
    feature_len: usize,
    labels: Vec<LabelSummary>,
}

impl From<&NaiveBayesModel> for ModelSummary {
    fn from(model: &NaiveBayesModel) -> Self {
        Self {
            examples: model.example_count(),
            feature_len: model.feature_len(),
            labels: Label::all()
                .map(|label| LabelSummary {
                    label: label.value(),
                    direction: label.direction(),
                    examples: model.label_count(label),
                    prior: model.prior(label),
                    likelihoods: model.likelihoods(label).to_vec(),
                })
                .collect(),
        }
    }
}

fn sanitize_summary_path(raw: &Path) -> PathBuf {
    let mut normalized = raw.to_path_buf();
    let raw_str = raw.as_os_str().to_string_lossy();

    if raw_str.ends_with(std::path::MAIN_SEPARATOR) || normalized.file_name().is_none() {
        normalized.push("model_summary.json");
        return normalized;
    }

    match normalized.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => normalized,
        _ => {
            normalized.set_extension("json");
            normalized
        }
    }
}

fn write_summary(model: &NaiveBayesModel, raw: &Path) -> Result<PathBuf> {
    let path = sanitize_summary_path(raw);
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    let file = File::create(&path)
        .with_context(|| format!("Failed to create file: {}", path.display()))?;
    to_writer_pretty(file, &ModelSummary::from(model)).context("Failed to write model summary")?;
    Ok(path)
}

/// Train from `args` and print the model; returns the model for callers.
pub fn run_train(args: &TrainArgs) -> Result<NaiveBayesModel> {
    let model = args.data.train()?;

    print_section("Naive-Bayes move classifier");
    print_kv("Training file", &args.data.data.display().to_string());
    print_kv("Examples", &model.example_count().to_string());
    print_kv("Features", &model.feature_len().to_string());

    for label in Label::all() {
        print_subsection(&format!("Label {label} ({})", label.direction()));
        print_kv("Examples", &model.label_count(label).to_string());
        print_kv("Prior", &format!("{:.4}", model.prior(label)));
        print_kv("P(present)", &format_probabilities(model.likelihoods(label)));
    }

    if let Some(raw) = &args.summary {
        let path = write_summary(&model, raw)?;
        println!("\nSummary written to {}", path.display());
    }

    Ok(model)
}

/// Predict a label for `args.features`.
pub fn run_predict(args: &PredictArgs) -> Result<Label> {
    let model = args.data.train()?;
    let features = FeatureVector::from_digits(&args.features)
        .with_context(|| format!("Invalid feature vector '{}'", args.features))?;
    let label = model.predict(&features)?;
    let posterior = model.scores(&features)?;

    print_kv("Features", &features.to_string());
    print_kv("Posterior", &format_probabilities(&posterior));
    print_kv("Prediction", &format!("{label} ({})", label.direction()));

    Ok(label)
}

pub fn execute(args: ClassifyArgs) -> Result<()> {
    match args.command {
        ClassifyCommand::Train(args) => run_train(&args).map(|_| ()),
        ClassifyCommand::Predict(args) => run_predict(&args).map(|_| ()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_summary_path() {
        assert_eq!(
            sanitize_summary_path(Path::new("out/model")),
            PathBuf::from("out/model.json")
        );
        assert_eq!(
            sanitize_summary_path(Path::new("out/model.JSON")),
            PathBuf::from("out/model.JSON")
        );
        let dir = format!("out{}", std::path::MAIN_SEPARATOR);
        assert_eq!(
            sanitize_summary_path(Path::new(&dir)),
            PathBuf::from("out").join("model_summary.json")
        );
    }
}
