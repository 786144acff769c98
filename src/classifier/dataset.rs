//! Parsing of the good-moves training format.
//!
//! One example per line. Only the digits `0`-`4` carry data; every other
//! character is skipped. The last digit is the label, the rest are features.

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    types::{FeatureVector, Label, MAX_FEATURE_VALUE},
};

/// A labelled feature vector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingExample {
    pub features: FeatureVector,
    pub label: Label,
}

impl TrainingExample {
    pub fn new(features: impl Into<FeatureVector>, label: Label) -> Self {
        Self {
            features: features.into(),
            label,
        }
    }
}

fn data_digits(line: &str) -> Vec<u8> {
    line.chars()
        .filter_map(|c| c.to_digit(10))
        .filter(|&d| d <= MAX_FEATURE_VALUE as u32)
        .map(|d| d as u8)
        .collect()
}

/// Parse one line. Returns `Ok(None)` for lines carrying no digits.
///
/// `line_number` is 1-based and only used in error messages.
pub fn parse_line(line: &str, line_number: usize) -> Result<Option<TrainingExample>> {
    let mut digits = data_digits(line);
    let Some(label_digit) = digits.pop() else {
        return Ok(None);
    };
    if digits.is_empty() {
        return Err(Error::MalformedExample {
            line: line_number,
            content: line.trim_end().to_string(),
        });
    }
    let label = Label::new(label_digit)?;
    Ok(Some(TrainingExample::new(digits, label)))
}

/// Parse a whole training file.
pub fn parse_training_data(content: &str) -> Result<Vec<TrainingExample>> {
    let mut examples = Vec::new();
    for (index, line) in content.lines().enumerate() {
        if let Some(example) = parse_line(line, index + 1)? {
            examples.push(example);
        }
    }
    Ok(examples)
}
