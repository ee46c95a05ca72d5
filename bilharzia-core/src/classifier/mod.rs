//! Classifier abstraction and artifact adapters
//!
//! The dashboard never trains anything. It loads an artifact produced
//! offline and asks it two questions about a single [`AssessmentRecord`]:
//! which class it belongs to, and with what probability.

mod artifact;
mod logistic;
mod tree;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::record::AssessmentRecord;

pub use artifact::{ModelArtifact, load_classifier};
pub use logistic::LogisticModel;
pub use tree::{TreeModel, TreeNode};

/// Binary classifier output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLabel {
    /// Class 0
    Low,
    /// Class 1
    High,
}

impl RiskLabel {
    /// The numeric class (0 or 1)
    pub fn class(self) -> u8 {
        match self {
            RiskLabel::Low => 0,
            RiskLabel::High => 1,
        }
    }
}

impl fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLabel::Low => f.write_str("LOW"),
            RiskLabel::High => f.write_str("HIGH"),
        }
    }
}

/// Class probabilities `(p0, p1)` for one record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Probabilities {
    /// Probability of class 0 (not infected)
    pub low: f64,
    /// Probability of class 1 (infected)
    pub high: f64,
}

impl Probabilities {
    /// Build from the positive-class probability
    pub fn from_positive(p1: f64) -> Self {
        let p1 = p1.clamp(0.0, 1.0);
        Self {
            low: 1.0 - p1,
            high: p1,
        }
    }

    /// The pair in class order
    pub fn as_array(&self) -> [f64; 2] {
        [self.low, self.high]
    }

    /// Argmax label; ties resolve to class 0
    pub fn label(&self) -> RiskLabel {
        if self.high > self.low {
            RiskLabel::High
        } else {
            RiskLabel::Low
        }
    }

    /// Positive-class probability as a percentage with one decimal, e.g. `73.4%`
    pub fn positive_percent(&self) -> String {
        format!("{:.1}%", self.high * 100.0)
    }
}

/// A trained binary classifier over assessment records
///
/// Artifacts are validated against the form schema when they load, so
/// inference itself cannot fail.
pub trait Classifier: fmt::Debug + Send + Sync {
    /// Short name of the artifact format backing this classifier
    fn kind(&self) -> &'static str;

    /// Number of model columns the classifier actually reads
    fn feature_count(&self) -> usize;

    /// Class probabilities for one record
    fn predict_proba(&self, record: &AssessmentRecord) -> Probabilities;

    /// Predicted class for one record
    fn predict(&self, record: &AssessmentRecord) -> RiskLabel {
        self.predict_proba(record).label()
    }
}
