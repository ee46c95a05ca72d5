//! Model artifact loading
//!
//! Artifacts are JSON documents tagged by `kind`:
//!
//! ```json
//! { "kind": "one_hot_logistic", "intercept": -1.2,
//!   "weights": { "Haematuria": { "Yes": 2.4 } } }
//! ```

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::{Classifier, LogisticModel, TreeModel};
use crate::error::ModelError;

/// A deserialized classifier artifact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelArtifact {
    OneHotLogistic(LogisticModel),
    DecisionTree(TreeModel),
}

impl ModelArtifact {
    /// Parse and validate an artifact from JSON text
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        Self::from_slice(json.as_bytes())
    }

    /// Parse and validate an artifact from raw bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self, ModelError> {
        let artifact: ModelArtifact = serde_json::from_slice(bytes)?;
        artifact.validate()?;
        Ok(artifact)
    }

    /// Read, parse and validate an artifact file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| ModelError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_slice(&bytes)
    }

    /// Check every column and category against the form schema
    pub fn validate(&self) -> Result<(), ModelError> {
        match self {
            ModelArtifact::OneHotLogistic(model) => model.validate(),
            ModelArtifact::DecisionTree(model) => model.validate(),
        }
    }

    /// Turn the artifact into a shareable classifier handle
    pub fn into_classifier(self) -> Arc<dyn Classifier> {
        match self {
            ModelArtifact::OneHotLogistic(model) => Arc::new(model),
            ModelArtifact::DecisionTree(model) => Arc::new(model),
        }
    }
}

/// Load the classifier artifact at `path`
///
/// Called once at startup; the returned handle is shared read-only.
pub fn load_classifier(path: impl AsRef<Path>) -> Result<Arc<dyn Classifier>, ModelError> {
    let path = path.as_ref();
    let classifier = ModelArtifact::load(path)?.into_classifier();
    info!(
        path = %path.display(),
        kind = classifier.kind(),
        features = classifier.feature_count(),
        "Loaded model artifact"
    );
    Ok(classifier)
}
