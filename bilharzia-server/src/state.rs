//! Shared application state for the dashboard server

use std::path::Path;
use std::sync::Arc;

use bilharzia_core::{Classifier, CoreError, ReferenceDataset, load_classifier, load_dataset};
use chrono::{DateTime, Utc};

/// Read-only state accessible by all handlers
///
/// Both resources are loaded once before the server starts and never
/// mutated afterwards, so handlers share them without locking.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The loaded classifier artifact
    pub classifier: Arc<dyn Classifier>,
    /// The normalized reference dataset
    pub dataset: Arc<ReferenceDataset>,
    /// When the server started
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Create state from already-loaded resources
    pub fn new(classifier: Arc<dyn Classifier>, dataset: ReferenceDataset) -> Self {
        Self {
            classifier,
            dataset: Arc::new(dataset),
            started_at: Utc::now(),
        }
    }

    /// Load the model artifact and the reference dataset from disk
    ///
    /// Any failure is fatal: the dashboard cannot serve without both.
    pub fn load(model_path: &Path, dataset_path: &Path) -> Result<Self, CoreError> {
        let classifier = load_classifier(model_path)?;
        let dataset = load_dataset(dataset_path)?;
        Ok(Self::new(classifier, dataset))
    }

    /// Returns how long the server has been running
    pub fn uptime_seconds(&self) -> i64 {
        (Utc::now() - self.started_at).num_seconds()
    }
}
