//! bilharzia-core: Domain library for the Schistosoma haematobium risk dashboard
//!
//! This crate provides everything the dashboard needs apart from HTTP:
//!
//! - **Form schema** - [`Field`] enumerates the fourteen closed-choice questions
//! - **Assessment records** - [`Answers`] as submitted and the validated [`AssessmentRecord`]
//! - **Classifiers** - the [`Classifier`] trait and JSON [`ModelArtifact`] adapters
//! - **Outcomes** - [`RiskAssessment`] with banner text and recommendation blocks
//! - **Reference data** - [`ReferenceDataset`] loading with label normalization
//!
//! # Quick Start
//!
//! ```no_run
//! use bilharzia_core::{Answers, AssessmentRecord, Field, RiskAssessment, load_classifier};
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let classifier = load_classifier("schisto_model.json")?;
//!
//!     let answers = Answers::from(&AssessmentRecord::default()).with(Field::Haematuria, "Yes");
//!     let record = AssessmentRecord::from_answers(&answers)?;
//!
//!     let result = RiskAssessment::evaluate(classifier.as_ref(), &record);
//!     println!("{} ({})", result.banner(), result.probability_display());
//!     Ok(())
//! }
//! ```

pub mod assessment;
pub mod classifier;
pub mod dataset;
pub mod error;
pub mod record;
pub mod schema;

pub use assessment::{Guidance, Recommendation, RiskAssessment};
pub use classifier::{
    Classifier, LogisticModel, ModelArtifact, Probabilities, RiskLabel, TreeModel, TreeNode,
    load_classifier,
};
pub use dataset::{ReferenceDataset, load_dataset};
pub use error::{CoreError, DatasetError, ModelError, RecordError};
pub use record::{Answers, AssessmentRecord};
pub use schema::Field;
