//! Error types for bilharzia-core

use std::path::PathBuf;

use thiserror::Error;

use crate::schema::Field;

/// Top-level error type for bilharzia-core
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Record error: {0}")]
    Record(#[from] RecordError),

    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),
}

/// Errors building an assessment record from answers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Missing answer for {0}")]
    MissingAnswer(Field),

    #[error("Invalid answer for {field}: {value:?}")]
    InvalidChoice { field: Field, value: String },

    #[error("Malformed answer {0:?}, expected key=value")]
    Malformed(String),
}

/// Errors loading or evaluating a classifier artifact
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Failed to read model artifact {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Corrupt model artifact: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("Model references unknown column {0:?}")]
    UnknownColumn(String),

    #[error("Model references category {category:?} not offered for {field}")]
    UnknownCategory { field: Field, category: String },

    #[error("Invalid model artifact: {0}")]
    Invalid(String),
}

/// Errors loading the reference dataset
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Failed to read dataset {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Dataset is missing column {0:?}")]
    MissingColumn(&'static str),
}
