//! REST API handlers

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use bilharzia_core::{Answers, AssessmentRecord, Field, RiskAssessment, RiskLabel};
use serde::{Deserialize, Serialize};

use crate::ServerError;
use crate::state::AppState;

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the server
    pub status: String,
    /// Server version
    pub version: String,
    /// Seconds since server started
    pub uptime_seconds: i64,
    /// Artifact format of the loaded classifier
    pub model_kind: String,
    /// Number of model columns the classifier reads
    pub model_features: usize,
    /// Rows in the reference dataset
    pub dataset_rows: usize,
}

/// Health check endpoint
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_seconds(),
        model_kind: state.classifier.kind().to_string(),
        model_features: state.classifier.feature_count(),
        dataset_rows: state.dataset.len(),
    })
}

/// One question of the assessment form
#[derive(Debug, Serialize, Deserialize)]
pub struct FieldSchema {
    /// Form key
    pub key: String,
    /// Label shown on the form
    pub label: String,
    /// Model column name
    pub column: String,
    /// Accepted answers, default first
    pub choices: Vec<String>,
}

/// Response for the schema endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct SchemaResponse {
    pub fields: Vec<FieldSchema>,
}

/// GET /api/schema - the form fields and their closed choice sets
pub async fn schema() -> Json<SchemaResponse> {
    let fields = Field::ALL
        .into_iter()
        .map(|field| FieldSchema {
            key: field.key().to_string(),
            label: field.label().to_string(),
            column: field.column().to_string(),
            choices: field.choices().iter().map(|c| c.to_string()).collect(),
        })
        .collect();

    Json(SchemaResponse { fields })
}

/// Response for an assessment
#[derive(Debug, Serialize, Deserialize)]
pub struct AssessResponse {
    /// Predicted label
    pub label: RiskLabel,
    /// Predicted class, 0 or 1
    pub class: u8,
    /// Banner text
    pub risk_level: String,
    /// Class probabilities `[p0, p1]`
    pub probabilities: [f64; 2],
    /// Positive-class probability as displayed, e.g. `73.4%`
    pub probability_display: String,
    /// Heading of the recommendation block
    pub guidance: String,
    /// The record the classifier saw
    pub answers: Answers,
}

/// POST /api/assess - assess a complete set of answers
pub async fn assess(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Answers>, JsonRejection>,
) -> Result<Json<AssessResponse>, ServerError> {
    let Json(answers) = payload.map_err(|e| ServerError::InvalidBody(e.body_text()))?;
    let record = AssessmentRecord::from_answers(&answers)?;
    let result = RiskAssessment::evaluate(state.classifier.as_ref(), &record);

    Ok(Json(AssessResponse {
        label: result.label,
        class: result.label.class(),
        risk_level: result.banner().to_string(),
        probabilities: result.probabilities.as_array(),
        probability_display: result.probability_display(),
        guidance: result.guidance().heading.to_string(),
        answers: Answers::from(&record),
    }))
}
