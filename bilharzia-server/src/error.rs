//! Server error types

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use bilharzia_core::RecordError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur in the dashboard server
#[derive(Debug, Error)]
pub enum ServerError {
    /// Failed to bind to the specified address
    #[error("failed to bind to {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// Submitted answers do not form a valid assessment record
    #[error("invalid answers: {0}")]
    InvalidAnswers(#[from] RecordError),

    /// Request body could not be read as a set of answers
    #[error("invalid request body: {0}")]
    InvalidBody(String),

    /// Internal server error
    #[error("internal error: {0}")]
    Internal(String),
}

impl ServerError {
    /// HTTP status for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::InvalidAnswers(_) | ServerError::InvalidBody(_) => {
                StatusCode::BAD_REQUEST
            }
            ServerError::Bind { .. } | ServerError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Stable machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            ServerError::Bind { .. } => "bind_failed",
            ServerError::InvalidAnswers(_) | ServerError::InvalidBody(_) => "invalid_answers",
            ServerError::Internal(_) => "internal",
        }
    }
}

/// JSON error body returned by the API
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
            code: self.code().to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
