//! HTML page handlers

use std::sync::Arc;

use axum::{
    Form,
    extract::{Query, State, rejection::FormRejection},
    response::{Html, IntoResponse, Response},
};
use bilharzia_core::{Answers, AssessmentRecord, RiskAssessment};

use crate::ServerError;
use crate::state::AppState;
use crate::view::{self, Page, PageQuery, Submission};

/// A [`ServerError`] rendered as an HTML page instead of JSON
#[derive(Debug)]
pub struct HtmlError {
    pub error: ServerError,
    /// The rejected submission, when one could be read
    pub answers: Option<Answers>,
}

impl HtmlError {
    /// Error for a submission whose answers should stay selected on the form
    pub fn with_answers(error: ServerError, answers: Answers) -> Self {
        Self {
            error,
            answers: Some(answers),
        }
    }
}

impl From<ServerError> for HtmlError {
    fn from(error: ServerError) -> Self {
        Self {
            error,
            answers: None,
        }
    }
}

impl IntoResponse for HtmlError {
    fn into_response(self) -> Response {
        let status = self.error.status_code();
        let page = view::render_error(&self.error.to_string(), self.answers.as_ref());
        (status, Html(page)).into_response()
    }
}

/// GET / - render the page picked in the sidebar
///
/// Never runs the classifier; only an explicit submit does.
pub async fn index(Query(query): Query<PageQuery>) -> Html<String> {
    Html(view::render(query.page.unwrap_or_default(), None))
}

/// POST /assess - run the submitted form through the classifier
pub async fn submit_assessment(
    State(state): State<Arc<AppState>>,
    form: Result<Form<Answers>, FormRejection>,
) -> Result<Html<String>, HtmlError> {
    let Form(answers) = form.map_err(|e| ServerError::InvalidBody(e.body_text()))?;
    let record = match AssessmentRecord::from_answers(&answers) {
        Ok(record) => record,
        Err(e) => return Err(HtmlError::with_answers(e.into(), answers)),
    };
    let result = RiskAssessment::evaluate(state.classifier.as_ref(), &record);

    Ok(Html(view::render(
        Page::Assessment,
        Some(&Submission { record, result }),
    )))
}
