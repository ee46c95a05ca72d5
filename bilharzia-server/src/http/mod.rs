//! HTTP server module

mod api;
mod pages;
mod static_files;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::compression::CompressionLayer;

use crate::AppState;

pub use api::{AssessResponse, FieldSchema, HealthResponse, SchemaResponse};
pub use pages::HtmlError;

/// Create the HTTP router with all routes configured
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(pages::index))
        .route("/assess", post(pages::submit_assessment))
        .route("/static/*path", get(static_files::static_handler))
        .route("/api/health", get(api::health))
        .route("/api/schema", get(api::schema))
        .route("/api/assess", post(api::assess))
        .layer(CompressionLayer::new())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorResponse;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use bilharzia_core::{Answers, AssessmentRecord, Field, LogisticModel, ReferenceDataset};
    use std::collections::BTreeMap;

    /// Constant model: sigmoid(intercept) for every record
    fn server_with_intercept(intercept: f64) -> TestServer {
        let model = LogisticModel {
            intercept,
            weights: BTreeMap::from([(
                "Haematuria".to_string(),
                BTreeMap::from([("Yes".to_string(), 4.0)]),
            )]),
        };
        let dataset = ReferenceDataset::new(
            vec!["Age".into(), "Haematuria".into()],
            vec![vec!["10 - 14 Years".into(), "No".into()]],
        );
        let state = Arc::new(AppState::new(Arc::new(model), dataset));
        TestServer::new(create_router(state)).unwrap()
    }

    fn default_answers() -> Answers {
        Answers::from(&AssessmentRecord::default())
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let server = server_with_intercept(-2.0);

        let response = server.get("/api/health").await;
        response.assert_status_ok();

        let body: HealthResponse = response.json();
        assert_eq!(body.status, "ok");
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(body.model_kind, "one_hot_logistic");
        assert_eq!(body.model_features, 1);
        assert_eq!(body.dataset_rows, 1);
    }

    #[tokio::test]
    async fn test_schema_lists_all_fields() {
        let server = server_with_intercept(0.0);

        let body: SchemaResponse = server.get("/api/schema").await.json();
        assert_eq!(body.fields.len(), Field::COUNT);
        assert_eq!(body.fields[0].key, "sex");
        assert_eq!(body.fields[0].choices, ["Female", "Male"]);
        assert_eq!(body.fields[6].column, "source of drinking water");
    }

    #[tokio::test]
    async fn test_default_page_is_overview() {
        let server = server_with_intercept(0.0);

        let response = server.get("/").await;
        response.assert_status_ok();
        let html = response.text();
        assert!(html.contains("<h2>Schistosoma haematobium</h2>"));
        assert!(html.contains("<option value=\"overview\" selected>"));
    }

    #[tokio::test]
    async fn test_page_selection_by_title_and_slug() {
        let server = server_with_intercept(0.0);

        let about = server
            .get("/")
            .add_query_param("page", "About Schistosomiasis")
            .await
            .text();
        assert!(about.contains("About Schistosomiasis (Bilharzia)"));

        let form = server
            .get("/")
            .add_query_param("page", "assessment")
            .await
            .text();
        assert!(form.contains("Personal Risk Assessment"));
        assert!(!form.contains("Risk Assessment Results"));
    }

    #[tokio::test]
    async fn test_repeated_navigation_is_identical() {
        let server = server_with_intercept(0.0);

        for slug in ["overview", "about"] {
            let first = server.get("/").add_query_param("page", slug).await.text();
            let second = server.get("/").add_query_param("page", slug).await.text();
            assert_eq!(first, second);
        }
    }

    #[tokio::test]
    async fn test_get_with_answers_never_assesses() {
        let server = server_with_intercept(3.0);

        let html = server
            .get("/")
            .add_query_param("page", "assessment")
            .add_query_param("haematuria", "Yes")
            .await
            .text();
        assert!(!html.contains("HIGH RISK"));
        assert!(!html.contains("LOW RISK"));
    }

    #[tokio::test]
    async fn test_form_submit_high_risk() {
        let server = server_with_intercept(-2.0);
        let answers = default_answers().with(Field::Haematuria, "Yes");

        let response = server.post("/assess").form(&answers).await;
        response.assert_status_ok();
        let html = response.text();
        assert!(html.contains("HIGH RISK"));
        assert!(!html.contains("LOW RISK"));
        assert!(html.contains("88.1%"));
        assert!(html.contains("Important Recommendations:"));
        assert!(html.contains("<option value=\"Yes\" selected>Yes</option>"));
    }

    #[tokio::test]
    async fn test_form_submit_low_risk() {
        let server = server_with_intercept(-2.0);

        let html = server.post("/assess").form(&default_answers()).await.text();
        assert!(html.contains("LOW RISK"));
        assert!(html.contains("11.9%"));
        assert!(html.contains("Preventative Measures:"));
    }

    #[tokio::test]
    async fn test_form_submit_rejects_unknown_choice() {
        let server = server_with_intercept(0.0);
        let answers = default_answers().with(Field::Sex, "Other");

        let response = server.post("/assess").form(&answers).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert!(response.text().contains("Invalid answer for sex"));
    }

    #[tokio::test]
    async fn test_form_rejection_keeps_valid_selections() {
        let server = server_with_intercept(0.0);
        let answers = default_answers()
            .with(Field::Sex, "Other")
            .with(Field::Haematuria, "Yes");

        let html = server.post("/assess").form(&answers).await.text();
        assert!(html.contains("<option value=\"Yes\" selected>Yes</option>"));
        assert!(html.contains("<option value=\"Female\" selected>Female</option>"));
        assert!(!html.contains("Risk Assessment Results"));
    }

    #[tokio::test]
    async fn test_form_submit_without_form_body_is_bad_request() {
        let server = server_with_intercept(0.0);

        let response = server.post("/assess").text("sex=Male").await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let html = response.text();
        assert!(html.contains("callout-error"));
        assert!(html.contains("Assess Risk"));
    }

    #[tokio::test]
    async fn test_api_assess() {
        let server = server_with_intercept(-2.0);
        let answers = default_answers().with(Field::Haematuria, "Yes");

        let response = server.post("/api/assess").json(&answers).await;
        response.assert_status_ok();

        let body: AssessResponse = response.json();
        assert_eq!(body.class, 1);
        assert_eq!(body.risk_level, "HIGH RISK");
        assert_eq!(body.probability_display, "88.1%");
        assert!((body.probabilities[0] + body.probabilities[1] - 1.0).abs() < 1e-9);
        assert_eq!(body.answers.get(Field::Haematuria), Some("Yes"));
    }

    #[tokio::test]
    async fn test_api_assess_missing_answer() {
        let server = server_with_intercept(0.0);
        let mut answers = default_answers();
        answers.0.remove("age");

        let response = server.post("/api/assess").json(&answers).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorResponse = response.json();
        assert_eq!(body.code, "invalid_answers");
    }

    #[tokio::test]
    async fn test_api_assess_wrong_value_type_is_bad_request() {
        let server = server_with_intercept(0.0);

        let response = server
            .post("/api/assess")
            .json(&serde_json::json!({ "sex": 1 }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorResponse = response.json();
        assert_eq!(body.code, "invalid_answers");
        assert!(body.error.starts_with("invalid request body"));
    }

    #[tokio::test]
    async fn test_api_assess_non_object_body_is_bad_request() {
        let server = server_with_intercept(0.0);

        let response = server
            .post("/api/assess")
            .json(&serde_json::json!(["x"]))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorResponse = response.json();
        assert_eq!(body.code, "invalid_answers");
    }

    #[tokio::test]
    async fn test_stylesheet_is_served() {
        let server = server_with_intercept(0.0);

        let response = server.get("/static/dashboard.css").await;
        response.assert_status_ok();
        assert!(response.text().contains(".metric-card"));

        server
            .get("/static/nope.css")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}
