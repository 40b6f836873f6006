//! REST endpoint for questionnaire submissions.

use std::sync::Arc;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use tracing::{error, info, warn};

use super::store::{Submission, SubmissionStore};

/// Shared state for questionnaire routes.
#[derive(Clone)]
pub struct QuestionnaireRouteState {
    pub store: Arc<dyn SubmissionStore>,
}

/// POST /api/submit-questionnaire
///
/// Accepts any JSON value. Storage failures are logged, never reported.
async fn post_submission(
    State(state): State<QuestionnaireRouteState>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> Response {
    let payload = match body {
        Ok(Json(payload)) => payload,
        Err(rejection) => {
            warn!(error = %rejection, "Unreadable questionnaire submission");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({
                    "success": false,
                    "message": "Failed to process questionnaire submission",
                })),
            )
                .into_response();
        }
    };

    let submission = Submission::new(payload);
    match state.store.save(&submission).await {
        Ok(()) => info!(submission_id = %submission.id, "Questionnaire submitted"),
        Err(e) => error!(submission_id = %submission.id, error = %e, "Questionnaire not stored"),
    }

    Json(serde_json::json!({
        "success": true,
        "message": "Questionnaire submitted successfully",
    }))
    .into_response()
}

/// Build the questionnaire REST routes.
pub fn questionnaire_routes(state: QuestionnaireRouteState) -> Router {
    Router::new()
        .route("/api/submit-questionnaire", post(post_submission))
        .with_state(state)
}
