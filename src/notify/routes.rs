//! REST endpoint for professor notifications.

use std::sync::Arc;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use tracing::{error, warn};

use super::compose::{SummaryMessage, format_chat_summary};
use super::mailer::Notifier;

/// Shared state for notification routes.
#[derive(Clone)]
pub struct NotifyRouteState {
    pub notifier: Arc<Notifier>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotifyRequest {
    pub email: Option<String>,
    pub summary: Option<String>,
    pub selected_professor: Option<String>,
    /// Raw widget history, summarized when `summary` is absent.
    #[serde(default)]
    pub messages: Vec<SummaryMessage>,
}

fn error_body(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}

fn required(field: Option<String>) -> Option<String> {
    field.filter(|v| !v.trim().is_empty())
}

/// POST /api/notify-professor
///
/// Emails the best-matching professor on the student's behalf.
async fn post_notify(
    State(state): State<NotifyRouteState>,
    body: Result<Json<NotifyRequest>, JsonRejection>,
) -> Response {
    let request = match body {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!(error = %rejection, "Unreadable notify request");
            return error_body(StatusCode::BAD_REQUEST, "Invalid request body");
        }
    };

    let Some(email) = required(request.email) else {
        return error_body(StatusCode::BAD_REQUEST, "Email field is required");
    };
    let summary = match required(request.summary) {
        Some(summary) => summary,
        None if !request.messages.is_empty() => format_chat_summary(&request.messages),
        None => return error_body(StatusCode::BAD_REQUEST, "Summary field is required"),
    };
    let selected = required(request.selected_professor);

    match state
        .notifier
        .notify(&email, &summary, selected.as_deref())
        .await
    {
        Ok(outcome) => Json(serde_json::json!({
            "message": format!("Email sent to Professor {}", outcome.professor_name),
            "professorName": outcome.professor_name,
            "service": outcome.provider,
            "usedFallback": outcome.used_fallback,
        }))
        .into_response(),
        Err(e) => {
            error!(error = %e, "Failed to send professor notification");
            error_body(StatusCode::INTERNAL_SERVER_ERROR, "Failed to send email")
        }
    }
}

/// Build the notification REST routes.
pub fn notify_routes(state: NotifyRouteState) -> Router {
    Router::new()
        .route("/api/notify-professor", post(post_notify))
        .with_state(state)
}
