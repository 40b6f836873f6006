//! REST endpoints for the chat widget.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tracing::warn;

use super::engine::ChatEngine;
use super::responses::fallback_response;
use super::state::ExplorationPhase;

const ANONYMOUS_USER: &str = "anonymous";

/// Shared state for chat routes.
#[derive(Clone)]
pub struct ChatRouteState {
    pub engine: Arc<ChatEngine>,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}

/// One widget message. Only the content is read; other fields are ignored.
#[derive(Debug, Deserialize)]
pub struct ChatMessage {
    pub content: String,
}

/// POST /api/chat
///
/// Answers the last message in `messages`. Failures still return 200, with
/// a keyword-picked fallback reply in place of the guided one.
async fn post_chat(
    State(state): State<ChatRouteState>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> impl IntoResponse {
    let request = match body {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "Unreadable chat request, using fallback");
            return fallback_body("");
        }
    };

    let user_id = request
        .user_id
        .filter(|id| !id.trim().is_empty())
        .unwrap_or_else(|| ANONYMOUS_USER.to_string());

    let Some(last) = request.messages.last() else {
        warn!(user_id = %user_id, "Chat request has no messages, using fallback");
        return fallback_body("");
    };

    match state.engine.respond(&user_id, &last.content).await {
        Ok(reply) => Json(serde_json::json!({
            "id": reply.id,
            "response": reply.response,
            "success": true,
            "conversationPhase": reply.phase,
        }))
        .into_response(),
        Err(e) => {
            warn!(user_id = %user_id, error = %e, "Chat reply failed, using fallback");
            fallback_body(&last.content)
        }
    }
}

fn fallback_body(message: &str) -> axum::response::Response {
    Json(serde_json::json!({
        "error": "There was an error processing your request",
        "response": fallback_response(message),
        "conversationPhase": ExplorationPhase::Initial,
    }))
    .into_response()
}

/// GET /api/chat/{user_id}/recommendations
///
/// Focus areas, careers and courses for a live conversation, or 404.
async fn get_recommendations(
    State(state): State<ChatRouteState>,
    Path(user_id): Path<String>,
) -> impl IntoResponse {
    match state.engine.recommendations(&user_id).await {
        Some((recs, phase)) => Json(serde_json::json!({
            "focusAreas": recs.focus_areas,
            "careers": recs.careers,
            "courses": recs.courses,
            "summary": recs.to_markdown(),
            "phase": phase,
        }))
        .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({"error": "No active conversation"})),
        )
            .into_response(),
    }
}

/// Build the chat REST routes.
pub fn chat_routes(state: ChatRouteState) -> Router {
    Router::new()
        .route("/api/chat", post(post_chat))
        .route("/api/chat/{user_id}/recommendations", get(get_recommendations))
        .with_state(state)
}
