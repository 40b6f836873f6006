//! HTTP application assembly.

use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::chat::{ChatEngine, ChatRouteState, chat_routes};
use crate::notify::{Notifier, NotifyRouteState, notify_routes};
use crate::questionnaire::{QuestionnaireRouteState, SubmissionStore, questionnaire_routes};

/// Services the HTTP routes need.
#[derive(Clone)]
pub struct AppDeps {
    pub engine: Arc<ChatEngine>,
    pub notifier: Arc<Notifier>,
    pub submissions: Arc<dyn SubmissionStore>,
}

/// GET /health
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok", "service": "dcs-guide" }))
}

/// Merge every route group and wrap them in tracing and CORS layers.
pub fn build_router(deps: AppDeps) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(chat_routes(ChatRouteState {
            engine: deps.engine,
        }))
        .merge(notify_routes(NotifyRouteState {
            notifier: deps.notifier,
        }))
        .merge(questionnaire_routes(QuestionnaireRouteState {
            store: deps.submissions,
        }))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
}
