use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::orchestrator::{DrawOutcome, Orchestrator};
use crate::selection::RandomSource;

/// Shared per-request state for the HTTP facade.
pub struct AppState<R: RandomSource> {
    pub orchestrator: Orchestrator<R>,
}

pub fn router<R: RandomSource + 'static>(state: Arc<AppState<R>>) -> Router {
    Router::new()
        .route("/next-review", get(next_review::<R>))
        .route("/status", get(status::<R>))
        .route("/health", get(health_check))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

async fn next_review<R: RandomSource + 'static>(
    State(state): State<Arc<AppState<R>>>,
) -> (StatusCode, Json<Value>) {
    match state.orchestrator.draw_next().await {
        Ok(DrawOutcome::Drawn { review, remaining }) => (
            StatusCode::OK,
            Json(json!({
                "done": false,
                "review": review,
                "remaining": remaining,
            })),
        ),
        Ok(DrawOutcome::Exhausted) => (
            StatusCode::OK,
            Json(json!({
                "done": true,
                "message": "No reviews left in file.",
                "review": null,
            })),
        ),
        Err(err) => {
            error!(error = %err, "Draw failed");
            internal_error(&err.to_string())
        }
    }
}

async fn status<R: RandomSource + 'static>(
    State(state): State<Arc<AppState<R>>>,
) -> (StatusCode, Json<Value>) {
    match state.orchestrator.count().await {
        Ok(count) => (StatusCode::OK, Json(json!({ "count": count }))),
        Err(err) => {
            error!(error = %err, "Status query failed");
            internal_error(&err.to_string())
        }
    }
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "next-review",
    }))
}

fn internal_error(message: &str) -> (StatusCode, Json<Value>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": message })),
    )
}
