//! HTTP endpoint layer.

use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use crate::store::TaskStore;

pub mod tasks;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<TaskStore>,
}

/// Build the HTTP router for the task service.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/tasks", get(tasks::list).post(tasks::create))
        .route(
            "/tasks/{id}",
            get(tasks::get_by_id)
                .patch(tasks::update)
                .delete(tasks::remove),
        )
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}
