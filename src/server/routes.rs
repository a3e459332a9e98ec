//! Axum route handlers for the milestone service.
//!
//! # Routes
//!
//! - `GET /`       — Returns the milestone list as a JSON array of
//!   `{"message": "<text>"}` objects, in fixed order
//! - `GET /health` — Returns `{"status": "ok", "version": ..., "service": ...}`

use axum::{response::IntoResponse, routing::get, Json, Router};
use tower_http::cors::CorsLayer;

use crate::milestones::pipeline_milestones;

/// Build the axum router with all routes.
///
/// The handlers are stateless, so the router carries no shared state.
pub fn app_router() -> Router {
    Router::new()
        .route("/", get(milestones_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
}

/// GET / — the fixed milestone list.
///
/// Takes no inputs; query parameters are ignored by routing. The body is
/// identical on every call.
async fn milestones_handler() -> impl IntoResponse {
    Json(pipeline_milestones())
}

/// GET /health — liveness probe.
async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION,
        "service": "cicd-pipeline",
    }))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
