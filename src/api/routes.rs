use std::time::Duration;

use axum::{Router, http::StatusCode, routing::get};
use sqlx::SqlitePool;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::api::handlers;

/// Shared handler state. The pool is built once at startup and handed in here.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub request_timeout: Duration,
}

async fn health() -> &'static str {
    "healthy"
}

pub fn app_router(state: AppState) -> Router {
    let timeout =
        TimeoutLayer::with_status_code(StatusCode::SERVICE_UNAVAILABLE, state.request_timeout);
    Router::new()
        .route("/health", get(health))
        .route("/listPositions", get(handlers::list_positions))
        .route("/tradesForPosition", get(handlers::trades_for_position))
        .layer(timeout)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
