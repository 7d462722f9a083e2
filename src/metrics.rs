use axum::{
    Router,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    routing::get,
};
use yoga_core::AppError;

use crate::state::AppState;

/// Prometheus scrape endpoint. Answers 404 while metrics are disabled.
pub async fn metrics_handler(State(state): State<AppState>) -> Response {
    match &state.metrics_handle {
        Some(handle) => (
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            handle.render(),
        )
            .into_response(),
        None => AppError::not_found("Metrics are disabled").into_response(),
    }
}

pub fn init_metrics_router() -> Router<AppState> {
    Router::new().route("/metrics", get(metrics_handler))
}
