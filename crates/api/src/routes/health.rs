//! Health check endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use common::StatusRecord;

use crate::clock::Clock;
use crate::routes::AppState;

/// Media type of the health response body.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// GET /api/v1/health: returns a freshly stamped status record.
///
/// Takes no input and has no failure path.
pub async fn check<C: Clock + 'static>(
    State(state): State<Arc<AppState<C>>>,
) -> impl IntoResponse {
    let record = StatusRecord::healthy_at(state.clock.now());

    tracing::debug!(timestamp = %record.timestamp, "serving status record");

    ([(header::CONTENT_TYPE, JSON_CONTENT_TYPE)], Json(record))
}
