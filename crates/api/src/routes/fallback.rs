//! Handlers for requests that miss the health endpoint.

use axum::http::{Method, Uri};

use crate::error::ApiError;

/// Any path without a route.
pub async fn not_found(method: Method, uri: Uri) -> ApiError {
    tracing::warn!(%method, path = %uri.path(), "unexpected route targeted");

    ApiError::NotFound(format!("No route for {} {}", method, uri.path()))
}

/// A known path hit with an unsupported method.
pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    tracing::warn!(%method, path = %uri.path(), "unsupported method");

    ApiError::MethodNotAllowed(format!(
        "Method {} not allowed on {}",
        method,
        uri.path()
    ))
}
