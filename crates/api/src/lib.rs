//! Status provider: the HTTP health-check service.
//!
//! Serves a single unauthenticated `GET /api/v1/health` endpoint returning a
//! freshly stamped [`common::StatusRecord`], with structured logging
//! (tracing) and permissive CORS so a viewer hosted elsewhere can call it.

pub mod clock;
pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use common::HEALTH_PATH;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use clock::{Clock, FixedClock, SystemClock};
pub use routes::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<C: Clock + 'static>(state: Arc<AppState<C>>) -> Router {
    Router::new()
        .route(
            HEALTH_PATH,
            get(routes::health::check::<C>).fallback(routes::fallback::method_not_allowed),
        )
        .fallback(routes::fallback::not_found)
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the default application state backed by the wall clock.
pub fn create_default_state() -> Arc<AppState<SystemClock>> {
    Arc::new(AppState::new(SystemClock))
}
