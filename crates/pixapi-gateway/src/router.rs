//! Axum router wiring for both listeners.
//!
//! The counting layer is added after the fallback so it wraps everything the
//! router serves; a request is counted exactly once by whichever listener
//! accepted it.

use axum::routing::get;
use axum::Router;

use crate::app_state::AppState;
use crate::{middleware, ops, routes};

pub fn build_app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/hello", get(routes::hello))
        .route("/metrics", get(ops::metrics))
        .fallback(routes::not_found)
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::count_requests,
        ))
        .with_state(state)
}

/// Router for the dedicated metrics listener. Scrapes land on the same
/// counter as application traffic and are themselves counted.
pub fn build_metrics_router(state: AppState) -> Router {
    Router::new()
        .route("/metrics", get(ops::metrics))
        .fallback(routes::not_found)
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::count_requests,
        ))
        .with_state(state)
}
