//! Request-counting middleware.
//!
//! Layered outermost on both routers so every inbound request is counted
//! before route matching, fallback 404s included.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use crate::app_state::AppState;

/// Increment the request counter, then delegate to the matched handler.
pub async fn count_requests(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    state.request_count().inc();
    next.run(request).await
}
