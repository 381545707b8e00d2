//! Route table.

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handler::convert_handler;
use crate::state::AppState;

/// Build the gateway router: a single `GET /convert` route with request tracing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/convert", get(convert_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
