pub mod health;

use axum::{extract::DefaultBodyLimit, routing::get, routing::post, Router};

use crate::screening::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/evaluations", post(handlers::handle_evaluate))
        // No upload size limit is enforced by the core
        .layer(DefaultBodyLimit::disable())
        .with_state(state)
}
