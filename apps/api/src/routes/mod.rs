pub mod health;
pub mod index;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index::index_handler))
        .route("/health", get(health::health_handler))
        .route("/api/v1/reports/parse", post(handlers::handle_parse))
        .route("/api/v1/reports/analyze", post(handlers::handle_analyze))
        .with_state(state)
}
