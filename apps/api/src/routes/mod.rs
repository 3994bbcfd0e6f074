pub mod cv;
pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/cv/parse", post(cv::handle_parse))
        .route("/api/v1/cv/batch", post(cv::handle_batch))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
