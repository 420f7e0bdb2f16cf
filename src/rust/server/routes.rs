//! Route definitions

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{accuracy, health, predict, AppState};

/// Create the API router
pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(health))
        .route("/predict", post(predict))
        .route("/accuracy", get(accuracy))
}
