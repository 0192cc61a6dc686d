/*
 * Responsibility
 * - URL 構造を定義 (/, /health)
 */
use axum::{Router, routing::get};

use crate::api::handlers::{health::health, root::root};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
}
