//! HTTP routes.
//!
//! | Method | Path                    | Handler                     |
//! |--------|-------------------------|-----------------------------|
//! | POST   | `/receipts/process`     | [`receipts::process_receipt`] |
//! | GET    | `/receipts/{id}/points` | [`receipts::get_points`]    |
//! | GET    | `/health`               | [`health::health`]          |
//!
//! Other methods on the receipt paths get a JSON 405, unknown paths a
//! JSON 404.

pub mod health;
pub mod receipts;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;

use crate::AppState;

/// Builds the application router.
pub fn build_router(state: Arc<AppState>) -> Router {
    let max_body_bytes = state.config.max_body_bytes;

    Router::new()
        .route(
            "/receipts/process",
            post(receipts::process_receipt).fallback(receipts::method_not_allowed),
        )
        .route(
            "/receipts/{id}/points",
            get(receipts::get_points).fallback(receipts::method_not_allowed),
        )
        .route("/health", get(health::health))
        .fallback(receipts::not_found)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(state)
}
