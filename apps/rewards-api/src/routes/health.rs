//! Health check handler.
//!
//! Liveness for monitoring: the store is in-process, so if the handler runs
//! the service is serving.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::Serialize;

use crate::AppState;

/// Health check body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub receipts: usize,
    pub id_strategy: String,
    pub server_time: String,
}

/// `GET /health`
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "serving",
        version: env!("CARGO_PKG_VERSION"),
        receipts: state.receipts.len().await,
        id_strategy: state.config.id_strategy.to_string(),
        server_time: Utc::now().to_rfc3339(),
    })
}
