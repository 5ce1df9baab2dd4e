//! # Receipt Rewards API
//!
//! HTTP server for submitting receipts and reading their reward points.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Rewards API Server                               │
//! │                                                                         │
//! │  Client ──► HTTP (8080) ──► routes ──► rewards-core (validate, score)   │
//! │                               │                                         │
//! │                               ▼                                         │
//! │                        rewards-store                                    │
//! │                   (Arc<dyn ReceiptRepository>)                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `HTTP_HOST` - Interface to bind (default: 0.0.0.0)
//! - `HTTP_PORT` - HTTP server port (default: 8080)
//! - `ID_STRATEGY` - `content_hash` (default) or `random`
//! - `MAX_BODY_BYTES` - Request body limit (default: 65536)
//! - `RUST_LOG` - Log filter (default: info)

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use rewards_store::{MemoryReceiptRepository, ReceiptRepository};

// Re-exports
pub use config::{ApiConfig, ConfigError};
pub use error::ApiError;
pub use routes::build_router;

/// Shared application state.
pub struct AppState {
    pub receipts: Arc<dyn ReceiptRepository>,
    pub config: ApiConfig,
}

impl AppState {
    /// Creates state backed by an in-memory repository using the
    /// configured id strategy.
    pub fn in_memory(config: ApiConfig) -> Self {
        AppState {
            receipts: Arc::new(MemoryReceiptRepository::new(config.id_strategy)),
            config,
        }
    }

    /// Creates state around an existing repository.
    pub fn with_repository(config: ApiConfig, receipts: Arc<dyn ReceiptRepository>) -> Self {
        AppState { receipts, config }
    }
}
