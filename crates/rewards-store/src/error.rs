//! # Store Error Types
//!
//! Error types for receipt storage operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  ReceiptRepository (insert / get)                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module)                                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in HTTP app) ← 404 / 409 with {"Error": "..."}               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Receipt storage errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No receipt is stored under this id.
    #[error("Receipt not found: {id}")]
    NotFound { id: String },

    /// A receipt is already stored under this id.
    ///
    /// ## When This Occurs
    /// - The same receipt content is submitted twice under the
    ///   content-hash id strategy
    #[error("Receipt already exists: {id}")]
    Duplicate { id: String },
}

impl StoreError {
    /// Creates a NotFound error for a receipt id.
    pub fn not_found(id: impl Into<String>) -> Self {
        StoreError::NotFound { id: id.into() }
    }

    /// Creates a Duplicate error for a receipt id.
    pub fn duplicate(id: impl Into<String>) -> Self {
        StoreError::Duplicate { id: id.into() }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
