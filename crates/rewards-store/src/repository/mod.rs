//! # Repository Module
//!
//! The receipt store abstraction used by the HTTP layer.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  HTTP handler                                                           │
//! │       │                                                                 │
//! │       │  state.receipts.insert(receipt)                                 │
//! │       ▼                                                                 │
//! │  dyn ReceiptRepository                                                  │
//! │  ├── insert(&self, receipt)  → StoredReceipt | Duplicate                │
//! │  ├── get(&self, id)          → StoredReceipt | NotFound                 │
//! │  └── len(&self)                                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  MemoryReceiptRepository (RwLock<HashMap<ReceiptId, StoredReceipt>>)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`MemoryReceiptRepository`] - In-process map, lost on restart

pub mod memory;

pub use memory::MemoryReceiptRepository;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rewards_core::Receipt;

use crate::error::StoreResult;
use crate::identity::ReceiptId;

/// A receipt accepted into the store.
///
/// Receipts are immutable once stored.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredReceipt {
    pub id: ReceiptId,
    pub receipt: Receipt,
    pub accepted_at: DateTime<Utc>,
}

/// Storage for accepted receipts, keyed by id.
///
/// Implementations own id assignment so that duplicate detection and
/// insertion happen under one lock.
#[async_trait]
pub trait ReceiptRepository: Send + Sync {
    /// Assigns an id and stores the receipt.
    ///
    /// # Errors
    /// `StoreError::Duplicate` if a receipt is already stored under the
    /// assigned id. The stored receipt is left unchanged.
    async fn insert(&self, receipt: Receipt) -> StoreResult<StoredReceipt>;

    /// Looks up a receipt by id.
    ///
    /// # Errors
    /// `StoreError::NotFound` if no receipt has that id.
    async fn get(&self, id: &ReceiptId) -> StoreResult<StoredReceipt>;

    /// Number of stored receipts.
    async fn len(&self) -> usize;

    /// True if nothing has been stored yet.
    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
