//! # In-Memory Receipt Repository
//!
//! Keeps accepted receipts in a map for the life of the process.
//!
//! ## Thread Safety
//! The map sits behind a `tokio::sync::RwLock`:
//! 1. Points lookups only read and may run concurrently
//! 2. Submissions take the write lock for the duplicate check and insert
//! 3. Handlers hold the repository through an `Arc`, never a global

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use rewards_core::Receipt;
use tokio::sync::RwLock;
use tracing::debug;

use super::{ReceiptRepository, StoredReceipt};
use crate::error::{StoreError, StoreResult};
use crate::identity::{IdStrategy, ReceiptId};

/// In-memory receipt repository.
#[derive(Debug, Default)]
pub struct MemoryReceiptRepository {
    strategy: IdStrategy,
    receipts: RwLock<HashMap<ReceiptId, StoredReceipt>>,
}

impl MemoryReceiptRepository {
    /// Creates an empty repository that assigns ids with `strategy`.
    pub fn new(strategy: IdStrategy) -> Self {
        MemoryReceiptRepository {
            strategy,
            receipts: RwLock::new(HashMap::new()),
        }
    }

    /// The id policy this repository uses.
    pub fn strategy(&self) -> IdStrategy {
        self.strategy
    }
}

#[async_trait]
impl ReceiptRepository for MemoryReceiptRepository {
    async fn insert(&self, receipt: Receipt) -> StoreResult<StoredReceipt> {
        let id = self.strategy.assign(&receipt);

        let mut receipts = self.receipts.write().await;
        if receipts.contains_key(&id) {
            return Err(StoreError::duplicate(id.as_str()));
        }

        let stored = StoredReceipt {
            id: id.clone(),
            receipt,
            accepted_at: Utc::now(),
        };
        receipts.insert(id, stored.clone());

        debug!(id = %stored.id, count = receipts.len(), "Receipt stored");
        Ok(stored)
    }

    async fn get(&self, id: &ReceiptId) -> StoreResult<StoredReceipt> {
        self.receipts
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(id.as_str()))
    }

    async fn len(&self) -> usize {
        self.receipts.read().await.len()
    }
}
