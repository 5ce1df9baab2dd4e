//! # rewards-store: Receipt Storage for Receipt Rewards
//!
//! Assigns ids to accepted receipts and keeps them for later points lookups.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Receipt Rewards Data Flow                           │
//! │                                                                         │
//! │  POST /receipts/process (validated receipt)                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐    │
//! │  │                  rewards-store (THIS CRATE)                     │    │
//! │  │                                                                 │    │
//! │  │   ┌────────────────┐          ┌────────────────────────────┐   │   │
//! │  │   │   identity     │          │        repository          │   │   │
//! │  │   │                │          │                            │   │   │
//! │  │   │ IdStrategy     │─────────►│ ReceiptRepository (trait)  │   │   │
//! │  │   │ ReceiptId      │          │ MemoryReceiptRepository    │   │   │
//! │  │   └────────────────┘          └────────────────────────────┘   │   │
//! │  └─────────────────────────────────────────────────────────────────┘    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  GET /receipts/{id}/points → rewards-core::compute_points               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`identity`] - Receipt ids and the id policy
//! - [`repository`] - Store trait and in-memory implementation
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust
//! use rewards_core::{Item, Receipt};
//! use rewards_store::{IdStrategy, MemoryReceiptRepository, ReceiptRepository};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let repo = MemoryReceiptRepository::new(IdStrategy::ContentHash);
//! let receipt = Receipt {
//!     retailer: "Walgreens".to_string(),
//!     purchase_date: "2022-01-02".to_string(),
//!     purchase_time: "08:13".to_string(),
//!     items: vec![Item::new("Pepsi - 12-oz", "1.25")],
//!     total: "1.25".to_string(),
//! };
//!
//! let stored = repo.insert(receipt.clone()).await.unwrap();
//! assert!(repo.insert(receipt).await.is_err()); // same content, same id
//! assert_eq!(repo.get(&stored.id).await.unwrap().id, stored.id);
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod identity;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use identity::{IdStrategy, ParseIdStrategyError, ReceiptId};
pub use repository::{MemoryReceiptRepository, ReceiptRepository, StoredReceipt};
