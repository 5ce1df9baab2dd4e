//! # Receipt Identity
//!
//! How accepted receipts are named.
//!
//! ## Strategies
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        IdStrategy                                       │
//! │                                                                         │
//! │  ContentHash (default)                 Random                           │
//! │  ─────────────────────                 ──────                           │
//! │  sha256(retailer                       UUID v4                          │
//! │         + purchaseDate                                                  │
//! │         + purchaseTime                 Every submission gets a          │
//! │         + (description + price)*       fresh id, duplicates are         │
//! │         + total)                       stored again.                    │
//! │                                                                         │
//! │  Same receipt → same id, so a                                           │
//! │  resubmission is detected as a                                          │
//! │  duplicate.                                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::str::FromStr;

use rewards_core::Receipt;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;
use uuid::Uuid;

// =============================================================================
// Receipt Id
// =============================================================================

/// Identifier of an accepted receipt.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptId(String);

impl ReceiptId {
    /// Wraps an id taken from a request path.
    pub fn new(id: impl Into<String>) -> Self {
        ReceiptId(id.into())
    }

    /// Returns the id as text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Id Strategy
// =============================================================================

/// Policy for assigning ids to new receipts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdStrategy {
    /// Deterministic SHA-256 of the receipt's fields (lowercase hex).
    #[default]
    ContentHash,
    /// A fresh UUID v4 per submission.
    Random,
}

impl IdStrategy {
    /// Assigns an id to a receipt under this policy.
    pub fn assign(&self, receipt: &Receipt) -> ReceiptId {
        match self {
            IdStrategy::ContentHash => content_hash_id(receipt),
            IdStrategy::Random => ReceiptId(Uuid::new_v4().to_string()),
        }
    }

    /// True if the same receipt always gets the same id.
    pub const fn is_deterministic(&self) -> bool {
        matches!(self, IdStrategy::ContentHash)
    }
}

/// An id strategy name could not be recognised.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown id strategy '{0}', expected 'content_hash' or 'random'")]
pub struct ParseIdStrategyError(pub String);

impl FromStr for IdStrategy {
    type Err = ParseIdStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "content_hash" | "content-hash" | "hash" => Ok(IdStrategy::ContentHash),
            "random" | "uuid" => Ok(IdStrategy::Random),
            _ => Err(ParseIdStrategyError(s.to_string())),
        }
    }
}

impl fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdStrategy::ContentHash => f.write_str("content_hash"),
            IdStrategy::Random => f.write_str("random"),
        }
    }
}

/// Hashes the receipt fields, concatenated without separators, in
/// declaration order.
fn content_hash_id(receipt: &Receipt) -> ReceiptId {
    let mut hasher = Sha256::new();
    hasher.update(receipt.retailer.as_bytes());
    hasher.update(receipt.purchase_date.as_bytes());
    hasher.update(receipt.purchase_time.as_bytes());
    for item in &receipt.items {
        hasher.update(item.short_description.as_bytes());
        hasher.update(item.price.as_bytes());
    }
    hasher.update(receipt.total.as_bytes());

    ReceiptId(hex::encode(hasher.finalize()))
}

// =============================================================================
// Unit Tests
// =============================================================================
