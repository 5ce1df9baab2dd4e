//! # rewards-core: Pure Business Logic for Receipt Rewards
//!
//! This crate validates submitted receipts and scores them. Everything here
//! is a pure function with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Receipt Rewards Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐    │
//! │  │                    HTTP API (axum)                              │    │
//! │  │   POST /receipts/process        GET /receipts/{id}/points      │   │
//! │  └──────────────┬─────────────────────────────────┬────────────────┘    │
//! │                 │ validate_receipt                │ compute_points      │
//! │  ┌──────────────▼─────────────────────────────────▼────────────────┐    │
//! │  │               ★ rewards-core (THIS CRATE) ★                     │    │
//! │  │                                                                 │    │
//! │  │     ┌───────────┐       ┌────────────┐       ┌───────────┐     │   │
//! │  │     │   types   │       │ validation │       │  points   │     │   │
//! │  │     │  Receipt  │       │  presence  │       │  7 rules  │     │   │
//! │  │     │   Item    │       │  formats   │       │  summed   │     │   │
//! │  │     └───────────┘       └────────────┘       └───────────┘     │   │
//! │  │                                                                 │    │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘    │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐    │
//! │  │                rewards-store (ids + repository)                 │    │
//! │  └─────────────────────────────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Receipt and Item
//! - [`validation`] - Presence and format checks
//! - [`points`] - Points rules and the scoring engine
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same receipt in, same verdict and points out
//! 2. **No I/O**: safe to call from any thread without synchronization
//! 3. **Text Preserved**: amounts and dates stay as submitted until a rule
//!    needs a number
//! 4. **Explicit Errors**: validation is a verdict, scoring failures are typed
//!
//! ## Example Usage
//!
//! ```rust
//! use rewards_core::{compute_points, validate_receipt, Item, Receipt};
//!
//! let receipt = Receipt {
//!     retailer: "Target".to_string(),
//!     purchase_date: "2022-01-01".to_string(),
//!     purchase_time: "13:01".to_string(),
//!     items: vec![
//!         Item::new("Mountain Dew 12PK", "6.49"),
//!         Item::new("Emils Cheese Pizza", "12.25"),
//!         Item::new("Knorr Creamy Chicken", "1.26"),
//!         Item::new("Doritos Nacho Cheese", "3.35"),
//!         Item::new("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
//!     ],
//!     total: "35.35".to_string(),
//! };
//!
//! assert!(validate_receipt(&receipt).is_acceptable());
//! assert_eq!(compute_points(&receipt).unwrap(), 28);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod points;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use points::{PointsBreakdown, PointsRule, RuleContribution};
pub use types::*;
pub use validation::ReceiptVerdict;

// =============================================================================
// Entry Points
// =============================================================================

/// Validates a decoded receipt, reporting presence and format separately.
pub fn validate_receipt(receipt: &Receipt) -> ReceiptVerdict {
    validation::validate_receipt(receipt)
}

/// Computes the reward points for a validated receipt.
///
/// An error means "points unavailable", never "zero points".
pub fn compute_points(receipt: &Receipt) -> CoreResult<i64> {
    points::score(receipt)
}

// =============================================================================
// Points Constants
// =============================================================================

/// Bonus when the total has no cents (`"9.00"`).
pub const ROUND_DOLLAR_POINTS: i64 = 50;

/// Bonus when the total is a multiple of 0.25.
pub const QUARTER_MULTIPLE_POINTS: i64 = 25;

/// Awarded for every complete pair of items.
pub const ITEM_PAIR_POINTS: i64 = 5;

/// Item price multiplier for descriptions whose trimmed length is a
/// multiple of 3. The product is rounded up.
pub const DESCRIPTION_PRICE_MULTIPLIER: f64 = 0.2;

/// Bonus when the purchase day is odd.
pub const ODD_DAY_POINTS: i64 = 6;

/// Bonus for purchases strictly between these two `HH:MM` times.
pub const AFTERNOON_WINDOW_POINTS: i64 = 10;
pub const AFTERNOON_WINDOW_START: &str = "14:00";
pub const AFTERNOON_WINDOW_END: &str = "16:00";
