//! # Validation Module
//!
//! Receipt validation for Receipt Rewards.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: JSON decoding (HTTP app)                                      │
//! │  └── Shape only; absent fields decode as empty                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: has_missing_fields                                            │
//! │  └── Presence only, no parsing                                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: fields_are_valid                                              │
//! │  ├── retailer / descriptions: letters, digits, whitespace, hyphens      │
//! │  ├── purchaseDate: YYYY-MM-DD                                           │
//! │  ├── purchaseTime: HH:MM                                                │
//! │  └── prices / total: digits "." two digits                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every check is a total predicate: malformed input yields `false`, never a
//! panic or an error.
//!
//! ## Usage
//! ```rust
//! use rewards_core::validation::{fields_are_valid, has_missing_fields};
//! use rewards_core::{Item, Receipt};
//!
//! let receipt = Receipt {
//!     retailer: "Target".to_string(),
//!     purchase_date: "2022-01-01".to_string(),
//!     purchase_time: "13:01".to_string(),
//!     items: vec![Item::new("Mountain Dew 12PK", "6.49")],
//!     total: "6.49".to_string(),
//! };
//!
//! assert!(!has_missing_fields(&receipt));
//! assert!(fields_are_valid(&receipt));
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::error::ValidationError;
use crate::types::{Item, Receipt};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Retailer names and item descriptions.
///
/// ASCII only: the `regex` crate's `\s` would also accept NBSP and em-spaces.
static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9 \t\n\f\r\-]+$").expect("name pattern is valid"));

/// Item prices and receipt totals.
///
/// ASCII digits only, so every match parses as `f64`.
static AMOUNT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+\.[0-9]{2}$").expect("amount pattern is valid"));

// =============================================================================
// Verdict
// =============================================================================

/// Outcome of both validator checks.
///
/// The flags are independent so the caller can pick a distinct message for
/// each. `fields_valid` is only meaningful when `missing_fields` is false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptVerdict {
    pub missing_fields: bool,
    pub fields_valid: bool,
}

impl ReceiptVerdict {
    /// True when the receipt may be stored and scored.
    pub const fn is_acceptable(&self) -> bool {
        !self.missing_fields && self.fields_valid
    }

    /// Converts the verdict into the error the client should see.
    ///
    /// Missing fields take precedence over format problems.
    pub fn into_result(self) -> ValidationResult<()> {
        if self.missing_fields {
            return Err(ValidationError::MissingFields);
        }

        if !self.fields_valid {
            return Err(ValidationError::InvalidFields);
        }

        Ok(())
    }
}

/// Runs both checks against a receipt.
pub fn validate_receipt(receipt: &Receipt) -> ReceiptVerdict {
    ReceiptVerdict {
        missing_fields: has_missing_fields(receipt),
        fields_valid: fields_are_valid(receipt),
    }
}

// =============================================================================
// Presence Check
// =============================================================================

/// Returns true if any of the five required fields is empty.
///
/// ## Example
/// ```rust
/// use rewards_core::validation::has_missing_fields;
/// use rewards_core::Receipt;
///
/// assert!(has_missing_fields(&Receipt::default()));
/// ```
pub fn has_missing_fields(receipt: &Receipt) -> bool {
    receipt.retailer.is_empty()
        || receipt.purchase_date.is_empty()
        || receipt.purchase_time.is_empty()
        || receipt.items.is_empty()
        || receipt.total.is_empty()
}

// =============================================================================
// Format Checks
// =============================================================================

/// Returns true if every receipt field has a valid format.
pub fn fields_are_valid(receipt: &Receipt) -> bool {
    retailer_valid(&receipt.retailer)
        && purchase_date_valid(&receipt.purchase_date)
        && purchase_time_valid(&receipt.purchase_time)
        && items_valid(&receipt.items)
        && total_valid(&receipt.total)
}

/// Validates a retailer name.
///
/// ## Rules
/// - At least one character
/// - Only letters, digits, whitespace and hyphens
///
/// ## Example
/// ```rust
/// use rewards_core::validation::retailer_valid;
///
/// assert!(!retailer_valid("M&M Corner Market"));
/// assert!(retailer_valid("Walmart 123"));
/// ```
pub fn retailer_valid(retailer: &str) -> bool {
    NAME_PATTERN.is_match(retailer)
}

/// Validates a purchase date.
///
/// ## Rules
/// - Exactly `YYYY-MM-DD`
/// - Each component parses as an integer
///
/// Month and day ranges are not checked: `"2022-13-45"` passes.
pub fn purchase_date_valid(date: &str) -> bool {
    date.len() == 10
        && date.get(0..4).is_some_and(is_integer)
        && date.get(4..5) == Some("-")
        && date.get(5..7).is_some_and(is_integer)
        && date.get(7..8) == Some("-")
        && date.get(8..10).is_some_and(is_integer)
}

/// Validates a purchase time.
///
/// ## Rules
/// - Exactly `HH:MM`; the unpadded `H:MM` form is rejected
/// - Hour and minute each parse as an integer
pub fn purchase_time_valid(time: &str) -> bool {
    time.len() == 5
        && time.get(0..2).is_some_and(is_integer)
        && time.get(2..3) == Some(":")
        && time.get(3..5).is_some_and(is_integer)
}

/// Validates every item's description and price.
///
/// An empty slice is trivially valid; presence is `has_missing_fields`' job.
pub fn items_valid(items: &[Item]) -> bool {
    items
        .iter()
        .all(|item| description_valid(&item.short_description) && amount_valid(&item.price))
}

/// Validates a receipt total.
pub fn total_valid(total: &str) -> bool {
    amount_valid(total)
}

fn description_valid(description: &str) -> bool {
    NAME_PATTERN.is_match(description)
}

/// Unsigned amount with exactly two decimal digits.
fn amount_valid(amount: &str) -> bool {
    AMOUNT_PATTERN.is_match(amount)
}

/// True if the text parses as a (possibly signed) integer.
fn is_integer(text: &str) -> bool {
    text.parse::<i64>().is_ok()
}

// =============================================================================
// Unit Tests
// =============================================================================
