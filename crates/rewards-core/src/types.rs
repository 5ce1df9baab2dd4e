//! # Domain Types
//!
//! The receipt model submitted by clients and scored by the points engine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌──────────────────────┐        ┌──────────────────────┐               │
//! │  │       Receipt        │        │        Item          │               │
//! │  │  ──────────────────  │  1..n  │  ──────────────────  │               │
//! │  │  retailer            │───────►│  shortDescription    │               │
//! │  │  purchaseDate        │        │  price  ("6.49")     │               │
//! │  │  purchaseTime        │        └──────────────────────┘               │
//! │  │  items               │                                               │
//! │  │  total  ("35.35")    │                                               │
//! │  └──────────────────────┘                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why Strings?
//! Amounts, dates and times are kept exactly as submitted. `"10.00"` and
//! `"10"` score differently (the round-dollar rule is a suffix test), so
//! parsing them into numbers at decode time would lose information.
//!
//! Absent and `null` JSON fields decode as empty values so that the
//! validator, not the decoder, reports them as missing.

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

// =============================================================================
// Item
// =============================================================================

/// One line item on a receipt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct Item {
    /// Text label printed on the receipt.
    #[serde(deserialize_with = "null_as_empty")]
    pub short_description: String,

    /// Decimal amount as text, e.g. `"6.49"`.
    #[serde(deserialize_with = "null_as_empty")]
    pub price: String,
}

impl Item {
    /// Creates an item from a description and price.
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Item {
            short_description: short_description.into(),
            price: price.into(),
        }
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// One purchase event.
///
/// Constructed once by decoding client input, validated, then treated as
/// immutable. Nothing in this crate mutates a receipt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct Receipt {
    /// Store name.
    #[serde(deserialize_with = "null_as_empty")]
    pub retailer: String,

    /// Calendar date as `YYYY-MM-DD`.
    #[serde(deserialize_with = "null_as_empty")]
    pub purchase_date: String,

    /// Time of day as `HH:MM` (24-hour).
    #[serde(deserialize_with = "null_as_empty")]
    pub purchase_time: String,

    /// Line items, in submission order.
    #[serde(deserialize_with = "null_as_empty")]
    pub items: Vec<Item>,

    /// Decimal amount as text, e.g. `"35.35"`.
    #[serde(deserialize_with = "null_as_empty")]
    pub total: String,
}

/// Decodes `null` as the type's empty value.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receipt_decodes_camel_case() {
        let json = r#"{
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "items": [
                {"shortDescription": "Mountain Dew 12PK", "price": "6.49"}
            ],
            "total": "6.49"
        }"#;

        let receipt: Receipt = serde_json::from_str(json).unwrap();
        assert_eq!(receipt.retailer, "Target");
        assert_eq!(receipt.purchase_date, "2022-01-01");
        assert_eq!(receipt.purchase_time, "13:01");
        assert_eq!(receipt.items, vec![Item::new("Mountain Dew 12PK", "6.49")]);
        assert_eq!(receipt.total, "6.49");
    }

    #[test]
    fn test_absent_fields_decode_as_empty() {
        let receipt: Receipt = serde_json::from_str(r#"{"retailer": "Target"}"#).unwrap();
        assert_eq!(receipt.retailer, "Target");
        assert!(receipt.purchase_date.is_empty());
        assert!(receipt.items.is_empty());
        assert!(receipt.total.is_empty());
    }

    #[test]
    fn test_null_fields_decode_as_empty() {
        let json = r#"{
            "retailer": null,
            "purchaseDate": "2022-01-01",
            "purchaseTime": null,
            "items": [{"shortDescription": null, "price": "1.25"}],
            "total": null
        }"#;

        let receipt: Receipt = serde_json::from_str(json).unwrap();
        assert!(receipt.retailer.is_empty());
        assert_eq!(receipt.purchase_date, "2022-01-01");
        assert!(receipt.purchase_time.is_empty());
        assert_eq!(receipt.items, vec![Item::new("", "1.25")]);
        assert!(receipt.total.is_empty());

        let receipt: Receipt = serde_json::from_str(r#"{"items": null}"#).unwrap();
        assert!(receipt.items.is_empty());
    }

    #[test]
    fn test_wrong_types_still_fail() {
        assert!(serde_json::from_str::<Receipt>(r#"{"retailer": 42}"#).is_err());
        assert!(serde_json::from_str::<Receipt>(r#"{"items": "none"}"#).is_err());
    }

    #[test]
    fn test_amounts_keep_trailing_zeros() {
        let receipt: Receipt = serde_json::from_str(r#"{"total": "10.00"}"#).unwrap();
        let json = serde_json::to_value(&receipt).unwrap();
        assert_eq!(json["total"], "10.00");
        assert_eq!(json["purchaseDate"], "");
    }

    #[test]
    fn test_item_order_preserved() {
        let json = r#"{"items": [
            {"shortDescription": "b", "price": "2.00"},
            {"shortDescription": "a", "price": "1.00"}
        ]}"#;
        let receipt: Receipt = serde_json::from_str(json).unwrap();
        assert_eq!(receipt.items[0].short_description, "b");
        assert_eq!(receipt.items[1].short_description, "a");
    }
}
