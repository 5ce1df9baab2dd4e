//! # Points Module
//!
//! The reward points engine: seven independent rules, summed.
//!
//! ## Scoring Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         score(receipt)                                  │
//! │                                                                         │
//! │   Rule                      Reads            Can fail?                  │
//! │   ───────────────────────   ──────────────   ─────────                  │
//! │   1. RetailerName           retailer         no                         │
//! │   2. RoundDollar            total (text)     no                         │
//! │   3. QuarterMultiple        total (number)   yes ──┐                    │
//! │   4. ItemPairs              items.len()      no    │                    │
//! │   5. DescriptionLength      items            yes ──┤                    │
//! │   6. OddDay                 purchaseDate     yes ──┤                    │
//! │   7. AfternoonWindow        purchaseTime     no    │                    │
//! │          │                                         ▼                    │
//! │          ▼                                 CoreError::Parse             │
//! │   Σ contributions (i64)                    (no partial total)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The round-dollar and afternoon-window rules are lexical: they compare
//! text, not parsed values. Amounts are parsed as `f64` and rounded with
//! `ceil`, so a negative item price subtracts points.
//!
//! ## Usage
//! ```rust
//! use rewards_core::points::score;
//! use rewards_core::{Item, Receipt};
//!
//! let receipt = Receipt {
//!     retailer: "M&M Corner Market".to_string(),
//!     purchase_date: "2022-03-20".to_string(),
//!     purchase_time: "14:33".to_string(),
//!     items: vec![Item::new("Gatorade", "2.25"); 4],
//!     total: "9.00".to_string(),
//! };
//!
//! assert_eq!(score(&receipt).unwrap(), 109);
//! ```

use serde::Serialize;

use crate::error::{CoreError, CoreResult};
use crate::types::Receipt;
use crate::{
    AFTERNOON_WINDOW_END, AFTERNOON_WINDOW_POINTS, AFTERNOON_WINDOW_START,
    DESCRIPTION_PRICE_MULTIPLIER, ITEM_PAIR_POINTS, ODD_DAY_POINTS, QUARTER_MULTIPLE_POINTS,
    ROUND_DOLLAR_POINTS,
};

// =============================================================================
// Rules
// =============================================================================

/// A scoring rule.
///
/// `PointsRule::ALL` lists the rules in the order the engine applies them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PointsRule {
    RetailerName,
    RoundDollar,
    QuarterMultiple,
    ItemPairs,
    DescriptionLength,
    OddDay,
    AfternoonWindow,
}

impl PointsRule {
    /// Every rule, in application order.
    pub const ALL: [PointsRule; 7] = [
        PointsRule::RetailerName,
        PointsRule::RoundDollar,
        PointsRule::QuarterMultiple,
        PointsRule::ItemPairs,
        PointsRule::DescriptionLength,
        PointsRule::OddDay,
        PointsRule::AfternoonWindow,
    ];

    /// Stable name used in logs and breakdowns.
    pub const fn name(&self) -> &'static str {
        match self {
            PointsRule::RetailerName => "retailer_name",
            PointsRule::RoundDollar => "round_dollar",
            PointsRule::QuarterMultiple => "quarter_multiple",
            PointsRule::ItemPairs => "item_pairs",
            PointsRule::DescriptionLength => "description_length",
            PointsRule::OddDay => "odd_day",
            PointsRule::AfternoonWindow => "afternoon_window",
        }
    }

    /// Applies this rule to a receipt.
    pub fn apply(&self, receipt: &Receipt) -> CoreResult<i64> {
        match self {
            PointsRule::RetailerName => Ok(retailer_name_points(receipt)),
            PointsRule::RoundDollar => Ok(round_dollar_points(receipt)),
            PointsRule::QuarterMultiple => quarter_multiple_points(receipt),
            PointsRule::ItemPairs => Ok(item_pair_points(receipt)),
            PointsRule::DescriptionLength => description_length_points(receipt),
            PointsRule::OddDay => odd_day_points(receipt),
            PointsRule::AfternoonWindow => Ok(afternoon_window_points(receipt)),
        }
    }
}

/// One point per alphanumeric character in the retailer name.
pub fn retailer_name_points(receipt: &Receipt) -> i64 {
    receipt
        .retailer
        .chars()
        .filter(|c| c.is_alphanumeric())
        .count() as i64
}

/// 50 points if the total ends in `".00"`.
///
/// Pure suffix test on the text: `"-100.00"` and `"x.00"` both qualify,
/// `".00"` alone does not.
pub fn round_dollar_points(receipt: &Receipt) -> i64 {
    let total = receipt.total.as_str();
    if total.len() >= 4 && total.ends_with(".00") {
        ROUND_DOLLAR_POINTS
    } else {
        0
    }
}

/// 25 points if the total is a multiple of 0.25.
///
/// ## Errors
/// `CoreError::Parse` if the total is not a decimal number.
pub fn quarter_multiple_points(receipt: &Receipt) -> CoreResult<i64> {
    let total = parse_amount("total", &receipt.total)?;

    if (total / 0.25) % 1.0 == 0.0 {
        Ok(QUARTER_MULTIPLE_POINTS)
    } else {
        Ok(0)
    }
}

/// 5 points for every two items.
pub fn item_pair_points(receipt: &Receipt) -> i64 {
    (receipt.items.len() / 2) as i64 * ITEM_PAIR_POINTS
}

/// Price-based bonus for items whose trimmed description length is a
/// multiple of 3.
///
/// Each qualifying item adds `ceil(price * 0.2)`. An empty trimmed
/// description qualifies. Negative prices subtract.
///
/// ## Errors
/// `CoreError::Parse` if any item price is not a decimal number, whether or
/// not its description qualifies.
pub fn description_length_points(receipt: &Receipt) -> CoreResult<i64> {
    let mut points = 0;

    for item in &receipt.items {
        let price = parse_amount("price", &item.price)?;

        if item.short_description.trim().len() % 3 == 0 {
            points += (price * DESCRIPTION_PRICE_MULTIPLIER).ceil() as i64;
        }
    }

    Ok(points)
}

/// 6 points if the day in the purchase date is odd.
///
/// ## Errors
/// `CoreError::Parse` if the date is not 10 bytes long or its last two
/// characters are not an integer.
pub fn odd_day_points(receipt: &Receipt) -> CoreResult<i64> {
    let date = receipt.purchase_date.as_str();

    let day = Some(date)
        .filter(|date| date.len() == 10)
        .and_then(|date| date.get(8..))
        .and_then(|day| day.parse::<i64>().ok())
        .ok_or_else(|| CoreError::parse("purchaseDate", date))?;

    if day % 2 == 1 {
        Ok(ODD_DAY_POINTS)
    } else {
        Ok(0)
    }
}

/// 10 points if the purchase time is after 14:00 and before 16:00.
///
/// Compares the zero-padded `HH:MM` text lexically; both bounds exclusive.
pub fn afternoon_window_points(receipt: &Receipt) -> i64 {
    let time = receipt.purchase_time.as_str();
    if time > AFTERNOON_WINDOW_START && time < AFTERNOON_WINDOW_END {
        AFTERNOON_WINDOW_POINTS
    } else {
        0
    }
}

fn parse_amount(field: &str, value: &str) -> CoreResult<f64> {
    value
        .parse::<f64>()
        .map_err(|_| CoreError::parse(field, value))
}

// =============================================================================
// Engine
// =============================================================================

/// Points contributed by a single rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RuleContribution {
    pub rule: PointsRule,
    pub points: i64,
}

/// Per-rule contributions and their sum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PointsBreakdown {
    pub contributions: Vec<RuleContribution>,
    pub total: i64,
}

/// Applies every rule and records what each contributed.
///
/// Stops at the first failing rule; no partial breakdown is returned.
pub fn score_breakdown(receipt: &Receipt) -> CoreResult<PointsBreakdown> {
    let contributions = PointsRule::ALL
        .iter()
        .map(|rule| {
            rule.apply(receipt).map(|points| RuleContribution {
                rule: *rule,
                points,
            })
        })
        .collect::<CoreResult<Vec<_>>>()?;

    let total = contributions.iter().map(|c| c.points).sum();

    Ok(PointsBreakdown {
        contributions,
        total,
    })
}

/// Computes the total reward points for a receipt.
///
/// The receipt is expected to have passed validation; a `CoreError::Parse`
/// here means it did not.
pub fn score(receipt: &Receipt) -> CoreResult<i64> {
    score_breakdown(receipt).map(|breakdown| breakdown.total)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Item;

    fn with_retailer(retailer: &str) -> Receipt {
        Receipt {
            retailer: retailer.to_string(),
            ..Default::default()
        }
    }

    fn with_total(total: &str) -> Receipt {
        Receipt {
            total: total.to_string(),
            ..Default::default()
        }
    }

    fn with_items(items: &[(&str, &str)]) -> Receipt {
        Receipt {
            items: items
                .iter()
                .map(|(description, price)| Item::new(*description, *price))
                .collect(),
            ..Default::default()
        }
    }

    fn target_receipt() -> Receipt {
        Receipt {
            retailer: "Target".to_string(),
            purchase_date: "2022-01-01".to_string(),
            purchase_time: "13:01".to_string(),
            items: vec![
                Item::new("Mountain Dew 12PK", "6.49"),
                Item::new("Emils Cheese Pizza", "12.25"),
                Item::new("Knorr Creamy Chicken", "1.26"),
                Item::new("Doritos Nacho Cheese", "3.35"),
                Item::new("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
            ],
            total: "35.35".to_string(),
        }
    }

    #[test]
    fn test_retailer_name_points() {
        let cases = [
            ("The Stuff Store", 13),
            ("22 Aghast!?!?!", 8),
            ("M&M Corner Market", 14),
            ("(@*& #$)(* @)#$(*/)", 0),
            ("", 0),
        ];
        for (retailer, expected) in cases {
            assert_eq!(
                retailer_name_points(&with_retailer(retailer)),
                expected,
                "{retailer:?}"
            );
        }
    }

    #[test]
    fn test_round_dollar_points() {
        let cases = [
            ("100.00", 50),
            ("-100.00", 50),
            ("0.00", 50),
            ("x.00", 50),
            (".00", 0),
            ("200.50", 0),
            ("150.75", 0),
            ("10", 0),
            ("", 0),
        ];
        for (total, expected) in cases {
            assert_eq!(round_dollar_points(&with_total(total)), expected, "{total:?}");
        }
    }

    #[test]
    fn test_quarter_multiple_points() {
        let cases = [
            ("1.50", 25),
            ("1.78", 0),
            ("0.00", 25),
            ("-2.00", 25),
            ("9.00", 25),
            ("35.35", 0),
        ];
        for (total, expected) in cases {
            assert_eq!(
                quarter_multiple_points(&with_total(total)),
                Ok(expected),
                "{total:?}"
            );
        }
    }

    #[test]
    fn test_quarter_multiple_points_parse_error() {
        for total in ["abc", ""] {
            assert_eq!(
                quarter_multiple_points(&with_total(total)),
                Err(CoreError::parse("total", total))
            );
        }
    }

    #[test]
    fn test_item_pair_points() {
        let item = ("Item", "10.00");
        let cases = [(0, 0), (1, 0), (2, 5), (3, 5), (4, 10)];
        for (count, expected) in cases {
            let receipt = with_items(&vec![item; count]);
            assert_eq!(item_pair_points(&receipt), expected, "{count} items");
        }
    }

    #[test]
    fn test_description_length_points() {
        let cases: [(&[(&str, &str)], i64); 6] = [
            (&[("Apple", "10.00"), ("Banana", "15.00"), ("Grapefruit", "20.00")], 3),
            (&[("Apple", "10.00"), ("Pear", "15.00"), ("Grapefruit", "20.00")], 0),
            (&[("Hat", "1.00")], 1),
            (&[("   ", "5.00")], 1),
            (&[], 0),
            (&[("Apple", "-10.00"), ("Banana", "-15.00")], -3),
        ];
        for (items, expected) in cases {
            assert_eq!(
                description_length_points(&with_items(items)),
                Ok(expected),
                "{items:?}"
            );
        }
    }

    #[test]
    fn test_description_length_points_parse_error() {
        // "Pear" does not qualify, but its price is still parsed
        let receipt = with_items(&[("Hat", "1.00"), ("Pear", "free")]);
        assert_eq!(
            description_length_points(&receipt),
            Err(CoreError::parse("price", "free"))
        );
    }

    #[test]
    fn test_odd_day_points() {
        let cases = [
            ("2024-02-15", 6),
            ("2024-02-16", 0),
            ("asdf-02-16", 0),
            ("2022-01-01", 6),
        ];
        for (date, expected) in cases {
            let receipt = Receipt {
                purchase_date: date.to_string(),
                ..Default::default()
            };
            assert_eq!(odd_day_points(&receipt), Ok(expected), "{date:?}");
        }
    }

    #[test]
    fn test_odd_day_points_parse_error() {
        for date in ["", "2024-02-", "2024-02-5", "2024-02-xy", "2024-02-é"] {
            let receipt = Receipt {
                purchase_date: date.to_string(),
                ..Default::default()
            };
            assert!(
                matches!(odd_day_points(&receipt), Err(CoreError::Parse { .. })),
                "{date:?}"
            );
        }
    }

    #[test]
    fn test_afternoon_window_points() {
        let cases = [
            ("14:00", 0),
            ("14:01", 10),
            ("15:00", 10),
            ("15:59", 10),
            ("16:00", 0),
            ("13:01", 0),
            ("2:30", 0),
            ("", 0),
        ];
        for (time, expected) in cases {
            let receipt = Receipt {
                purchase_time: time.to_string(),
                ..Default::default()
            };
            assert_eq!(afternoon_window_points(&receipt), expected, "{time:?}");
        }
    }

    #[test]
    fn test_score_target_receipt() {
        assert_eq!(score(&target_receipt()), Ok(28));
    }

    #[test]
    fn test_score_is_sum_of_rules() {
        let receipt = Receipt {
            retailer: "Target".to_string(),
            purchase_date: "2022-01-02".to_string(),
            purchase_time: "10:00".to_string(),
            items: vec![Item::new("Pear", "1.25")],
            total: "1.25".to_string(),
        };

        let breakdown = score_breakdown(&receipt).unwrap();
        let points: Vec<i64> = breakdown.contributions.iter().map(|c| c.points).collect();
        assert_eq!(points, vec![6, 0, 25, 0, 0, 0, 0]);
        assert_eq!(breakdown.total, 31);
        assert_eq!(score(&receipt), Ok(31));
    }

    #[test]
    fn test_breakdown_follows_rule_order() {
        let breakdown = score_breakdown(&target_receipt()).unwrap();
        let rules: Vec<PointsRule> = breakdown.contributions.iter().map(|c| c.rule).collect();
        assert_eq!(rules, PointsRule::ALL.to_vec());
    }

    #[test]
    fn test_score_can_be_negative() {
        let receipt = Receipt {
            retailer: "".to_string(),
            purchase_date: "2022-01-02".to_string(),
            purchase_time: "10:00".to_string(),
            items: vec![Item::new("Hat", "-100.10")],
            total: "0.10".to_string(),
        };
        // ceil(-100.10 * 0.2) = -20
        assert_eq!(score(&receipt), Ok(-20));
    }

    #[test]
    fn test_score_fails_without_partial_total() {
        let mut receipt = target_receipt();
        receipt.purchase_date = "2022-1-1".to_string();
        assert_eq!(score(&receipt), Err(CoreError::parse("purchaseDate", "2022-1-1")));
    }

    #[test]
    fn test_score_is_idempotent() {
        let receipt = target_receipt();
        let before = receipt.clone();
        assert_eq!(score(&receipt), score(&receipt));
        assert_eq!(receipt, before);
    }
}
