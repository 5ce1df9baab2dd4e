//! # Error Types
//!
//! Domain-specific error types for rewards-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  rewards-core errors (this file)                                        │
//! │  ├── CoreError        - Points engine failures                          │
//! │  └── ValidationError  - Receipt rejected by the validator               │
//! │                                                                         │
//! │  rewards-store errors (separate crate)                                  │
//! │  └── StoreError       - Duplicate / unknown receipt ids                 │
//! │                                                                         │
//! │  HTTP errors (in app)                                                   │
//! │  └── ApiError         - What the client sees ({"Error": "..."})         │
//! │                                                                         │
//! │  Flow: ValidationError / CoreError → ApiError → Client                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A scoring rule could not interpret a numeric field.
    ///
    /// ## When This Occurs
    /// - `total` is not a decimal number (quarter-multiple rule)
    /// - An item `price` is not a decimal number (description-length rule)
    /// - `purchaseDate` is not 10 bytes or its day is not an integer
    ///
    /// Validation rejects all of these, so reaching this variant means a
    /// receipt was scored without being validated first.
    #[error("Could not parse {field} from '{value}'")]
    Parse { field: String, value: String },
}

impl CoreError {
    /// Creates a Parse error for a receipt field.
    pub fn parse(field: impl Into<String>, value: impl Into<String>) -> Self {
        CoreError::Parse {
            field: field.into(),
            value: value.into(),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Receipt validation failures.
///
/// The two variants mirror the two independent validator checks so callers
/// can report them with distinct messages.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// At least one of the five required receipt fields is empty.
    #[error("Receipt is missing required data fields")]
    MissingFields,

    /// Every field is present but at least one has an invalid format.
    #[error("Receipt data has invalid field(s)")]
    InvalidFields,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_message() {
        let err = CoreError::parse("total", "abc");
        assert_eq!(err.to_string(), "Could not parse total from 'abc'");
    }

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(
            ValidationError::MissingFields.to_string(),
            "Receipt is missing required data fields"
        );
        assert_eq!(
            ValidationError::InvalidFields.to_string(),
            "Receipt data has invalid field(s)"
        );
    }
}
