//! Storefront error codes
//!
//! Grouped by the part of the storefront that raises them:
//! - 0xxx: input
//! - 1xxx: catalog
//! - 2xxx: cart
//! - 3xxx: checkout
//! - 9xxx: runtime / environment

use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric error code, serialized as a bare `u16`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ── 0xxx: input ─────────────────────────────────────────────────
    /// Payload did not have the expected shape
    InvalidFormat = 1,
    /// A required form field was blank
    RequiredField = 2,
    /// Text too long, quantity below 1
    ValueOutOfRange = 3,

    // ── 1xxx: catalog ───────────────────────────────────────────────
    /// Catalog endpoint unreachable or answered with an error status
    CatalogUnavailable = 1001,
    /// Catalog body was not a food list / spreadsheet table
    CatalogMalformed = 1002,
    FoodNotFound = 1003,

    // ── 2xxx: cart ──────────────────────────────────────────────────
    CartEmpty = 2001,
    CartItemNotFound = 2002,
    /// Cart state could not be written to its store
    CartStorageFailed = 2003,

    // ── 3xxx: checkout ──────────────────────────────────────────────
    /// Phone number outside `[0-9+-() ]{10,15}`
    InvalidPhone = 3001,
    PaymentMethodRequired = 3002,
    /// Order log POST failed; the chat fallback was used
    OrderLogFailed = 3003,

    // ── 9xxx: runtime / environment ─────────────────────────────────
    InternalError = 9001,
    NetworkError = 9003,
    TimeoutError = 9004,
    ConfigError = 9005,
}

const ALL_CODES: [ErrorCode; 16] = [
    ErrorCode::InvalidFormat,
    ErrorCode::RequiredField,
    ErrorCode::ValueOutOfRange,
    ErrorCode::CatalogUnavailable,
    ErrorCode::CatalogMalformed,
    ErrorCode::FoodNotFound,
    ErrorCode::CartEmpty,
    ErrorCode::CartItemNotFound,
    ErrorCode::CartStorageFailed,
    ErrorCode::InvalidPhone,
    ErrorCode::PaymentMethodRequired,
    ErrorCode::OrderLogFailed,
    ErrorCode::InternalError,
    ErrorCode::NetworkError,
    ErrorCode::TimeoutError,
    ErrorCode::ConfigError,
];

impl ErrorCode {
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Every defined code, in numeric order
    pub fn all() -> &'static [ErrorCode] {
        &ALL_CODES
    }

    /// Default message used when an [`AppError`](super::AppError) is built
    /// from a bare code
    pub const fn message(&self) -> &'static str {
        match self {
            Self::InvalidFormat => "Unexpected data format",
            Self::RequiredField => "A required field is empty",
            Self::ValueOutOfRange => "Value outside the allowed range",

            Self::CatalogUnavailable => "Could not load the menu",
            Self::CatalogMalformed => "Menu data could not be read",
            Self::FoodNotFound => "No menu item with this id",

            Self::CartEmpty => "The cart is empty",
            Self::CartItemNotFound => "Item is not in the cart",
            Self::CartStorageFailed => "Could not save the cart",

            Self::InvalidPhone => "Phone number must be 10-15 digits, spaces, +, - or ()",
            Self::PaymentMethodRequired => "Choose cash or QRIS",
            Self::OrderLogFailed => "Order could not be recorded",

            Self::InternalError => "Internal error",
            Self::NetworkError => "Network request failed",
            Self::TimeoutError => "Request timed out",
            Self::ConfigError => "Invalid configuration",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// A `u16` that is not one of the defined codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no error code {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        ALL_CODES
            .iter()
            .copied()
            .find(|c| c.code() == value)
            .ok_or(InvalidErrorCode(value))
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_values() {
        assert_eq!(ErrorCode::RequiredField.code(), 2);
        assert_eq!(ErrorCode::CatalogUnavailable.code(), 1001);
        assert_eq!(ErrorCode::CartEmpty.code(), 2001);
        assert_eq!(ErrorCode::InvalidPhone.code(), 3001);
        assert_eq!(ErrorCode::ConfigError.code(), 9005);
    }

    #[test]
    fn test_all_is_sorted_and_convertible() {
        let all = ErrorCode::all();
        assert!(all.windows(2).all(|w| w[0].code() < w[1].code()));
        for code in all {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(*code));
        }
    }

    #[test]
    fn test_unknown_numbers_rejected() {
        assert_eq!(ErrorCode::try_from(0), Err(InvalidErrorCode(0)));
        assert_eq!(ErrorCode::try_from(1234), Err(InvalidErrorCode(1234)));
    }

    #[test]
    fn test_serde_as_number() {
        let json = serde_json::to_string(&ErrorCode::InvalidPhone).unwrap();
        assert_eq!(json, "3001");
        let back: ErrorCode = serde_json::from_str("2001").unwrap();
        assert_eq!(back, ErrorCode::CartEmpty);
        assert!(serde_json::from_str::<ErrorCode>("4242").is_err());
    }
}
