//! Input validation helpers
//!
//! Text limits plus the checkout field rules.

use regex::Regex;
use std::sync::LazyLock;

use crate::utils::{AppError, AppResult, ErrorCode};

// ── Text length limits ──────────────────────────────────────────────

/// Buyer name, class label
pub const MAX_NAME_LEN: usize = 100;

/// Order notes
pub const MAX_NOTE_LEN: usize = 500;

/// Digits, `+`, `-`, spaces and parentheses; 10 to 15 characters
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9+\-\s()]{10,15}$").expect("phone pattern is valid"));

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::required_field(field));
    }
    validate_text_len(value, field, max_len)
}

/// Validate that a string is within the length limit.
pub fn validate_text_len(value: &str, field: &str, max_len: usize) -> AppResult<()> {
    let len = value.chars().count();
    if len > max_len {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("{field} is too long ({len} chars, max {max_len})"),
        )
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate a phone number against the permissive pattern.
pub fn validate_phone(phone: &str) -> AppResult<()> {
    if phone.trim().is_empty() {
        return Err(AppError::required_field("nomor_telpon"));
    }
    if !PHONE_PATTERN.is_match(phone) {
        return Err(AppError::new(ErrorCode::InvalidPhone)
            .with_detail("field", "nomor_telpon")
            .with_detail("value", phone));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_accepts_common_formats() {
        assert!(validate_phone("081234567890").is_ok());
        assert!(validate_phone("+62 812-3456-78").is_ok());
        assert!(validate_phone("(021) 5551234").is_ok());
        assert!(validate_phone("0812345678").is_ok());
    }

    #[test]
    fn test_phone_length_bounds() {
        // 9 characters
        let err = validate_phone("081234567").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidPhone);
        // 16 characters
        assert!(validate_phone("0812345678901234").is_err());
        // 15 characters
        assert!(validate_phone("081234567890123").is_ok());
    }

    #[test]
    fn test_phone_rejects_letters_and_blank() {
        assert_eq!(
            validate_phone("0812-ABCD-7890").unwrap_err().code,
            ErrorCode::InvalidPhone
        );
        assert_eq!(validate_phone("   ").unwrap_err().code, ErrorCode::RequiredField);
    }

    #[test]
    fn test_required_text() {
        assert!(validate_required_text("Budi", "nama", MAX_NAME_LEN).is_ok());
        let err = validate_required_text("  ", "nama", MAX_NAME_LEN).unwrap_err();
        assert_eq!(err.field(), Some("nama"));

        let long = "x".repeat(MAX_NAME_LEN + 1);
        let err = validate_required_text(&long, "kelas", MAX_NAME_LEN).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    }
}
