//! Application error type

use super::category::ErrorCategory;
use super::codes::ErrorCode;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Coded error surfaced to the buyer or the CLI.
///
/// `details` carries machine-readable context such as the offending form
/// field (`"field": "nomor_telpon"`).
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Error carrying the code's default message
    pub fn new(code: ErrorCode) -> Self {
        Self::with_message(code, code.message())
    }

    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn category(&self) -> ErrorCategory {
        self.code.into()
    }

    /// Blank form field; the field's wire name goes into `details.field`
    pub fn required_field(field: impl Into<String>) -> Self {
        let field = field.into();
        Self::with_message(ErrorCode::RequiredField, format!("{field} must not be empty"))
            .with_detail("field", field)
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }

    /// Form field named in the details
    pub fn field(&self) -> Option<&str> {
        self.detail("field").and_then(Value::as_str)
    }

    pub fn detail(&self, key: &str) -> Option<&Value> {
        self.details.as_ref().and_then(|d| d.get(key))
    }
}

impl From<ErrorCode> for AppError {
    fn from(code: ErrorCode) -> Self {
        Self::new(code)
    }
}

pub type AppResult<T> = Result<T, AppError>;
