//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Which part of the storefront an error belongs to, by code range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    Input,
    Catalog,
    Cart,
    Checkout,
    /// 9xxx and anything unassigned
    System,
}

impl ErrorCategory {
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::Input,
            1000..2000 => Self::Catalog,
            2000..3000 => Self::Cart,
            3000..4000 => Self::Checkout,
            _ => Self::System,
        }
    }

    /// Whether the buyer can fix it by editing the form
    pub fn is_user_correctable(&self) -> bool {
        matches!(self, Self::Input | Self::Checkout)
    }
}

impl From<ErrorCode> for ErrorCategory {
    fn from(code: ErrorCode) -> Self {
        Self::from_code(code.code())
    }
}
