//! Shared types for the DanTen storefront
//!
//! Domain models, money helpers and error codes used by both the HTTP
//! client crate and the storefront application.

pub mod error;
pub mod models;
pub mod money;
pub mod util;

// Re-exports
pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{CartLine, CheckoutForm, FoodItem, OrderLogEntry, PaymentMethod};
pub use serde::{Deserialize, Serialize};
