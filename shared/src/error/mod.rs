//! Unified error system for the storefront
//!
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//!
//! # Error Code Ranges
//!
//! - 0xxx: Input errors
//! - 1xxx: Catalog errors
//! - 2xxx: Cart errors
//! - 3xxx: Checkout errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::CartEmpty);
//! assert_eq!(err.code, ErrorCode::CartEmpty);
//!
//! let err = AppError::required_field("nama");
//! assert!(err.message.contains("nama"));
//! ```

mod category;
mod codes;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};
