//! DanTen Client - HTTP client for the storefront's remote endpoints
//!
//! Fetches the food catalog (plain JSON array or spreadsheet JSONP export)
//! and posts order rows to the spreadsheet-backed logging endpoint.

pub mod catalog;
pub mod config;
pub mod error;
pub mod http;
pub mod order_log;

pub use catalog::{CatalogClient, CatalogProvider, CatalogSource, parse_spreadsheet, unwrap_jsonp};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use order_log::{OrderLog, OrderLogClient};

// Re-export shared types for convenience
pub use shared::models::{FoodItem, OrderLogEntry};
