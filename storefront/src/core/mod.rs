//! Core module - configuration and storefront profiles
//!
//! - [`Config`] - environment driven configuration
//! - [`StorefrontProfile`] - per-page variation (categories, notes, flow)

pub mod config;
pub mod profile;

pub use config::{CatalogKind, Config};
pub use profile::{CategoryOption, OrderFlow, ProfileKind, StorefrontProfile};
