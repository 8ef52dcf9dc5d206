//! DanTen Storefront - food stall ordering
//!
//! # Overview
//!
//! - **Catalog** (`catalog`): food list fetched once per page view
//! - **Cart** (`cart`): one line per item, persisted through a [`CartStore`]
//! - **Checkout** (`checkout`): validation, order log, chat handoff
//! - **Core** (`core`): environment configuration and storefront profiles
//!
//! # Layout
//!
//! ```text
//! storefront/src/
//! ├── core/          # config, profiles
//! ├── catalog/       # catalog view and loading state
//! ├── cart/          # cart manager and stores
//! ├── checkout/      # dispatcher, message, chat handoff
//! ├── utils/         # logger, validation
//! └── app.rs         # facade used by the CLI
//! ```

pub mod app;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod core;
pub mod utils;

pub use app::Storefront;
pub use cart::{Cart, CartStore, JsonFileCartStore, MemoryCartStore, StoreError};
pub use catalog::{Catalog, CatalogState, load_catalog};
pub use checkout::{
    BrowserLauncher, ChatHandoff, ChatLauncher, CheckoutDispatcher, CheckoutOutcome,
    CheckoutPhase, PrintLauncher, RecordingLauncher,
};
pub use core::{CatalogKind, Config, ProfileKind, StorefrontProfile};
pub use utils::{AppError, AppResult, ErrorCode};

pub use utils::logger::init_logger_with_file;

/// Load `.env`, then start logging as configured
pub fn setup_environment() -> Config {
    dotenvy::dotenv().ok();
    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    config.log_warnings();
    config
}
