//! Catalog view
//!
//! The food list is fetched once per page view and is read-only afterwards.
//! A failed fetch leaves the list empty and is reported through
//! [`CatalogState::Failed`]; nothing retries automatically.

use danten_client::{CatalogProvider, ClientError};
use shared::models::FoodItem;

use crate::core::profile::ALL_CATEGORIES;
use crate::utils::{AppError, ErrorCode};

/// Read-only list of orderable items
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<FoodItem>,
}

impl Catalog {
    pub fn new(items: Vec<FoodItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items whose category list contains `keyword`; `"all"` returns everything
    pub fn filter(&self, keyword: &str) -> Vec<&FoodItem> {
        if keyword == ALL_CATEGORIES {
            return self.items.iter().collect();
        }
        self.items.iter().filter(|i| i.has_category(keyword)).collect()
    }

    pub fn find(&self, id: &str) -> Option<&FoodItem> {
        self.items.iter().find(|i| i.id == id)
    }
}

/// Loading lifecycle surfaced to the UI
#[derive(Debug, Clone)]
pub enum CatalogState {
    Loading,
    Ready(Catalog),
    Failed(AppError),
}

impl CatalogState {
    /// Items when ready, empty otherwise
    pub fn items(&self) -> &[FoodItem] {
        match self {
            Self::Ready(catalog) => catalog.items(),
            Self::Loading | Self::Failed(_) => &[],
        }
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        match self {
            Self::Ready(catalog) => Some(catalog),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn error(&self) -> Option<&AppError> {
        match self {
            Self::Failed(e) => Some(e),
            _ => None,
        }
    }
}

/// Fetch the catalog once and settle into `Ready` or `Failed`
pub async fn load_catalog(provider: &dyn CatalogProvider) -> CatalogState {
    match provider.fetch_catalog().await {
        Ok(items) => CatalogState::Ready(Catalog::new(items)),
        Err(e) => {
            let error = catalog_error(&e);
            tracing::error!(error = %e, code = %error.code, "Error fetching catalog");
            CatalogState::Failed(error)
        }
    }
}

/// Unreachable source vs. unreadable body
fn catalog_error(e: &ClientError) -> AppError {
    let code = match e {
        ClientError::InvalidResponse(_) | ClientError::Serialization(_) => {
            ErrorCode::CatalogMalformed
        }
        ClientError::Http(_) | ClientError::Status { .. } | ClientError::Config(_) => {
            ErrorCode::CatalogUnavailable
        }
    };
    AppError::new(code).with_detail("cause", e.to_string())
}
