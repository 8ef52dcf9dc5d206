//! Cart persistence
//!
//! The cart is kept under a single key holding the serialized line list.
//! Stores report what they find; deciding that a corrupt entry means "empty
//! cart" is the cart's job.

use parking_lot::Mutex;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use shared::models::CartLine;

/// Key the cart is stored under
pub const CART_KEY: &str = "cart";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed cart state: {0}")]
    Malformed(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Read/write contract for the persisted cart
pub trait CartStore: Send + Sync {
    /// `Ok(None)` when nothing has been stored yet
    fn load(&self) -> StoreResult<Option<Vec<CartLine>>>;

    fn save(&self, lines: &[CartLine]) -> StoreResult<()>;
}

/// JSON file store, one file per key
#[derive(Debug, Clone)]
pub struct JsonFileCartStore {
    path: PathBuf,
}

impl JsonFileCartStore {
    /// Store at `{base_path}/{key}.json`
    pub fn new(base_path: impl Into<PathBuf>, key: &str) -> Self {
        let path = base_path.into().join(format!("{}.json", key));
        Self { path }
    }

    /// Ensure the parent directory exists
    pub fn ensure_dir(&self) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CartStore for JsonFileCartStore {
    fn load(&self) -> StoreResult<Option<Vec<CartLine>>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let json = fs::read_to_string(&self.path)?;
        Ok(Some(serde_json::from_str(&json)?))
    }

    fn save(&self, lines: &[CartLine]) -> StoreResult<()> {
        self.ensure_dir()?;
        let json = serde_json::to_string_pretty(lines)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// In-memory store holding the raw serialized entry
#[derive(Debug, Default)]
pub struct MemoryCartStore {
    raw: Mutex<Option<String>>,
}

impl MemoryCartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an arbitrary stored string (possibly malformed)
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Mutex::new(Some(raw.into())),
        }
    }

    /// Current raw entry
    pub fn raw(&self) -> Option<String> {
        self.raw.lock().clone()
    }
}

impl CartStore for MemoryCartStore {
    fn load(&self) -> StoreResult<Option<Vec<CartLine>>> {
        match self.raw.lock().as_deref() {
            None => Ok(None),
            Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
        }
    }

    fn save(&self, lines: &[CartLine]) -> StoreResult<()> {
        let json = serde_json::to_string(lines)?;
        *self.raw.lock() = Some(json);
        Ok(())
    }
}
