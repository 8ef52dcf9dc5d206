use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use danten_client::{CatalogSource, ClientConfig};

use super::profile::{ProfileKind, StorefrontProfile};

pub const DEFAULT_CATALOG_URL: &str = "https://lawaggg.github.io/DanTenAPI/api/foods.json";
pub const DEFAULT_ORDER_LOG_URL: &str = "https://script.google.com/macros/s/AKfycbzU6f5sawaOMOQifg4A1zddT1UaoDeDRBABIlXHWpb2Lbp8uOe7Bbwb-OqCP9IRf9gL/exec";
pub const DEFAULT_CHAT_DESTINATION: &str = "6283856278811";

/// Shape of the catalog endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogKind {
    /// Plain JSON array
    #[default]
    Json,
    /// JSONP-wrapped spreadsheet export
    Spreadsheet,
}

impl FromStr for CatalogKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "spreadsheet" | "sheet" | "gviz" => Ok(Self::Spreadsheet),
            other => Err(format!("unknown catalog kind: {}", other)),
        }
    }
}

/// Storefront configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | CATALOG_URL | DanTen foods.json | catalog endpoint |
/// | CATALOG_KIND | json | `json` or `spreadsheet` |
/// | ORDER_LOG_URL | Apps Script web app | order log endpoint |
/// | CHAT_DESTINATION | 6283856278811 | WhatsApp number orders go to |
/// | DATA_DIR | .danten | where the cart is persisted |
/// | REQUEST_TIMEOUT_MS | 15000 | HTTP timeout |
/// | SUCCESS_DELAY_MS | 1500 | pause before confirming a logged order |
/// | PROFILE | cart | `cart` or `detail` |
/// | LOG_LEVEL | info | tracing filter when RUST_LOG is unset |
/// | LOG_DIR | (unset) | daily rolling log file directory |
#[derive(Debug, Clone)]
pub struct Config {
    pub catalog_url: String,
    pub catalog_kind: CatalogKind,
    /// Used verbatim; see [`Config::warnings`]
    pub order_log_url: String,
    pub chat_destination: String,
    pub data_dir: PathBuf,
    pub request_timeout_ms: u64,
    pub success_delay_ms: u64,
    pub profile: ProfileKind,
    pub log_level: String,
    pub log_dir: Option<String>,
}

impl Config {
    /// Load from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            catalog_url: lookup("CATALOG_URL").unwrap_or_else(|| DEFAULT_CATALOG_URL.into()),
            catalog_kind: parse_var(&lookup, "CATALOG_KIND").unwrap_or_default(),
            order_log_url: lookup("ORDER_LOG_URL").unwrap_or_else(|| DEFAULT_ORDER_LOG_URL.into()),
            chat_destination: lookup("CHAT_DESTINATION")
                .unwrap_or_else(|| DEFAULT_CHAT_DESTINATION.into()),
            data_dir: lookup("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".danten")),
            request_timeout_ms: parse_var(&lookup, "REQUEST_TIMEOUT_MS").unwrap_or(15_000),
            success_delay_ms: parse_var(&lookup, "SUCCESS_DELAY_MS").unwrap_or(1_500),
            profile: parse_var(&lookup, "PROFILE").unwrap_or_default(),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: lookup("LOG_DIR"),
        }
    }

    pub fn catalog_source(&self) -> CatalogSource {
        match self.catalog_kind {
            CatalogKind::Json => CatalogSource::Json(self.catalog_url.clone()),
            CatalogKind::Spreadsheet => CatalogSource::Spreadsheet(self.catalog_url.clone()),
        }
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new().with_timeout_ms(self.request_timeout_ms)
    }

    pub fn storefront_profile(&self) -> StorefrontProfile {
        StorefrontProfile::from_kind(self.profile)
    }

    pub fn success_delay(&self) -> Duration {
        Duration::from_millis(self.success_delay_ms)
    }

    /// Suspicious values that are kept as-is but should be looked at.
    ///
    /// Endpoint URLs with surrounding whitespace are not trimmed: one of the
    /// deployed pages posts to such a URL and it is unknown whether the
    /// remote side depends on it.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        for (name, url) in [
            ("CATALOG_URL", &self.catalog_url),
            ("ORDER_LOG_URL", &self.order_log_url),
        ] {
            if url.trim() != url.as_str() {
                warnings.push(format!("{} has leading/trailing whitespace: {:?}", name, url));
            }
            if url.trim().is_empty() {
                warnings.push(format!("{} is empty", name));
            }
        }
        if !self.chat_destination.chars().all(|c| c.is_ascii_digit()) {
            warnings.push(format!(
                "CHAT_DESTINATION should be digits only: {:?}",
                self.chat_destination
            ));
        }
        warnings
    }

    /// Log every warning from [`Config::warnings`]
    pub fn log_warnings(&self) {
        for warning in self.warnings() {
            tracing::warn!("{}", warning);
        }
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|v| v.trim().parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
