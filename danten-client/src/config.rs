//! Client configuration

use crate::{ClientResult, HttpClient};

/// HTTP client configuration shared by the catalog and order log clients
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout in milliseconds
    pub timeout_ms: u64,

    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl ClientConfig {
    pub fn new() -> Self {
        Self {
            timeout_ms: 30_000,
            user_agent: format!("danten-storefront/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Set the request timeout
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> ClientResult<HttpClient> {
        HttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}
