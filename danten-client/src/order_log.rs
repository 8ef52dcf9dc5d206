//! Order log client
//!
//! Posts one order row to the spreadsheet-backed logging endpoint as an
//! URL-encoded form. The endpoint's reply is not structured; only the HTTP
//! status decides success.

use async_trait::async_trait;

use crate::{ClientResult, HttpClient};
use shared::models::OrderLogEntry;

/// Sink for order rows
#[async_trait]
pub trait OrderLog: Send + Sync {
    async fn submit(&self, entry: &OrderLogEntry) -> ClientResult<()>;
}

/// Network order log client
#[derive(Debug, Clone)]
pub struct OrderLogClient {
    http: HttpClient,
    endpoint: String,
}

impl OrderLogClient {
    /// The endpoint is used verbatim, surrounding whitespace included
    pub fn new(http: HttpClient, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl OrderLog for OrderLogClient {
    async fn submit(&self, entry: &OrderLogEntry) -> ClientResult<()> {
        let reply = self.http.post_form(&self.endpoint, entry).await?;
        tracing::debug!(makanan = %entry.makanan, reply = %reply, "Order row logged");
        Ok(())
    }
}
