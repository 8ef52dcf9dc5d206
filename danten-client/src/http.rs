//! HTTP client for the remote catalog and order log endpoints

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, Response};
use serde::Serialize;
use std::time::Duration;

/// Thin wrapper over `reqwest::Client`; endpoints are absolute URLs
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| ClientError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// GET a URL and return the body as text
    pub async fn get_text(&self, url: &str) -> ClientResult<String> {
        tracing::debug!(url, "GET");
        let response = self.client.get(url).send().await?;
        Self::handle_response(response).await
    }

    /// POST an `application/x-www-form-urlencoded` body and return the
    /// response text. Only the status is interpreted.
    pub async fn post_form<B: Serialize + ?Sized>(&self, url: &str, body: &B) -> ClientResult<String> {
        tracing::debug!(url, "POST form");
        let response = self.client.post(url).form(body).send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response(response: Response) -> ClientResult<String> {
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(text)
    }
}
