//! JSON HTTP Client
//!
//! Thin reqwest wrapper shared by the Aptos and DEX adapters.
//! One request per call; no retries.

use std::time::Duration;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::ports::error::{BotError, BotResult};

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Base URL that relative paths are joined onto
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl HttpConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// JSON-over-HTTP client bound to one base URL
#[derive(Debug, Clone)]
pub struct JsonHttpClient {
    config: HttpConfig,
    http: Client,
}

impl JsonHttpClient {
    pub fn new(config: HttpConfig) -> BotResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| BotError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, http })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Absolute URL for a path under the base URL
    pub fn url(&self, path: &str) -> String {
        join_url(&self.config.base_url, path)
    }

    /// GET `path` and decode the body
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> BotResult<T> {
        let url = self.url(path);
        tracing::debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| BotError::Network(e.to_string()))?;

        Self::handle_response(response).await
    }

    /// POST a JSON body to `path` and decode the reply
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> BotResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        tracing::debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| BotError::Network(e.to_string()))?;

        Self::handle_response(response).await
    }

    /// Map status and body to the error taxonomy. Only 200 counts as success.
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> BotResult<T> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| BotError::Network(format!("Failed to read response body: {}", e)))?;

        if status != StatusCode::OK {
            return Err(BotError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body)
            .map_err(|e| BotError::Decode(format!("{} (body: {})", e, preview(&body))))
    }
}

/// Join base and path with exactly one slash. An empty path returns the base unchanged.
pub fn join_url(base: &str, path: &str) -> String {
    if path.is_empty() {
        return base.to_string();
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

fn preview(body: &str) -> String {
    if body.chars().count() > 200 {
        format!("{}...[truncated]", body.chars().take(200).collect::<String>())
    } else {
        body.to_string()
    }
}
