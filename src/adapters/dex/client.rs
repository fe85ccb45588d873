//! DEX Swap Client
//!
//! Posts swap requests to a Raydium-style exchange endpoint.

use async_trait::async_trait;

use crate::adapters::http::{HttpConfig, JsonHttpClient};
use crate::ports::error::BotResult;
use crate::ports::execution::{validate_swap_request, SwapPort};
use crate::ports::models::{SwapRequest, SwapResponse};

/// Default swap endpoint
pub const DEFAULT_SWAP_API_URL: &str = "https://api.raydium.io/swap";

/// Exchange client. The configured URL is the swap endpoint itself.
#[derive(Debug, Clone)]
pub struct DexClient {
    http: JsonHttpClient,
}

impl DexClient {
    pub fn new(config: HttpConfig) -> BotResult<Self> {
        Ok(Self {
            http: JsonHttpClient::new(config)?,
        })
    }

    pub fn swap_url(&self) -> &str {
        self.http.base_url()
    }
}

#[async_trait]
impl SwapPort for DexClient {
    async fn submit_swap(&self, request: &SwapRequest) -> BotResult<SwapResponse> {
        validate_swap_request(request)?;

        tracing::debug!(
            "Submitting swap {} {} -> {}",
            request.amount,
            request.from_token,
            request.to_token
        );

        self.http.post_json("", request).await
    }
}
