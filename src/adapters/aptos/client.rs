//! Aptos Node API Client
//!
//! Balance queries, gas estimates and submission of locally signed transactions.

use async_trait::async_trait;

use super::signer::verify_signed_transaction;
use crate::adapters::http::{HttpConfig, JsonHttpClient};
use crate::ports::error::{BotError, BotResult};
use crate::ports::models::{
    BalanceResponse, GasEstimate, SignedTransaction, TransactionResponse, TransactionSubmission,
};
use crate::ports::network::NetworkPort;

/// Default Aptos API base URL
pub const DEFAULT_APTOS_API_URL: &str = "https://aptos-network.pro/api";

const GAS_ESTIMATE_PATH: &str = "/api/gas-estimate";
const TRANSACTIONS_PATH: &str = "/api/transactions";

#[derive(Debug, Clone)]
pub struct AptosClient {
    http: JsonHttpClient,
}

impl AptosClient {
    pub fn new(config: HttpConfig) -> BotResult<Self> {
        Ok(Self {
            http: JsonHttpClient::new(config)?,
        })
    }

    pub fn api_base_url(&self) -> &str {
        self.http.base_url()
    }
}

fn balance_path(address: &str) -> String {
    format!("/api/accounts/{}/balance", address)
}

#[async_trait]
impl NetworkPort for AptosClient {
    async fn get_balance(&self, address: &str) -> BotResult<BalanceResponse> {
        if address.trim().is_empty() {
            return Err(BotError::InvalidInput(
                "wallet address cannot be empty".to_string(),
            ));
        }
        self.http.get_json(&balance_path(address)).await
    }

    async fn get_gas_estimate(&self) -> BotResult<GasEstimate> {
        self.http.get_json(GAS_ESTIMATE_PATH).await
    }

    async fn submit_transaction(
        &self,
        signed: &SignedTransaction,
    ) -> BotResult<TransactionResponse> {
        let signed_transaction = signed
            .to_hex()
            .map_err(|e| BotError::Signing(format!("Failed to encode signed transaction: {}", e)))?;

        if tracing::enabled!(tracing::Level::DEBUG) {
            match verify_signed_transaction(&signed_transaction) {
                Ok(()) => tracing::debug!("Signed transaction verified locally"),
                Err(e) => tracing::debug!("Local signature check failed: {}", e),
            }
        }

        let body = TransactionSubmission {
            sender: signed.transaction.sender.clone(),
            recipient: signed.transaction.recipient.clone(),
            amount: signed.transaction.amount,
            signed_transaction,
        };

        self.http.post_json(TRANSACTIONS_PATH, &body).await
    }
}
