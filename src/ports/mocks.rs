use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use serde_json::Map;

use super::error::{BotError, BotResult};
use super::execution::SwapPort;
use super::models::{
    BalanceResponse, GasEstimate, SignedTransaction, SwapRequest, SwapResponse,
    TransactionRequest, TransactionResponse,
};
use super::network::NetworkPort;
use super::signer::TransactionSigner;

/// Canned outcome for one mocked endpoint
#[derive(Debug, Clone)]
enum Canned<T> {
    Unset,
    Ok(T),
    Rejected(u16, String),
    Network(String),
}

impl<T> Default for Canned<T> {
    fn default() -> Self {
        Canned::Unset
    }
}

impl<T: Clone> Canned<T> {
    fn resolve(&self) -> BotResult<T> {
        match self {
            Canned::Unset => Err(BotError::Network("No response configured".to_string())),
            Canned::Ok(value) => Ok(value.clone()),
            Canned::Rejected(status, body) => Err(BotError::Rejected {
                status: *status,
                body: body.clone(),
            }),
            Canned::Network(msg) => Err(BotError::Network(msg.clone())),
        }
    }
}

/// Mock network port that records calls and allows controlled responses
#[derive(Debug, Default, Clone)]
pub struct MockNetwork {
    calls: Arc<Mutex<Vec<String>>>,
    balance: Canned<BalanceResponse>,
    gas: Canned<GasEstimate>,
    transaction: Canned<TransactionResponse>,
    submitted: Arc<Mutex<Vec<SignedTransaction>>>,
}

impl MockNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_balance(mut self, balance: u64) -> Self {
        self.balance = Canned::Ok(BalanceResponse { balance, extra: Map::new() });
        self
    }

    pub fn with_gas_fee(mut self, fee: u64) -> Self {
        self.gas = Canned::Ok(GasEstimate { fee, extra: Map::new() });
        self
    }

    pub fn with_tx_id(mut self, tx_id: &str) -> Self {
        self.transaction = Canned::Ok(TransactionResponse {
            tx_id: tx_id.to_string(),
            extra: Map::new(),
        });
        self
    }

    pub fn reject_balance(mut self, status: u16, body: &str) -> Self {
        self.balance = Canned::Rejected(status, body.to_string());
        self
    }

    pub fn reject_transactions(mut self, status: u16, body: &str) -> Self {
        self.transaction = Canned::Rejected(status, body.to_string());
        self
    }

    pub fn unreachable_gas(mut self) -> Self {
        self.gas = Canned::Network("connection refused".to_string());
        self
    }

    /// Get all recorded calls
    pub fn get_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Signed transactions received by `submit_transaction`
    pub fn submitted(&self) -> Vec<SignedTransaction> {
        self.submitted.lock().unwrap().clone()
    }
}

#[async_trait]
impl NetworkPort for MockNetwork {
    async fn get_balance(&self, address: &str) -> BotResult<BalanceResponse> {
        self.calls.lock().unwrap().push(format!("balance:{}", address));
        self.balance.resolve()
    }

    async fn get_gas_estimate(&self) -> BotResult<GasEstimate> {
        self.calls.lock().unwrap().push("gas".to_string());
        self.gas.resolve()
    }

    async fn submit_transaction(
        &self,
        signed: &SignedTransaction,
    ) -> BotResult<TransactionResponse> {
        self.calls.lock().unwrap().push("transaction".to_string());
        self.submitted.lock().unwrap().push(signed.clone());
        self.transaction.resolve()
    }
}

/// Mock swap port
#[derive(Debug, Default, Clone)]
pub struct MockSwap {
    calls: Arc<Mutex<Vec<SwapRequest>>>,
    response: Canned<SwapResponse>,
}

impl MockSwap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_swapped(mut self, swapped: u64) -> Self {
        self.response = Canned::Ok(SwapResponse { swapped, extra: Map::new() });
        self
    }

    pub fn rejecting(mut self, status: u16, body: &str) -> Self {
        self.response = Canned::Rejected(status, body.to_string());
        self
    }

    pub fn get_calls(&self) -> Vec<SwapRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SwapPort for MockSwap {
    async fn submit_swap(&self, request: &SwapRequest) -> BotResult<SwapResponse> {
        self.calls.lock().unwrap().push(request.clone());
        self.response.resolve()
    }
}

/// Signer stub producing a fixed signature
#[derive(Debug, Clone)]
pub struct MockSigner {
    address: String,
    fail: bool,
}

impl MockSigner {
    pub fn new(address: &str) -> Self {
        Self {
            address: address.to_string(),
            fail: false,
        }
    }

    pub fn failing(address: &str) -> Self {
        Self {
            address: address.to_string(),
            fail: true,
        }
    }
}

impl TransactionSigner for MockSigner {
    fn address(&self) -> String {
        self.address.clone()
    }

    fn sign(&self, transaction: &TransactionRequest) -> BotResult<SignedTransaction> {
        if self.fail {
            return Err(BotError::Signing("mock signer configured to fail".to_string()));
        }
        Ok(SignedTransaction {
            transaction: transaction.clone(),
            public_key: [7u8; 32],
            signature: vec![9u8; 64],
        })
    }
}
