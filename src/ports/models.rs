//! Request and response records shared by the ports

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Unsigned transfer description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRequest {
    /// Sender account address (derived from the signing key)
    pub sender: String,
    /// Recipient account address
    pub recipient: String,
    /// Amount in the smallest unit (octas)
    pub amount: u64,
}

impl TransactionRequest {
    pub fn new(sender: impl Into<String>, recipient: impl Into<String>, amount: u64) -> Self {
        Self {
            sender: sender.into(),
            recipient: recipient.into(),
            amount,
        }
    }
}

/// Transaction together with the ed25519 public key and signature over it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedTransaction {
    pub transaction: TransactionRequest,
    pub public_key: [u8; 32],
    pub signature: Vec<u8>,
}

impl SignedTransaction {
    /// Serialize with bincode and hex encode for transport
    pub fn to_hex(&self) -> Result<String, bincode::Error> {
        Ok(hex::encode(bincode::serialize(self)?))
    }

    /// Inverse of `to_hex`
    pub fn from_hex(payload: &str) -> Result<Self, String> {
        let bytes = hex::decode(payload.trim_start_matches("0x")).map_err(|e| e.to_string())?;
        bincode::deserialize(&bytes).map_err(|e| e.to_string())
    }
}

/// Body posted to the transactions endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionSubmission {
    pub sender: String,
    pub recipient: String,
    pub amount: u64,
    /// Hex encoded signed transaction
    pub signed_transaction: String,
}

/// Token swap request posted to the DEX
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapRequest {
    pub from_token: String,
    pub to_token: String,
    pub amount: u64,
    pub wallet_address: String,
}

impl SwapRequest {
    pub fn new(
        from_token: impl Into<String>,
        to_token: impl Into<String>,
        amount: u64,
        wallet_address: impl Into<String>,
    ) -> Self {
        Self {
            from_token: from_token.into(),
            to_token: to_token.into(),
            amount,
            wallet_address: wallet_address.into(),
        }
    }
}

/// Account balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceResponse {
    pub balance: u64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Current gas fee estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GasEstimate {
    #[serde(alias = "gas_estimate")]
    pub fee: u64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// DEX swap outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwapResponse {
    pub swapped: u64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Accepted transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionResponse {
    #[serde(rename = "txId", alias = "hash")]
    pub tx_id: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
