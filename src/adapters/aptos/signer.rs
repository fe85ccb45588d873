use std::fmt;

use ed25519_dalek::{Signature, Signer as _, SigningKey, Verifier as _, VerifyingKey};
use sha3::{Digest, Sha3_256};

use crate::ports::error::{BotError, BotResult};
use crate::ports::models::{SignedTransaction, TransactionRequest};
use crate::ports::signer::TransactionSigner;

/// Domain separator hashed into every signing message
const RAW_TRANSACTION_SALT: &[u8] = b"APTOS::RawTransaction";
/// Authentication key scheme byte for single ed25519 keys
const ED25519_SCHEME: u8 = 0x00;

/// Ed25519 signer holding the private key in memory only
pub struct LocalSigner {
    key: SigningKey,
    address: String,
}

impl LocalSigner {
    /// Load from a hex private key (32 bytes, `0x` prefix optional)
    pub fn from_hex(private_key: &str) -> BotResult<Self> {
        let trimmed = private_key.trim();
        let stripped = trimmed.strip_prefix("0x").unwrap_or(trimmed);
        let bytes = hex::decode(stripped)
            .map_err(|e| BotError::Signing(format!("Private key is not valid hex: {}", e)))?;
        Self::from_bytes(&bytes)
    }

    /// Load from raw key bytes
    pub fn from_bytes(bytes: &[u8]) -> BotResult<Self> {
        let secret: [u8; 32] = bytes.try_into().map_err(|_| {
            BotError::Signing(format!(
                "Private key must be 32 bytes, got {}",
                bytes.len()
            ))
        })?;
        let key = SigningKey::from_bytes(&secret);
        let address = derive_address(&key.verifying_key());
        Ok(Self { key, address })
    }

    pub fn public_key(&self) -> [u8; 32] {
        self.key.verifying_key().to_bytes()
    }

    /// Public key as 0x-prefixed hex
    pub fn public_key_hex(&self) -> String {
        format!("0x{}", hex::encode(self.public_key()))
    }
}

impl TransactionSigner for LocalSigner {
    fn address(&self) -> String {
        self.address.clone()
    }

    fn sign(&self, transaction: &TransactionRequest) -> BotResult<SignedTransaction> {
        let message = signing_message(transaction)?;
        let signature = self.key.sign(&message);

        Ok(SignedTransaction {
            transaction: transaction.clone(),
            public_key: self.public_key(),
            signature: signature.to_bytes().to_vec(),
        })
    }
}

impl fmt::Debug for LocalSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalSigner")
            .field("address", &self.address)
            .field("key", &"<redacted>")
            .finish()
    }
}

/// Account address for a public key: sha3_256(public_key || scheme)
pub fn derive_address(public_key: &VerifyingKey) -> String {
    let mut hasher = Sha3_256::new();
    hasher.update(public_key.as_bytes());
    hasher.update([ED25519_SCHEME]);
    format!("0x{}", hex::encode(hasher.finalize()))
}

/// Bytes covered by the signature: sha3_256(salt) || bincode(transaction)
pub fn signing_message(transaction: &TransactionRequest) -> BotResult<Vec<u8>> {
    let body = bincode::serialize(transaction)
        .map_err(|e| BotError::Signing(format!("Failed to serialize transaction: {}", e)))?;

    let mut message = Sha3_256::digest(RAW_TRANSACTION_SALT).to_vec();
    message.extend_from_slice(&body);
    Ok(message)
}

/// Decode a hex payload produced by `SignedTransaction::to_hex` and verify it
pub fn verify_signed_transaction(payload: &str) -> BotResult<()> {
    let signed = SignedTransaction::from_hex(payload)
        .map_err(|e| BotError::Signing(format!("Malformed signed transaction: {}", e)))?;
    verify_signature(&signed)
}

/// Check the signature and that the sender matches the embedded public key
pub fn verify_signature(signed: &SignedTransaction) -> BotResult<()> {
    let public_key = VerifyingKey::from_bytes(&signed.public_key)
        .map_err(|e| BotError::Signing(format!("Invalid public key: {}", e)))?;
    let signature = Signature::from_slice(&signed.signature)
        .map_err(|e| BotError::Signing(format!("Invalid signature bytes: {}", e)))?;

    if derive_address(&public_key) != signed.transaction.sender {
        return Err(BotError::Signing(
            "Sender does not match signing key".to_string(),
        ));
    }

    let message = signing_message(&signed.transaction)?;
    public_key
        .verify(&message, &signature)
        .map_err(|e| BotError::Signing(format!("Signature verification failed: {}", e)))
}
