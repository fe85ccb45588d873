use super::error::BotResult;
use super::models::{SignedTransaction, TransactionRequest};

/// Local transaction signing. Implementations never touch the network.
pub trait TransactionSigner: Send + Sync {
    /// Account address derived from the signing key
    fn address(&self) -> String;

    fn sign(&self, transaction: &TransactionRequest) -> BotResult<SignedTransaction>;
}
