use async_trait::async_trait;

use super::error::BotResult;
use super::models::{
    BalanceResponse, GasEstimate, SignedTransaction, TransactionRequest, TransactionResponse,
};
use super::signer::TransactionSigner;

/// Blockchain node API: account queries, fee estimates and transaction submission
#[async_trait]
pub trait NetworkPort: Send + Sync {
    /// Fetch the balance of an account
    async fn get_balance(&self, address: &str) -> BotResult<BalanceResponse>;

    /// Fetch the current gas fee estimate
    async fn get_gas_estimate(&self) -> BotResult<GasEstimate>;

    /// Submit a locally signed transaction
    async fn submit_transaction(
        &self,
        signed: &SignedTransaction,
    ) -> BotResult<TransactionResponse>;

    /// Build a transfer from the signer's account, sign it locally and submit it.
    /// Only the signed payload leaves the process.
    async fn send_transfer(
        &self,
        signer: &dyn TransactionSigner,
        recipient: &str,
        amount: u64,
    ) -> BotResult<TransactionResponse> {
        let transaction = TransactionRequest::new(signer.address(), recipient, amount);
        let signed = signer.sign(&transaction)?;
        self.submit_transaction(&signed).await
    }
}
