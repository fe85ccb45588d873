//! Sniper Orchestrator
//!
//! Runs one pass of the bot: balance check, gas estimate, example swap and a
//! locally signed transfer. Each step is attempted exactly once. A failed step
//! is logged and recorded but never stops the steps after it.

use serde::Serialize;

use crate::ports::error::{BotError, BotResult};
use crate::ports::execution::SwapPort;
use crate::ports::models::{
    BalanceResponse, GasEstimate, SwapRequest, SwapResponse, TransactionResponse,
};
use crate::ports::network::NetworkPort;
use crate::ports::signer::TransactionSigner;

/// What one run does
#[derive(Debug, Clone)]
pub struct RunPlan {
    /// Account whose balance is checked and which performs the swap
    pub wallet_address: String,
    pub swap: SwapRequest,
    pub recipient: String,
    /// Transfer amount in octas
    pub amount: u64,
}

/// Outcome of every step of a run
#[derive(Debug)]
pub struct RunReport {
    pub balance: BotResult<BalanceResponse>,
    pub gas_fee: BotResult<GasEstimate>,
    pub swap: BotResult<SwapResponse>,
    pub transaction: BotResult<TransactionResponse>,
}

impl RunReport {
    /// Failed steps by name, in execution order
    pub fn failures(&self) -> Vec<(&'static str, &BotError)> {
        let mut failures = Vec::new();
        if let Err(e) = &self.balance {
            failures.push(("balance", e));
        }
        if let Err(e) = &self.gas_fee {
            failures.push(("gas_fee", e));
        }
        if let Err(e) = &self.swap {
            failures.push(("swap", e));
        }
        if let Err(e) = &self.transaction {
            failures.push(("transaction", e));
        }
        failures
    }

    pub fn is_success(&self) -> bool {
        self.failures().is_empty()
    }
}

/// Sequences the four steps against the given ports
pub struct SniperOrchestrator<N, S, K> {
    network: N,
    dex: S,
    /// A key that failed to load only fails the transfer step
    signer: BotResult<K>,
    plan: RunPlan,
}

impl<N, S, K> SniperOrchestrator<N, S, K>
where
    N: NetworkPort,
    S: SwapPort,
    K: TransactionSigner,
{
    pub fn new(network: N, dex: S, signer: K, plan: RunPlan) -> Self {
        Self::with_signer_result(network, dex, Ok(signer), plan)
    }

    /// Build from the outcome of loading the signing key
    pub fn with_signer_result(network: N, dex: S, signer: BotResult<K>, plan: RunPlan) -> Self {
        Self {
            network,
            dex,
            signer,
            plan,
        }
    }

    pub fn plan(&self) -> &RunPlan {
        &self.plan
    }

    /// Execute all steps once and report each outcome
    pub async fn run(&self) -> RunReport {
        tracing::info!("Starting sniper bot...");

        match &self.signer {
            Ok(signer) => {
                let signer_address = signer.address();
                if signer_address != self.plan.wallet_address {
                    tracing::warn!(
                        "Configured wallet {} differs from signing key account {}; transfers are sent from the signing key account",
                        self.plan.wallet_address,
                        signer_address
                    );
                }
            }
            Err(e) => tracing::warn!("No usable signing key, transfer will fail: {}", e),
        }

        let balance = self.network.get_balance(&self.plan.wallet_address).await;
        log_step("Current balance", &balance);

        let gas_fee = self.network.get_gas_estimate().await;
        log_step("Current gas fee", &gas_fee);

        let swap = self.dex.submit_swap(&self.plan.swap).await;
        log_step("Swap result", &swap);

        let transaction = match &self.signer {
            Ok(signer) => {
                self.network
                    .send_transfer(signer, &self.plan.recipient, self.plan.amount)
                    .await
            }
            Err(e) => Err(e.clone()),
        };
        log_step("Transaction result", &transaction);

        let report = RunReport {
            balance,
            gas_fee,
            swap,
            transaction,
        };

        let failed = report.failures().len();
        if failed == 0 {
            tracing::info!("Sniper run complete");
        } else {
            tracing::warn!("Sniper run complete with {} failed step(s)", failed);
        }

        report
    }
}

fn log_step<T: Serialize>(label: &str, result: &BotResult<T>) {
    match result {
        Ok(value) => {
            let rendered = serde_json::to_string_pretty(value)
                .unwrap_or_else(|e| format!("<unprintable: {}>", e));
            tracing::info!("{}: {}", label, rendered);
        }
        Err(e) => tracing::error!("{} failed: {}", label, e),
    }
}
