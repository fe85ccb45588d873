//! Ports Layer - Trait definitions for external dependencies
//!
//! This module defines the interfaces (ports) that adapters must implement.
//! Following hexagonal architecture, these traits abstract:
//! - The blockchain node API (balances, gas, transactions)
//! - Swap execution on the DEX
//! - Local transaction signing

pub mod error;
pub mod execution;
pub mod mocks;
pub mod models;
pub mod network;
pub mod signer;

pub use error::{BotError, BotResult};
pub use execution::SwapPort;
pub use models::{
    BalanceResponse, GasEstimate, SignedTransaction, SwapRequest, SwapResponse,
    TransactionRequest, TransactionResponse, TransactionSubmission,
};
pub use network::NetworkPort;
pub use signer::TransactionSigner;
