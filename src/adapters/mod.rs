//! Adapters Layer - External System Implementations
//!
//! This module contains implementations of the port traits:
//! - HTTP: JSON request plumbing with error mapping
//! - Aptos: node API client and local ed25519 signer
//! - DEX: swap API client
//! - Feed: WebSocket price listener
//! - CLI: Command-line interface

pub mod http;
pub mod aptos;
pub mod dex;
pub mod feed;
pub mod cli;

pub use aptos::{AptosClient, LocalSigner};
pub use dex::DexClient;
pub use feed::{FeedConfig, FeedListener};
pub use cli::CliApp;
