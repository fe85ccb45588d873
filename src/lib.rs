//! Aptos Sniper - balance, gas, swap and transfer bot library
//!
//! Checks an Aptos account, submits a DEX swap and sends a locally signed
//! transfer, while a WebSocket listener streams prices for a trading pair.
//!
//! # Modules
//!
//! - `ports`: Trait abstractions (NetworkPort, SwapPort, TransactionSigner) and the error taxonomy
//! - `adapters`: External implementations (Aptos HTTP, DEX HTTP, WebSocket feed, CLI)
//! - `config`: Configuration loading and validation
//! - `application`: Orchestrator

pub mod ports;
pub mod adapters;
pub mod config;
pub mod application;
