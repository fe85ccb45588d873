//! DEX Adapter
//!
//! Implementation of the SwapPort for a Raydium-style swap API.

mod client;

pub use client::{DexClient, DEFAULT_SWAP_API_URL};
