//! Aptos Adapter
//!
//! NetworkPort implementation over the Aptos HTTP API, plus local ed25519 signing.

mod client;
mod signer;

pub use client::{AptosClient, DEFAULT_APTOS_API_URL};
pub use signer::{
    derive_address, signing_message, verify_signature, verify_signed_transaction, LocalSigner,
};
