//! HTTP Adapter
//!
//! JSON request/response plumbing with status and decode error mapping.

mod client;

pub use client::{join_url, HttpConfig, JsonHttpClient};
