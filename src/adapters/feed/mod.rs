//! Price Feed Adapter
//!
//! Real-time price updates over WebSocket.
//!
//! # WebSocket Protocol
//!
//! On connect the listener sends exactly one frame,
//! `{"type":"subscribe","pair":"APT-USDT"}`. Inbound frames are arbitrary JSON
//! and are passed through untouched.

mod listener;
mod types;

pub use listener::{
    parse_frame, FeedConfig, FeedError, FeedListener, DEFAULT_FEED_WS_URL, DEFAULT_PAIR,
};
pub use types::{FeedMessage, FeedState, SubscribeMessage};
