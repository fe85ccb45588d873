//! Price Feed WebSocket Listener
//!
//! Connects to the price stream, subscribes to one trading pair and hands every
//! decoded frame to a callback until the server closes or the transport fails.
//! There is no reconnect: a terminal state ends `run`.

use chrono::Utc;
use futures_util::{SinkExt, StreamExt};
use thiserror::Error;
use tokio::sync::watch;
use tokio_tungstenite::connect_async_with_config;
use tokio_tungstenite::tungstenite::{protocol::WebSocketConfig, Message};
use tracing::{debug, error, info, warn};

use super::types::{FeedMessage, FeedState, SubscribeMessage};

/// Default WebSocket URL for the price stream
pub const DEFAULT_FEED_WS_URL: &str = "wss://aptos-network.pro/ws";
/// Default trading pair
pub const DEFAULT_PAIR: &str = "APT-USDT";
/// Maximum accepted message and frame size in bytes
const MAX_MESSAGE_SIZE: usize = 1_048_576;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("WebSocket connection failed: {0}")]
    Connection(String),

    #[error("WebSocket error: {0}")]
    WebSocket(String),

    #[error("Failed to decode message: {0}")]
    Decode(String),
}

/// Configuration for FeedListener
#[derive(Debug, Clone)]
pub struct FeedConfig {
    pub ws_url: String,
    pub pair: String,
    pub max_message_size: usize,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            ws_url: DEFAULT_FEED_WS_URL.to_string(),
            pair: DEFAULT_PAIR.to_string(),
            max_message_size: MAX_MESSAGE_SIZE,
        }
    }
}

impl FeedConfig {
    pub fn new(ws_url: impl Into<String>, pair: impl Into<String>) -> Self {
        Self {
            ws_url: ws_url.into(),
            pair: pair.into(),
            ..Self::default()
        }
    }
}

/// Single-connection price feed listener
pub struct FeedListener {
    config: FeedConfig,
    state: watch::Sender<FeedState>,
}

impl FeedListener {
    pub fn new(config: FeedConfig) -> Self {
        let (state, _) = watch::channel(FeedState::Connecting);
        Self { config, state }
    }

    pub fn config(&self) -> &FeedConfig {
        &self.config
    }

    /// Current connection state
    pub fn state(&self) -> FeedState {
        *self.state.borrow()
    }

    /// Observe state transitions
    pub fn subscribe_state(&self) -> watch::Receiver<FeedState> {
        self.state.subscribe()
    }

    fn transition(&self, next: FeedState) {
        debug!("Feed state -> {:?}", next);
        self.state.send_replace(next);
    }

    fn fail(&self, err: FeedError) -> FeedError {
        error!("Feed listener errored: {}", err);
        self.transition(FeedState::Errored);
        err
    }

    /// Connect, subscribe and stream until the connection ends.
    ///
    /// Returns `Ok(FeedState::Closed)` when the server closes the connection and
    /// `Err` after moving to `Errored` on any transport failure. Malformed frames
    /// are logged and skipped.
    pub async fn run<F>(&self, mut on_message: F) -> Result<FeedState, FeedError>
    where
        F: FnMut(FeedMessage),
    {
        self.transition(FeedState::Connecting);
        info!("Connecting to price feed at {}", self.config.ws_url);

        let ws_config = WebSocketConfig {
            max_message_size: Some(self.config.max_message_size),
            max_frame_size: Some(self.config.max_message_size),
            ..Default::default()
        };
        let (mut ws, response) =
            connect_async_with_config(self.config.ws_url.as_str(), Some(ws_config), false)
                .await
                .map_err(|e| self.fail(FeedError::Connection(e.to_string())))?;

        info!("Price feed connected (status {})", response.status());
        self.transition(FeedState::Open);

        let subscribe = serde_json::to_string(&SubscribeMessage::new(self.config.pair.clone()))
            .map_err(|e| self.fail(FeedError::Decode(e.to_string())))?;
        ws.send(Message::Text(subscribe))
            .await
            .map_err(|e| self.fail(FeedError::WebSocket(e.to_string())))?;
        info!("Subscribed to {}", self.config.pair);

        self.transition(FeedState::Streaming);

        while let Some(frame) = ws.next().await {
            match frame {
                Ok(Message::Text(text)) => match parse_frame(text.as_bytes()) {
                    Ok(msg) => on_message(msg),
                    Err(e) => warn!("Skipping malformed feed message: {}", e),
                },
                Ok(Message::Binary(data)) => match parse_frame(&data) {
                    Ok(msg) => on_message(msg),
                    Err(e) => warn!("Skipping malformed binary feed message: {}", e),
                },
                Ok(Message::Ping(data)) => {
                    debug!("Received ping");
                    ws.send(Message::Pong(data))
                        .await
                        .map_err(|e| self.fail(FeedError::WebSocket(e.to_string())))?;
                }
                Ok(Message::Close(frame)) => {
                    info!("Price feed closed by server: {:?}", frame);
                    break;
                }
                Ok(_) => {}
                Err(e) => return Err(self.fail(FeedError::WebSocket(e.to_string()))),
            }
        }

        self.transition(FeedState::Closed);
        info!("Price feed listener stopped");
        Ok(FeedState::Closed)
    }
}

/// Parse one frame as arbitrary JSON
pub fn parse_frame(raw: &[u8]) -> Result<FeedMessage, FeedError> {
    let payload = serde_json::from_slice(raw).map_err(|e| {
        FeedError::Decode(format!(
            "JSON parse error at line {}, column {}: {}",
            e.line(),
            e.column(),
            e
        ))
    })?;

    Ok(FeedMessage {
        received_at: Utc::now(),
        payload,
    })
}
