use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Lifecycle of one feed connection.
///
/// `Connecting -> Open -> Streaming -> Closed`, with `Errored` reachable from
/// `Connecting` or `Streaming`. Both `Closed` and `Errored` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedState {
    Connecting,
    Open,
    Streaming,
    Closed,
    Errored,
}

impl FeedState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, FeedState::Closed | FeedState::Errored)
    }
}

/// Outbound subscription frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscribeMessage {
    #[serde(rename = "type")]
    pub kind: String,
    pub pair: String,
}

impl SubscribeMessage {
    pub fn new(pair: impl Into<String>) -> Self {
        Self {
            kind: "subscribe".to_string(),
            pair: pair.into(),
        }
    }
}

/// One decoded inbound frame
#[derive(Debug, Clone, PartialEq)]
pub struct FeedMessage {
    pub received_at: DateTime<Utc>,
    pub payload: Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscribe_message_wire_format() {
        let msg = SubscribeMessage::new("APT-USDT");
        let json = serde_json::to_string(&msg).unwrap();
        assert_eq!(json, r#"{"type":"subscribe","pair":"APT-USDT"}"#);
    }

    #[test]
    fn test_terminal_states() {
        assert!(FeedState::Closed.is_terminal());
        assert!(FeedState::Errored.is_terminal());
        assert!(!FeedState::Streaming.is_terminal());
        assert!(!FeedState::Connecting.is_terminal());
    }
}
