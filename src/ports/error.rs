use thiserror::Error;

/// Result alias for every bot operation
pub type BotResult<T> = Result<T, BotError>;

/// Failure kinds shared by all HTTP-backed and signing operations
#[derive(Debug, Clone, Error)]
pub enum BotError {
    /// Transport-level failure: connection refused, DNS, timeout
    #[error("Network error: {0}")]
    Network(String),
    /// Remote service answered with any status other than 200
    #[error("Request rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },
    /// Response body was not valid JSON or did not match the expected schema
    #[error("Failed to decode response: {0}")]
    Decode(String),
    /// Key derivation, serialization or signing failed
    #[error("Signing error: {0}")]
    Signing(String),
    /// Caller supplied invalid parameters; no request was made
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl BotError {
    pub fn is_network(&self) -> bool {
        matches!(self, BotError::Network(_))
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, BotError::Rejected { .. })
    }

    /// Body text of a rejected response
    pub fn rejection_body(&self) -> Option<&str> {
        match self {
            BotError::Rejected { body, .. } => Some(body.as_str()),
            _ => None,
        }
    }
}
