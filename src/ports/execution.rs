use async_trait::async_trait;

use super::error::{BotError, BotResult};
use super::models::{SwapRequest, SwapResponse};

#[async_trait]
pub trait SwapPort: Send + Sync {
    /// Submit a token swap to the exchange
    async fn submit_swap(&self, request: &SwapRequest) -> BotResult<SwapResponse>;
}

/// Reject swaps that can never succeed before anything goes over the wire
pub fn validate_swap_request(request: &SwapRequest) -> BotResult<()> {
    if request.amount == 0 {
        return Err(BotError::InvalidInput("swap amount must be > 0".to_string()));
    }
    if request.wallet_address.trim().is_empty() {
        return Err(BotError::InvalidInput(
            "wallet address cannot be empty".to_string(),
        ));
    }
    if request.from_token.is_empty() || request.to_token.is_empty() {
        return Err(BotError::InvalidInput(
            "token identifiers cannot be empty".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_swap_passes() {
        let req = SwapRequest::new("0x...abc", "0x...def", 100, "0xwallet");
        assert!(validate_swap_request(&req).is_ok());
    }

    #[test]
    fn test_zero_amount_rejected() {
        let req = SwapRequest::new("0x...abc", "0x...def", 0, "0xwallet");
        assert!(matches!(
            validate_swap_request(&req),
            Err(BotError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_blank_wallet_rejected() {
        let req = SwapRequest::new("0x...abc", "0x...def", 100, "  ");
        assert!(matches!(
            validate_swap_request(&req),
            Err(BotError::InvalidInput(_))
        ));
    }
}
