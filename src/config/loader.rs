//! Configuration Loader
//!
//! Loads and validates configuration from an optional TOML file plus environment
//! variables. Every section has defaults, so the bot runs with no file at all.
//! Secrets (the private key) are only ever read from the environment.

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

use crate::adapters::aptos::DEFAULT_APTOS_API_URL;
use crate::adapters::dex::DEFAULT_SWAP_API_URL;
use crate::adapters::feed::{DEFAULT_FEED_WS_URL, DEFAULT_PAIR};

pub const ENV_PRIVATE_KEY: &str = "APTOS_PRIVATE_KEY";
pub const ENV_WALLET_ADDRESS: &str = "APTOS_WALLET_ADDRESS";
pub const ENV_APTOS_API_URL: &str = "APTOS_API_URL";
pub const ENV_SWAP_API_URL: &str = "SWAP_API_URL";
pub const ENV_FEED_WS_URL: &str = "FEED_WS_URL";

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    pub aptos: AptosSection,
    pub swap: SwapSection,
    pub transfer: TransferSection,
    pub feed: FeedSection,
    pub http: HttpSection,
}

/// Aptos node API section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AptosSection {
    /// Base URL for the node API
    pub api_url: String,
}

impl Default for AptosSection {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_APTOS_API_URL.to_string(),
        }
    }
}

/// DEX swap section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SwapSection {
    /// Full swap endpoint URL
    pub api_url: String,
    /// Token to sell
    pub from_token: String,
    /// Token to receive
    pub to_token: String,
    /// Amount in the smallest unit
    pub amount: u64,
}

impl Default for SwapSection {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_SWAP_API_URL.to_string(),
            from_token: "0x...abc".to_string(),
            to_token: "0x...def".to_string(),
            amount: 100,
        }
    }
}

/// Outgoing transfer section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TransferSection {
    pub recipient: String,
    /// Amount in octas
    pub amount: u64,
}

impl Default for TransferSection {
    fn default() -> Self {
        Self {
            recipient: "recipient_wallet_address_here".to_string(),
            amount: 100,
        }
    }
}

/// Price feed section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FeedSection {
    pub enabled: bool,
    pub ws_url: String,
    pub pair: String,
}

impl Default for FeedSection {
    fn default() -> Self {
        Self {
            enabled: true,
            ws_url: DEFAULT_FEED_WS_URL.to_string(),
            pair: DEFAULT_PAIR.to_string(),
        }
    }
}

/// HTTP client section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpSection {
    pub timeout_secs: u64,
}

impl Default for HttpSection {
    fn default() -> Self {
        Self { timeout_secs: 30 }
    }
}

impl HttpSection {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Secrets and identity read once from the environment.
/// Missing values are kept as `None` so the steps that need them fail on their own.
#[derive(Clone, Default)]
pub struct Credentials {
    private_key: Option<String>,
    wallet_address: Option<String>,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("private_key", &self.private_key.as_ref().map(|_| "<redacted>"))
            .field("wallet_address", &self.wallet_address)
            .finish()
    }
}

impl Credentials {
    /// Read from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            private_key: non_empty(lookup(ENV_PRIVATE_KEY)),
            wallet_address: non_empty(lookup(ENV_WALLET_ADDRESS)),
        }
    }

    pub fn private_key(&self) -> Result<&str, ConfigError> {
        self.private_key
            .as_deref()
            .ok_or(ConfigError::MissingEnv(ENV_PRIVATE_KEY))
    }

    pub fn wallet_address(&self) -> Result<&str, ConfigError> {
        self.wallet_address
            .as_deref()
            .ok_or(ConfigError::MissingEnv(ENV_WALLET_ADDRESS))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Missing environment variable: {0}")]
    MissingEnv(&'static str),
}

/// Load configuration from a TOML file, apply env overrides and validate
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<BotConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: BotConfig = toml::from_str(&content)?;
    finish(config)
}

/// Defaults plus env overrides, for runs without a config file
pub fn default_config() -> Result<BotConfig, ConfigError> {
    finish(BotConfig::default())
}

fn finish(mut config: BotConfig) -> Result<BotConfig, ConfigError> {
    config.apply_overrides(|name| std::env::var(name).ok());
    config.validate()?;
    Ok(config)
}

impl BotConfig {
    /// Replace endpoint URLs with any set override variables
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = non_empty(lookup(ENV_APTOS_API_URL)) {
            self.aptos.api_url = url;
        }
        if let Some(url) = non_empty(lookup(ENV_SWAP_API_URL)) {
            self.swap.api_url = url;
        }
        if let Some(url) = non_empty(lookup(ENV_FEED_WS_URL)) {
            self.feed.ws_url = url;
        }
    }

    /// Validate all configuration parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.aptos.api_url.is_empty() {
            return Err(ConfigError::ValidationError(
                "aptos.api_url cannot be empty".to_string(),
            ));
        }

        if self.swap.api_url.is_empty() {
            return Err(ConfigError::ValidationError(
                "swap.api_url cannot be empty".to_string(),
            ));
        }

        if self.swap.amount == 0 {
            return Err(ConfigError::ValidationError(
                "swap.amount must be > 0".to_string(),
            ));
        }

        if self.transfer.recipient.is_empty() {
            return Err(ConfigError::ValidationError(
                "transfer.recipient cannot be empty".to_string(),
            ));
        }

        if self.feed.enabled {
            if !(self.feed.ws_url.starts_with("ws://") || self.feed.ws_url.starts_with("wss://")) {
                return Err(ConfigError::ValidationError(format!(
                    "feed.ws_url must be a ws:// or wss:// URL, got {}",
                    self.feed.ws_url
                )));
            }
            if self.feed.pair.is_empty() {
                return Err(ConfigError::ValidationError(
                    "feed.pair cannot be empty".to_string(),
                ));
            }
        }

        if self.http.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "http.timeout_secs must be > 0".to_string(),
            ));
        }

        Ok(())
    }
}
