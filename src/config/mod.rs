//! Configuration Module
//!
//! Loads and validates configuration from TOML files and the environment.

pub mod loader;

pub use loader::{
    default_config, load_config, BotConfig, ConfigError, Credentials,
};
