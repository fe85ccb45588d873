//! CLI Arguments
//!
//! The bot has a single entry point. With no flags it runs every step once
//! with built-in defaults and keeps the price feed open.

use clap::Parser;
use std::path::PathBuf;

/// Aptos sniper bot: balance, gas, DEX swap and a locally signed transfer
#[derive(Parser, Debug)]
#[command(
    name = "aptos-sniper",
    version = env!("CARGO_PKG_VERSION"),
    author = env!("CARGO_PKG_AUTHORS"),
    about = "Aptos sniper bot with live price feed",
    long_about = "Checks the wallet balance and gas fee, submits an example DEX swap, \
                  sends a locally signed transfer and streams price updates for a trading pair."
)]
pub struct CliApp {
    /// Optional TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Skip the price feed listener
    #[arg(long)]
    pub no_feed: bool,

    /// Include this bot's debug output
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable debug logging for every crate
    #[arg(long)]
    pub debug: bool,
}

impl CliApp {
    /// Log filter implied by the flags.
    ///
    /// Default shows step results at `info` and keeps dependencies at `warn`.
    /// `--verbose` adds this crate's `debug` output (request URLs, feed state
    /// changes, local signature checks). `--debug` turns on `debug` everywhere.
    pub fn log_level(&self) -> &'static str {
        if self.debug {
            "debug"
        } else if self.verbose {
            "warn,aptos_sniper=debug"
        } else {
            "warn,aptos_sniper=info"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags() {
        let app = CliApp::try_parse_from(["aptos-sniper"]).unwrap();
        assert!(app.config.is_none());
        assert!(!app.no_feed);
        assert!(!app.verbose);
        assert!(!app.debug);
    }

    #[test]
    fn test_all_flags() {
        let app = CliApp::try_parse_from([
            "aptos-sniper",
            "--config",
            "bot.toml",
            "--no-feed",
            "--debug",
        ])
        .unwrap();

        assert_eq!(app.config, Some(PathBuf::from("bot.toml")));
        assert!(app.no_feed);
        assert_eq!(app.log_level(), "debug");
    }

    #[test]
    fn test_log_levels_are_distinct() {
        let default = CliApp::try_parse_from(["aptos-sniper"]).unwrap();
        let verbose = CliApp::try_parse_from(["aptos-sniper", "-v"]).unwrap();
        let debug = CliApp::try_parse_from(["aptos-sniper", "--debug", "-v"]).unwrap();

        assert_eq!(default.log_level(), "warn,aptos_sniper=info");
        assert_eq!(verbose.log_level(), "warn,aptos_sniper=debug");
        assert_eq!(debug.log_level(), "debug");
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(CliApp::try_parse_from(["aptos-sniper", "--live"]).is_err());
    }
}
