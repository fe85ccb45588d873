//! CLI Adapter
//!
//! Command-line interface for the sniper bot.
//! Uses clap derive macros for argument parsing.

mod commands;

pub use commands::CliApp;

/// Parse process arguments
pub fn init() -> CliApp {
    use clap::Parser;
    CliApp::parse()
}
