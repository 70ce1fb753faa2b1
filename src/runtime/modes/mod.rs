//! Mode routing
//!
//! This module provides unified entry points for different execution modes:
//! - Server mode (HTTP resolver)
//! - CLI mode (one-shot codec commands)

#[cfg(feature = "server")]
pub mod server;

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "server")]
pub use server::run_server;

#[cfg(feature = "cli")]
pub use cli::run_cli;

use crate::cli::Commands;

/// Mode detection result
#[derive(Debug, PartialEq)]
pub enum Mode {
    #[cfg(feature = "server")]
    Server,
    #[cfg(feature = "cli")]
    Cli,
    Unknown,
}

/// Detect which mode to run based on the parsed command
///
/// 1. No command or `serve` -> Server mode
/// 2. Any other command -> CLI mode
pub fn detect_mode(command: Option<&Commands>) -> Mode {
    match command {
        #[cfg(feature = "server")]
        None => Mode::Server,
        #[cfg(feature = "server")]
        Some(cmd) if cmd.is_server() => Mode::Server,
        #[cfg(feature = "cli")]
        Some(_) => Mode::Cli,
        #[allow(unreachable_patterns)]
        _ => Mode::Unknown,
    }
}
