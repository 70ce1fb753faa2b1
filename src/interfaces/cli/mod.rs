//! CLI interface module
//!
//! This module provides command-line interface functionality for sharelink.

pub mod commands;

use crate::cli::{Commands, ConfigCommands};
use commands::{config_generate, config_show, decode_code, encode_share_id, link, resolve, slug};
use std::fmt;

#[derive(Debug)]
pub enum CliError {
    ParseError(String),
    CommandError(String),
    ConfigError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::ParseError(msg) => format!("Parse error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
            CliError::ConfigError(msg) => format!("Config error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::ParseError(msg) => {
                format!("{} {}", "Parse error:".yellow().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
            CliError::ConfigError(msg) => {
                format!("{} {}", "Config error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<crate::errors::SharelinkError> for CliError {
    fn from(err: crate::errors::SharelinkError) -> Self {
        match err {
            crate::errors::SharelinkError::Config(msg) => CliError::ConfigError(msg),
            other => CliError::CommandError(other.to_string()),
        }
    }
}

impl From<crate::codec::CodecError> for CliError {
    fn from(err: crate::codec::CodecError) -> Self {
        CliError::ParseError(format!("[{}] {}", err.code(), err))
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::CommandError(format!("JSON output failed: {}", err))
    }
}

/// Run a CLI command from clap-parsed input
pub fn run_cli_command(cmd: Commands) -> Result<(), CliError> {
    match cmd {
        Commands::Encode { share_id, json } => encode_share_id(&share_id, json),
        Commands::Decode { code, json } => decode_code(&code, json),
        Commands::Slug { title } => slug(&title.join(" ")),
        Commands::Link {
            share_id,
            title,
            origin,
            json,
        } => link(&share_id, title.as_deref(), origin.as_deref(), json),
        Commands::Resolve {
            route,
            segment,
            json,
        } => resolve(&route, &segment, json),
        Commands::Config { action } => match action {
            ConfigCommands::Generate { output_path, force } => config_generate(output_path, force),
            ConfigCommands::Show { json } => config_show(json),
        },
        Commands::Serve => Err(CliError::CommandError(
            "serve is handled by the server runtime".to_string(),
        )),
    }
}
