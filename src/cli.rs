//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure for sharelink using clap's derive macros.

use clap::{Parser, Subcommand};

/// Sharelink - compact, stateless share links
#[derive(Parser, Debug)]
#[command(name = "sharelink")]
#[command(version)]
#[command(about = "Compact, stateless share links for project and proposal shares", long_about = None)]
pub struct Cli {
    /// Configuration file path (default: config.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP resolver (default when no command is given)
    Serve,

    /// Compress a share id into a short code
    Encode {
        /// e.g. project_<uuid>_<YYYYMMDD>_<HHMMSS>_<uuid>
        share_id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Expand a short code back into its share id
    Decode {
        /// e.g. p-<A>-<B>-<C>
        code: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Turn a title into a URL slug
    Slug {
        /// Title words (joined with spaces)
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        title: Vec<String>,
    },

    /// Build a full share URL
    Link {
        share_id: String,

        /// Display title used for the slug
        #[arg(long)]
        title: Option<String>,

        /// Override links.origin
        #[arg(long)]
        origin: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve a `/<route>/<segment>` path to its share id
    Resolve {
        /// Application route segment, e.g. "sp"
        route: String,

        /// Trailing path segment, e.g. "q3-report-p-..."
        segment: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: config.example.toml)
        output_path: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the effective configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Commands {
    /// `serve` is the only long-running command
    pub fn is_server(&self) -> bool {
        matches!(self, Commands::Serve)
    }
}
