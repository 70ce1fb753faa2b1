//! CLI mode
//!
//! One-shot commands. Logs go to stderr so stdout stays machine-readable.

use crate::cli::Commands;
use crate::interfaces::cli::{CliError, run_cli_command};
use crate::system::logging::init_cli_logging;

pub fn run_cli(cmd: Commands) -> Result<(), CliError> {
    init_cli_logging();
    run_cli_command(cmd)
}
