use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use sharelink::cli::Cli;
use sharelink::config::{get_config, init_config};
use sharelink::runtime::modes::{self, Mode};

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_config(cli.config.as_deref());

    let mode = modes::detect_mode(cli.command.as_ref());
    match (mode, cli.command) {
        #[cfg(feature = "server")]
        (Mode::Server, _) => match run_server_mode() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{} {:#}", "[ERROR]".red().bold(), e);
                ExitCode::FAILURE
            }
        },
        #[cfg(feature = "cli")]
        (Mode::Cli, Some(cmd)) => match modes::run_cli(cmd) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{}", e.format_colored());
                ExitCode::FAILURE
            }
        },
        _ => {
            eprintln!("{}", "No execution mode enabled in this build".red());
            ExitCode::FAILURE
        }
    }
}

#[cfg(feature = "server")]
fn run_server_mode() -> anyhow::Result<()> {
    let config = get_config();
    let _guard = sharelink::system::logging::init_logging(&config.logging)?;

    actix_web::rt::System::new().block_on(modes::run_server())
}
