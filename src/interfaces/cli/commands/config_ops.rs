//! config generate / show 命令

use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::path::Path;

use super::super::CliError;
use crate::config::{StaticConfig, get_config, validate_static_config};

pub fn config_generate(output_path: Option<String>, force: bool) -> Result<(), CliError> {
    let path = output_path.unwrap_or_else(|| "config.example.toml".to_string());

    // 检查文件是否存在，非 --force 模式下交互确认
    if !force && Path::new(&path).exists() {
        print!(
            "{} {} {}",
            "File already exists:".yellow(),
            path.blue(),
            "Overwrite? [y/N] ".yellow()
        );
        io::stdout()
            .flush()
            .map_err(|e| CliError::CommandError(e.to_string()))?;

        let mut input = String::new();
        io::stdin()
            .lock()
            .read_line(&mut input)
            .map_err(|e| CliError::CommandError(e.to_string()))?;
        if !input.trim().eq_ignore_ascii_case("y") {
            println!("{}", "Aborted.".red());
            return Ok(());
        }
    }

    StaticConfig::default().save_to_file(&path)?;
    println!(
        "{} {}",
        "Configuration file generated successfully".green(),
        path.blue()
    );
    Ok(())
}

pub fn config_show(json: bool) -> Result<(), CliError> {
    let config = get_config();

    if json {
        println!("{}", serde_json::to_string_pretty(config.as_ref())?);
    } else {
        let content = toml::to_string_pretty(config.as_ref())
            .map_err(|e| CliError::CommandError(e.to_string()))?;
        print!("{}", content);
    }

    if let Err(e) = validate_static_config(&config) {
        eprintln!("{} {}", "Warning:".yellow().bold(), e);
    }
    Ok(())
}
