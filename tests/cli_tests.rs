//! CLI command tests
//!
//! Parses argv with clap and runs the resulting command in-process.

use clap::Parser;
use tempfile::TempDir;

use sharelink::cli::{Cli, Commands, ConfigCommands};
use sharelink::codec::encode;
use sharelink::config::StaticConfig;
use sharelink::interfaces::cli::{CliError, run_cli_command};

const SHARE_ID: &str = "proposal_0b9e2f1a-1111-2222-3333-444455556666_20240115_093000_aabbccdd-5555-6666-7777-888899990000";

fn run(args: &[&str]) -> Result<(), CliError> {
    let cli = Cli::try_parse_from(args).expect("argv parses");
    run_cli_command(cli.command.expect("command given"))
}

#[test]
fn test_encode_and_decode() {
    assert!(run(&["sharelink", "encode", SHARE_ID]).is_ok());
    assert!(run(&["sharelink", "encode", SHARE_ID, "--json"]).is_ok());

    let code = encode(SHARE_ID).unwrap();
    assert!(run(&["sharelink", "decode", &code]).is_ok());
    assert!(run(&["sharelink", "decode", &code, "--json"]).is_ok());
}

#[test]
fn test_codec_failures_are_parse_errors() {
    let err = run(&["sharelink", "encode", "invoice_1_2_3_4"]).unwrap_err();
    assert!(matches!(err, CliError::ParseError(ref msg) if msg.contains("C002")));

    let err = run(&["sharelink", "decode", "x-!!!-###-$$$"]).unwrap_err();
    assert!(matches!(err, CliError::ParseError(_)));
}

#[test]
fn test_slug_accepts_hyphen_words() {
    assert!(run(&["sharelink", "slug", "--", "-Draft-", "Notes"]).is_ok());
    assert!(run(&["sharelink", "slug", "!!!"]).is_ok());
}

#[test]
fn test_link_and_resolve() {
    assert!(
        run(&[
            "sharelink",
            "link",
            SHARE_ID,
            "--title",
            "Budget review",
            "--origin",
            "https://app.example.com",
        ])
        .is_ok()
    );
    assert!(run(&["sharelink", "link", "invoice_1_2_3_4"]).is_err());

    let segment = format!("budget-review-{}", encode(SHARE_ID).unwrap());
    assert!(run(&["sharelink", "resolve", "spr", &segment, "--json"]).is_ok());
    assert!(run(&["sharelink", "resolve", "spr", "nothing-here"]).is_err());
}

#[test]
fn test_config_generate_with_force() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("generated.toml");
    let path_str = path.to_str().unwrap();

    assert!(run(&["sharelink", "config", "generate", path_str, "--force"]).is_ok());
    // 已存在且 --force 时不询问，直接覆盖
    assert!(run(&["sharelink", "config", "generate", path_str, "--force"]).is_ok());

    let loaded = StaticConfig::try_load(path_str).unwrap();
    assert_eq!(loaded.links, StaticConfig::default().links);
}

#[test]
fn test_serve_is_not_a_cli_command() {
    let cli = Cli::try_parse_from(["sharelink", "serve"]).unwrap();
    let cmd = cli.command.unwrap();
    assert!(cmd.is_server());
    assert!(run_cli_command(cmd).is_err());
}

#[test]
fn test_config_show_subcommand_parses() {
    let cli = Cli::try_parse_from(["sharelink", "config", "show", "--json"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Config {
            action: ConfigCommands::Show { json: true }
        })
    ));
}
