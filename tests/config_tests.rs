//! Configuration loading tests

use std::fs;

use tempfile::TempDir;

use sharelink::codec::EntityType;
use sharelink::config::{
    LinksConfig, StaticConfig, get_config, update_config, validate_static_config,
};

#[test]
fn test_load_from_toml_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("sharelink.toml");
    fs::write(
        &path,
        r#"
[server]
port = 9090

[links]
origin = "https://share.example.com"
target_template = "/open/{entity}?id={share_id}"

[links.routes]
project = "projects"
"#,
    )
    .unwrap();

    let config = StaticConfig::try_load(path.to_str().unwrap()).expect("config loads");
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.links.origin, "https://share.example.com");
    assert_eq!(config.links.routes.project, "projects");
    assert_eq!(config.links.routes.proposal, "spr");

    let table = config.links.route_table().unwrap();
    assert_eq!(table.entity_for("projects"), Some(EntityType::Project));
    assert!(validate_static_config(&config).is_ok());
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    let config = StaticConfig::load(path.to_str());
    assert_eq!(config.links, LinksConfig::default());
    assert_eq!(config.server.port, StaticConfig::default().server.port);
}

#[test]
fn test_invalid_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[server]\nport = \"not a port\"\n").unwrap();

    let err = StaticConfig::try_load(path.to_str().unwrap()).unwrap_err();
    assert_eq!(err.code(), "E001");
}

#[test]
fn test_env_overrides_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("env.toml");
    fs::write(&path, "[logging]\nlevel = \"info\"\n").unwrap();

    // SAFETY: 只有本测试读写这个变量
    unsafe { std::env::set_var("SHARELINK__LOGGING__LEVEL", "debug") };
    let config = StaticConfig::try_load(path.to_str().unwrap()).unwrap();
    unsafe { std::env::remove_var("SHARELINK__LOGGING__LEVEL") };

    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_save_and_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = StaticConfig::default();
    config.links.origin = "https://saved.example.com".to_string();
    config.save_to_file(&path).expect("save");

    let reloaded = StaticConfig::try_load(path.to_str().unwrap()).unwrap();
    assert_eq!(reloaded.links.origin, "https://saved.example.com");
}

#[test]
fn test_sample_config_parses() {
    let sample = StaticConfig::generate_sample_config();
    let parsed: StaticConfig = toml::from_str(&sample).expect("sample is valid toml");
    assert_eq!(parsed, StaticConfig::default());
}

#[test]
fn test_update_global_config() {
    let mut config = StaticConfig::default();
    config.server.port = 4321;
    update_config(config);
    assert_eq!(get_config().server.port, 4321);
}
