//! 配置值验证模块

use url::Url;

use super::{LinksConfig, LoggingConfig, StaticConfig};

const LOG_FORMATS: &[&str] = &["text", "json"];

/// 验证整个静态配置，返回第一个错误
pub fn validate_static_config(config: &StaticConfig) -> Result<(), String> {
    if config.server.port == 0 {
        return Err("server.port cannot be 0".to_string());
    }
    validate_links_config(&config.links)?;
    validate_logging_config(&config.logging)?;
    Ok(())
}

/// 检查项目：
/// 1. origin 是 http/https URL
/// 2. 跳转模板包含 `{share_id}`
/// 3. 路由段非空、互不相同、只有一段
pub fn validate_links_config(links: &LinksConfig) -> Result<(), String> {
    let origin = Url::parse(&links.origin)
        .map_err(|e| format!("Invalid links.origin '{}': {}", links.origin, e))?;
    if !matches!(origin.scheme(), "http" | "https") {
        return Err(format!(
            "Invalid links.origin '{}': only http:// and https:// are allowed",
            links.origin
        ));
    }

    if !links.target_template.contains("{share_id}") {
        return Err(format!(
            "links.target_template '{}' must contain the {{share_id}} placeholder",
            links.target_template
        ));
    }

    links
        .route_table()
        .map_err(|e| format!("Invalid links.routes: {}", e))?;

    Ok(())
}

pub fn validate_logging_config(logging: &LoggingConfig) -> Result<(), String> {
    if !LOG_FORMATS.contains(&logging.format.as_str()) {
        return Err(format!(
            "Invalid logging.format '{}'. Valid: {:?}",
            logging.format, LOG_FORMATS
        ));
    }

    tracing_subscriber::EnvFilter::try_new(&logging.level)
        .map_err(|e| format!("Invalid logging.level '{}': {}", logging.level, e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_static_config(&StaticConfig::default()).is_ok());
    }

    #[test]
    fn test_origin_must_be_http() {
        let mut links = LinksConfig::default();
        links.origin = "ftp://example.com".to_string();
        assert!(validate_links_config(&links).is_err());

        links.origin = "not a url".to_string();
        assert!(validate_links_config(&links).is_err());

        links.origin = "https://app.example.com/".to_string();
        assert!(validate_links_config(&links).is_ok());
    }

    #[test]
    fn test_template_needs_placeholder() {
        let mut links = LinksConfig::default();
        links.target_template = "/share/{entity}".to_string();
        let err = validate_links_config(&links).unwrap_err();
        assert!(err.contains("{share_id}"));
    }

    #[test]
    fn test_duplicate_routes_rejected() {
        let mut links = LinksConfig::default();
        links.routes.proposal = links.routes.project.clone();
        assert!(validate_links_config(&links).is_err());
    }

    #[test]
    fn test_log_format() {
        let logging = LoggingConfig {
            format: "xml".to_string(),
            ..Default::default()
        };
        assert!(validate_logging_config(&logging).is_err());
    }
}
