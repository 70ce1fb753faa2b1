use serde::{Deserialize, Serialize};

use crate::codec::EntityType;
use crate::errors::{Result, SharelinkError};
use crate::links::{RouteError, RouteTable, ShareLinkBuilder};

/// 默认配置文件路径
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 环境变量前缀，示例：SHARELINK__SERVER__PORT=9999
pub const ENV_PREFIX: &str = "SHARELINK";

/// 静态配置（从 TOML 加载，启动时使用）
///
/// - server: 监听地址、端口、worker 数量
/// - links: 链接 origin、跳转模板、各实体的路由段
/// - logging: 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StaticConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub links: LinksConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StaticConfig {
    /// 从 TOML 文件和环境变量加载配置
    ///
    /// 优先级：ENV > config.toml > 默认值
    /// ENV 前缀：SHARELINK，分隔符：__
    pub fn load(path: Option<&str>) -> Self {
        let path = path.unwrap_or(DEFAULT_CONFIG_PATH);
        match Self::try_load(path) {
            Ok(config) => {
                if std::path::Path::new(path).exists() {
                    eprintln!("[INFO] Configuration loaded from: {}", path);
                }
                config
            }
            Err(e) => {
                eprintln!("[ERROR] {}", e);
                Self::default()
            }
        }
    }

    /// 同 [`load`](Self::load)，但把构建/反序列化错误交给调用方
    pub fn try_load(path: &str) -> Result<Self> {
        use config::{Config, Environment, File};

        let settings = Config::builder()
            // 1. 从 TOML 文件加载（可选）
            .add_source(File::with_name(path).required(false))
            // 2. 从环境变量覆盖
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| SharelinkError::config(format!("Failed to build config: {}", e)))?;

        settings
            .try_deserialize::<StaticConfig>()
            .map_err(|e| SharelinkError::config(format!("Failed to deserialize config: {}", e)))
    }

    /// 生成示例 TOML 配置文件
    pub fn generate_sample_config() -> String {
        let sample_config = Self::default();
        toml::to_string_pretty(&sample_config)
            .unwrap_or_else(|e| format!("Error generating sample config: {}", e))
    }

    /// 保存配置到 TOML 文件
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| SharelinkError::serialization(e.to_string()))?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_server_host")]
    pub host: String,
    #[serde(default = "default_server_port")]
    pub port: u16,
    #[serde(default = "default_cpu_count")]
    pub cpu_count: usize,
}

/// 链接配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinksConfig {
    /// 生成链接时使用的 origin，如 https://app.example.com
    #[serde(default = "default_origin")]
    pub origin: String,
    /// 解析成功后的跳转目标，支持 `{entity}` 和 `{share_id}` 占位符
    #[serde(default = "default_target_template")]
    pub target_template: String,
    #[serde(default)]
    pub routes: RoutesConfig,
}

/// 各实体的应用路由段
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoutesConfig {
    #[serde(default = "default_project_route")]
    pub project: String,
    #[serde(default = "default_proposal_route")]
    pub proposal: String,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    #[serde(default = "default_enable_rotation")]
    pub enable_rotation: bool,
}

impl LinksConfig {
    pub fn route_table(&self) -> std::result::Result<RouteTable, RouteError> {
        self.routes.route_table()
    }

    pub fn link_builder(&self) -> std::result::Result<ShareLinkBuilder, RouteError> {
        Ok(ShareLinkBuilder::new(&self.origin, self.route_table()?))
    }

    /// 用实体和 ShareId 填充跳转模板
    pub fn render_target(&self, entity: EntityType, share_id: &str) -> String {
        self.target_template
            .replace("{entity}", entity.tag())
            .replace("{share_id}", &urlencoding::encode(share_id))
    }
}

impl RoutesConfig {
    pub fn route_table(&self) -> std::result::Result<RouteTable, RouteError> {
        RouteTable::new([
            (EntityType::Project, self.project.as_str()),
            (EntityType::Proposal, self.proposal.as_str()),
        ])
    }
}

// ============================================================
// Default value functions for static config
// ============================================================

fn default_server_host() -> String {
    "127.0.0.1".to_string()
}

fn default_server_port() -> u16 {
    8080
}

fn default_cpu_count() -> usize {
    num_cpus::get()
}

fn default_origin() -> String {
    "http://127.0.0.1:8080".to_string()
}

fn default_target_template() -> String {
    "/share/{entity}/{share_id}".to_string()
}

fn default_project_route() -> String {
    "sp".to_string()
}

fn default_proposal_route() -> String {
    "spr".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_max_backups() -> u32 {
    5
}

fn default_enable_rotation() -> bool {
    true
}

// ============================================================
// Default implementations
// ============================================================

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
            cpu_count: default_cpu_count(),
        }
    }
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            target_template: default_target_template(),
            routes: RoutesConfig::default(),
        }
    }
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            project: default_project_route(),
            proposal: default_proposal_route(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
            max_backups: default_max_backups(),
            enable_rotation: default_enable_rotation(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_routes_match_route_table_default() {
        let table = LinksConfig::default().route_table().unwrap();
        assert_eq!(table, RouteTable::default());
    }

    #[test]
    fn test_render_target() {
        let links = LinksConfig::default();
        assert_eq!(
            links.render_target(EntityType::Proposal, "proposal_a b"),
            "/share/proposal/proposal_a%20b"
        );
    }

    #[test]
    fn test_sample_config_round_trips_through_toml() {
        let sample = StaticConfig::generate_sample_config();
        let parsed: StaticConfig = toml::from_str(&sample).unwrap();
        assert_eq!(parsed, StaticConfig::default());
    }
}
