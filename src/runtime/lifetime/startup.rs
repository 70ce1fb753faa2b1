use anyhow::{Context, Result, anyhow};
use tracing::{debug, info};

use crate::api::AppState;
use crate::config::{StaticConfig, get_config, validate_static_config};

pub struct StartupContext {
    pub config: std::sync::Arc<StaticConfig>,
    pub state: AppState,
}

/// 准备服务器启动的上下文
/// 包括配置校验和路由表构建
pub fn prepare_server_startup() -> Result<StartupContext> {
    let start_time = std::time::Instant::now();
    debug!("Starting pre-startup processing...");

    let config = get_config();
    validate_static_config(&config).map_err(|e| anyhow!("Invalid configuration: {}", e))?;

    let state = AppState::from_config(&config.links).context("Failed to build route table")?;

    for (entity, route) in state.routes().iter() {
        info!("Share route: /{}/{{slug}}-{}-... -> {}", route, entity.prefix(), entity);
    }
    info!("Link origin: {}", state.builder.origin());
    debug!(
        "Pre-startup processing completed in {:?}",
        start_time.elapsed()
    );

    Ok(StartupContext { config, state })
}
