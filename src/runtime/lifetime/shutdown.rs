use tokio::signal;
use tracing::{info, warn};

/// 等待 Ctrl+C
///
/// 编解码无状态，没有需要刷新的数据，收到信号后直接返回。
pub async fn listen_for_shutdown() {
    match signal::ctrl_c().await {
        Ok(()) => {
            info!("Shutdown signal received");
        }
        Err(e) => {
            warn!(
                "Failed to listen for Ctrl+C: {}. Proceeding with shutdown anyway.",
                e
            );
        }
    }
}
