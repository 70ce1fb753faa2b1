//! Server mode
//!
//! Starts the HTTP resolver. Logging must already be initialized.

use std::time::Duration;

use actix_web::middleware::{Compress, DefaultHeaders};
use actix_web::{App, HttpServer, web};
use anyhow::{Context, Result};
use tracing::{error, info, warn};

use crate::api::configure_routes;
use crate::api::services::AppStartTime;
use crate::runtime::lifetime::{shutdown, startup};

// 请求体只有 /api/v1/links 的小 JSON
const MAX_PAYLOAD_BYTES: usize = 16 * 1024;

pub async fn run_server() -> Result<()> {
    let started = AppStartTime::now();

    let startup::StartupContext { config, state } = startup::prepare_server_startup()
        .inspect_err(|e| error!("Server startup failed: {:#}", e))?;

    let state = web::Data::new(state);
    let started = web::Data::new(started);
    let workers = config.server.cpu_count.clamp(1, 32);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Compress::default())
            // 路径中含 ShareId，不向目标站点发送 Referer
            .wrap(
                DefaultHeaders::new()
                    .add(("Referrer-Policy", "no-referrer"))
                    .add(("X-Content-Type-Options", "nosniff")),
            )
            .app_data(state.clone())
            .app_data(started.clone())
            .app_data(web::JsonConfig::default().limit(MAX_PAYLOAD_BYTES))
            .configure(configure_routes)
    })
    .client_request_timeout(Duration::from_secs(5))
    .workers(workers);

    let bind_address = format!("{}:{}", config.server.host, config.server.port);
    let server = server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run();
    info!(
        "Share resolver listening on http://{} ({} workers)",
        bind_address, workers
    );

    tokio::select! {
        res = server => res.context("HTTP server exited with error")?,
        _ = shutdown::listen_for_shutdown() => warn!("Stopping share resolver"),
    }

    Ok(())
}
