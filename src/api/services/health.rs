use actix_web::{HttpResponse, Responder, web};
use tracing::trace;

use super::types::{ApiResponse, HealthResponse};

// 应用启动时间结构体
#[derive(Clone, Debug)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

impl AppStartTime {
    pub fn now() -> Self {
        Self {
            start_datetime: chrono::Utc::now(),
        }
    }
}

/// 编解码器无外部依赖，健康检查只报告进程状态
pub struct HealthService;

impl HealthService {
    pub async fn health_check(app_start_time: web::Data<AppStartTime>) -> impl Responder {
        trace!("Received health check request");

        let now = chrono::Utc::now();
        let uptime_seconds = (now - app_start_time.start_datetime).num_seconds().max(0) as u64;

        HttpResponse::Ok().json(ApiResponse::ok(HealthResponse {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            started_at: app_start_time.start_datetime.to_rfc3339(),
            uptime_seconds,
        }))
    }

    pub async fn liveness_check() -> impl Responder {
        HttpResponse::NoContent().finish()
    }
}

pub fn health_routes() -> actix_web::Scope {
    web::scope("/health")
        .route("", web::get().to(HealthService::health_check))
        .route("", web::head().to(HealthService::health_check))
        .route("/live", web::get().to(HealthService::liveness_check))
        .route("/live", web::head().to(HealthService::liveness_check))
}
