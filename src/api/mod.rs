//! HTTP 接口
//!
//! - `/{route}/{segment}`: 解析分享链接并 307 跳转
//! - `/api/v1`: 生成链接、解码短码、生成 slug
//! - `/health`: 健康检查

pub mod services;

use actix_web::web;

use crate::config::LinksConfig;
use crate::links::{RouteError, RouteTable, ShareLinkBuilder};

/// 所有 handler 共享的只读状态
#[derive(Debug, Clone)]
pub struct AppState {
    pub builder: ShareLinkBuilder,
    pub links: LinksConfig,
}

impl AppState {
    pub fn from_config(links: &LinksConfig) -> Result<Self, RouteError> {
        Ok(Self {
            builder: links.link_builder()?,
            links: links.clone(),
        })
    }

    pub fn routes(&self) -> &RouteTable {
        self.builder.routes()
    }
}

/// 注册全部路由，跳转路由必须最后注册
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(services::health_routes())
        .service(services::link_routes())
        .service(services::redirect_routes());
}
