//! 分享链接的生成与解析
//!
//! - `builder`: ShareId + 标题 -> `<origin>/<route>/<slug>-<code>`
//! - `resolver`: 路由段 + 末尾路径段 -> ShareId
//! - `routes`: 实体与应用路由段的对照表

mod builder;
mod resolver;
mod routes;

pub use builder::{LinkKind, ShareLink, ShareLinkBuilder};
pub use resolver::{Resolution, resolve_segment};
pub use routes::{RouteError, RouteTable};
