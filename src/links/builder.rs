//! 分享链接生成
//!
//! URL 形如 `<origin>/<route>/<slug>-<code>`；无法编码时退回
//! `<origin>/<route>/<share_id>`。

use serde::Serialize;

use super::routes::RouteTable;
use crate::codec::{self, CodecError, EntityType, ShareId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    /// 使用压缩短码
    Short,
    /// 使用原始 ShareId
    Literal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareLink {
    pub url: String,
    pub kind: LinkKind,
    pub entity: EntityType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub slug: String,
}

#[derive(Debug, Clone)]
pub struct ShareLinkBuilder {
    origin: String,
    routes: RouteTable,
}

impl ShareLinkBuilder {
    pub fn new(origin: &str, routes: RouteTable) -> Self {
        Self {
            origin: origin.trim_end_matches('/').to_string(),
            routes,
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// 实体标签无法识别时返回 `None`，调用方应省略链接
    pub fn build(&self, share_id: &str, title: &str) -> Option<ShareLink> {
        self.try_build(share_id, title).ok()
    }

    /// 同 [`build`](Self::build)，失败时给出编码错误
    pub fn try_build(&self, share_id: &str, title: &str) -> Result<ShareLink, CodecError> {
        let slug = codec::slugify(title);

        match ShareId::parse(share_id) {
            Ok(id) => {
                let entity = id.entity();
                let code = codec::default_codec().encode_id(&id);
                let route = self.routes.route_for(entity);
                let tail = if slug.is_empty() {
                    code.clone()
                } else {
                    format!("{}-{}", slug, code)
                };
                Ok(ShareLink {
                    url: format!("{}/{}/{}", self.origin, route, tail),
                    kind: LinkKind::Short,
                    entity,
                    code: Some(code),
                    slug,
                })
            }
            Err(err) => {
                let tag = share_id.split('_').next().unwrap_or_default();
                let entity = EntityType::from_tag(tag).ok_or(err)?;
                let route = self.routes.route_for(entity);
                Ok(ShareLink {
                    url: format!(
                        "{}/{}/{}",
                        self.origin,
                        route,
                        urlencoding::encode(share_id)
                    ),
                    kind: LinkKind::Literal,
                    entity,
                    code: None,
                    slug,
                })
            }
        }
    }
}

impl Default for ShareLinkBuilder {
    fn default() -> Self {
        Self::new("", RouteTable::default())
    }
}
