//! 分享链接解析
//!
//! 路径段形如 `<slug>-<prefix>-<A>-<B>-<C>`。slug 与 base64url 载荷都可能包含
//! 标记文本 `-<prefix>-`，所以从最后一次出现开始向前逐个尝试。

use serde::Serialize;
use tracing::trace;

use super::routes::RouteTable;
use crate::codec::{self, EntityType, ShareId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "share_id", rename_all = "lowercase")]
pub enum Resolution {
    /// 由短码解出
    Decoded(String),
    /// 路径段本身就是 ShareId
    Literal(String),
}

impl Resolution {
    pub fn share_id(&self) -> &str {
        match self {
            Resolution::Decoded(id) | Resolution::Literal(id) => id,
        }
    }

    pub fn into_share_id(self) -> String {
        match self {
            Resolution::Decoded(id) | Resolution::Literal(id) => id,
        }
    }
}

/// 解析某实体路由下的末尾路径段，无法解析时返回 `None`
pub fn resolve_segment(entity: EntityType, segment: &str) -> Option<Resolution> {
    if segment.is_empty() {
        return None;
    }

    if let Some(id) = decode_candidates(entity, segment) {
        return Some(Resolution::Decoded(id.to_string()));
    }

    if is_literal_share_id(entity, segment) {
        trace!("Segment treated as literal share id: {}", segment);
        return Some(Resolution::Literal(segment.to_string()));
    }

    None
}

fn decode_candidates(entity: EntityType, segment: &str) -> Option<ShareId> {
    let codec = codec::default_codec();
    let marker = format!("-{}-", entity.prefix());

    // 标记可能重叠（如 `-p-p-`），逐字节位置检查而不是用 rmatch_indices
    let from_markers = (0..segment.len())
        .rev()
        .filter_map(|idx| segment.get(idx..))
        .filter(|rest| {
            rest.get(..marker.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(&marker))
        })
        .map(|rest| &rest[1..]);

    // 无 slug 时整个路径段就是短码
    let whole = segment
        .get(..marker.len() - 1)
        .filter(|head| head.eq_ignore_ascii_case(&marker[1..]))
        .map(|_| segment);

    // 载荷内部也可能出现标记，截断后的候选会被左补零解出另一个 UUID，
    // 只接受重新编码后与候选完全一致的短码
    from_markers
        .chain(whole)
        .filter_map(|candidate| {
            codec
                .decode_id(candidate)
                .ok()
                .filter(|id| codec.encode_id(id).eq_ignore_ascii_case(candidate))
        })
        .find(|id| id.entity() == entity)
}

/// 字面量回退：首字段是该实体的标签即可，由后端决定是否存在
fn is_literal_share_id(entity: EntityType, segment: &str) -> bool {
    segment
        .split_once('_')
        .and_then(|(tag, _)| EntityType::from_tag(tag))
        == Some(entity)
}

impl RouteTable {
    /// 路由段 + 末尾路径段 -> (实体, 解析结果)
    pub fn resolve_path(&self, route: &str, segment: &str) -> Option<(EntityType, Resolution)> {
        let entity = self.entity_for(route)?;
        resolve_segment(entity, segment).map(|resolution| (entity, resolution))
    }
}
