//! 可分享实体类型
//!
//! 实体标签与短码前缀一一对应，集合是封闭的。

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, IntoEnumIterator};

use super::error::CodecError;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumIter, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EntityType {
    Project,
    Proposal,
}

impl EntityType {
    /// ShareId 中使用的标签
    pub fn tag(self) -> &'static str {
        match self {
            EntityType::Project => "project",
            EntityType::Proposal => "proposal",
        }
    }

    /// ShareCode 中使用的短前缀
    pub fn prefix(self) -> &'static str {
        match self {
            EntityType::Project => "p",
            EntityType::Proposal => "pr",
        }
    }

    /// 按标签查找（ASCII 大小写不敏感）
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::all().find(|entity| entity.tag().eq_ignore_ascii_case(tag))
    }

    /// 按短码前缀查找（ASCII 大小写不敏感）
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        Self::all().find(|entity| entity.prefix().eq_ignore_ascii_case(prefix))
    }

    pub fn all() -> impl Iterator<Item = EntityType> {
        EntityType::iter()
    }
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl std::str::FromStr for EntityType {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| CodecError::UnknownEntity(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_covers_every_variant() {
        for entity in EntityType::all() {
            assert_eq!(entity.tag(), entity.as_ref());
            assert_eq!(EntityType::from_tag(entity.tag()), Some(entity));
            assert_eq!(EntityType::from_prefix(entity.prefix()), Some(entity));
        }
    }

    #[test]
    fn test_prefixes_are_distinct() {
        let prefixes: HashSet<_> = EntityType::all().map(|e| e.prefix()).collect();
        assert_eq!(prefixes.len(), EntityType::all().count());
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(EntityType::from_tag("PROJECT"), Some(EntityType::Project));
        assert_eq!(EntityType::from_prefix("PR"), Some(EntityType::Proposal));
        assert_eq!(EntityType::from_tag("invoice"), None);
        assert_eq!(EntityType::from_prefix("x"), None);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("proposal".parse::<EntityType>(), Ok(EntityType::Proposal));
        assert_eq!(
            "order".parse::<EntityType>(),
            Err(CodecError::UnknownEntity("order".to_string()))
        );
    }
}
