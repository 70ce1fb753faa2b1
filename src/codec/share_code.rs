//! ShareCode：`<prefix>-<A>-<B>-<C>`
//!
//! base64url 字母表本身包含 `-`，因此 A / C 里可能出现分隔符。
//! 按 `-` 切分得到的段数多于 4 时，按定宽（22 字符）从两端恢复 A 和 C。

use std::fmt;

use super::entity::EntityType;
use super::error::{CodecError, Field, Result};

/// 16 字节 base64url（无填充）的长度
pub const UUID_SEGMENT_WIDTH: usize = 22;

/// 解析后的 ShareCode，各段仍是编码后的文本
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareCode<'a> {
    pub entity: EntityType,
    pub primary: &'a str,
    pub timestamp: &'a str,
    pub secondary: &'a str,
}

impl<'a> ShareCode<'a> {
    /// 结构解析，不解码载荷
    pub fn parse(code: &'a str) -> Result<Self> {
        if code.is_empty() {
            return Err(CodecError::EmptyCode);
        }

        let Some((prefix, payload)) = code.split_once('-') else {
            return Err(CodecError::SegmentCount { found: 1 });
        };

        let (primary, timestamp, secondary) = split_payload(payload)?;

        let entity = EntityType::from_prefix(prefix)
            .ok_or_else(|| CodecError::UnknownPrefix(prefix.to_string()))?;

        for (segment, field) in [
            (primary, Field::PrimaryUuid),
            (timestamp, Field::Timestamp),
            (secondary, Field::SecondaryUuid),
        ] {
            if segment.is_empty() {
                return Err(CodecError::EmptySegment { field });
            }
        }

        Ok(Self {
            entity,
            primary,
            timestamp,
            secondary,
        })
    }
}

fn split_payload(payload: &str) -> Result<(&str, &str, &str)> {
    let segments: Vec<&str> = payload.split('-').collect();
    match segments.len() {
        3 => Ok((segments[0], segments[1], segments[2])),
        n if n > 3 => split_fixed_width(payload).ok_or(CodecError::SegmentCount { found: n + 1 }),
        n => Err(CodecError::SegmentCount { found: n + 1 }),
    }
}

/// `A(22) '-' B '-' C(22)`，B 中不允许出现 `-`
fn split_fixed_width(payload: &str) -> Option<(&str, &str, &str)> {
    let bytes = payload.as_bytes();
    let len = bytes.len();
    if !payload.is_ascii() || len < UUID_SEGMENT_WIDTH * 2 + 3 {
        return None;
    }

    let middle_start = UUID_SEGMENT_WIDTH + 1;
    let middle_end = len - UUID_SEGMENT_WIDTH - 1;
    if bytes[UUID_SEGMENT_WIDTH] != b'-' || bytes[middle_end] != b'-' {
        return None;
    }

    let timestamp = &payload[middle_start..middle_end];
    if timestamp.is_empty() || timestamp.contains('-') {
        return None;
    }

    Some((
        &payload[..UUID_SEGMENT_WIDTH],
        timestamp,
        &payload[middle_end + 1..],
    ))
}

impl fmt::Display for ShareCode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}-{}",
            self.entity.prefix(),
            self.primary,
            self.timestamp,
            self.secondary
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_four_segments() {
        let code = ShareCode::parse("p-C54vGhERIiIzM0REVVVmZg-76a6hxwy0-qrvM3VVVZmZ3d4iImZkAAA").unwrap();
        assert_eq!(code.entity, EntityType::Project);
        assert_eq!(code.primary, "C54vGhERIiIzM0REVVVmZg");
        assert_eq!(code.timestamp, "76a6hxwy0");
        assert_eq!(code.secondary, "qrvM3VVVZmZ3d4iImZkAAA");
    }

    #[test]
    fn test_hyphens_inside_payload() {
        let raw = "pr---8AAAAAAAAAAAAAAAAAAA-7663kq0zb-AAAAAAAAAAAAAAAAAAAA-w";
        let code = ShareCode::parse(raw).unwrap();
        assert_eq!(code.entity, EntityType::Proposal);
        assert_eq!(code.primary, "--8AAAAAAAAAAAAAAAAAAA");
        assert_eq!(code.timestamp, "7663kq0zb");
        assert_eq!(code.secondary, "AAAAAAAAAAAAAAAAAAAA-w");
        assert_eq!(code.to_string(), raw);
    }

    #[test]
    fn test_segment_count() {
        assert_eq!(ShareCode::parse(""), Err(CodecError::EmptyCode));
        assert_eq!(ShareCode::parse("p"), Err(CodecError::SegmentCount { found: 1 }));
        assert_eq!(
            ShareCode::parse("p-a-b"),
            Err(CodecError::SegmentCount { found: 3 })
        );
        assert_eq!(
            ShareCode::parse("p-a-b-c-d"),
            Err(CodecError::SegmentCount { found: 5 })
        );
    }

    #[test]
    fn test_unknown_prefix() {
        assert_eq!(
            ShareCode::parse("x-!!!-###-$$$"),
            Err(CodecError::UnknownPrefix("x".to_string()))
        );
    }

    #[test]
    fn test_empty_segment() {
        assert_eq!(
            ShareCode::parse("p--abc-def"),
            Err(CodecError::EmptySegment {
                field: Field::PrimaryUuid
            })
        );
    }
}
