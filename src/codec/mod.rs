//! 分享链接短码编解码
//!
//! 将冗长的 ShareId 无状态地压缩为 URL 安全的 ShareCode，并可逆还原：
//!
//! ```text
//! project_0b9e2f1a-1111-2222-3333-444455556666_20240115_093000_aabbccdd-5555-6666-7777-888899990000
//!   <-> p-C54vGhERIiIzM0REVVVmZg-76a6hxwy0-qrvM3VVVZmZ3d4iImZkAAA
//! ```
//!
//! - UUID 的 16 个原始字节使用 base64url（无填充）编码，22 个字符
//! - 14 位时间戳作为整数以 base36 表示
//! - 实体类型映射为短前缀
//!
//! 不涉及密钥或服务端映射表，任何人都能解码，不能用作访问控制。
//! 所有函数都是纯函数，不记录日志，不 panic。

mod base64url;
mod entity;
mod error;
mod radix;
mod share_code;
mod share_id;
mod slug;

pub use base64url::{Base64Url, ByteEncoding};
pub use entity::EntityType;
pub use error::{CodecError, Field, Result};
pub use radix::{MAX_TIMESTAMP, from_base36, to_base36};
pub use share_code::{ShareCode, UUID_SEGMENT_WIDTH};
pub use share_id::{ShareId, Timestamp};
pub use slug::{MAX_SLUG_LEN, slugify};

use uuid::Uuid;

/// 编解码器，字节编码方式可替换
#[derive(Debug, Clone, Default)]
pub struct ShareCodec<E = Base64Url> {
    encoding: E,
}

impl ShareCodec<Base64Url> {
    pub const fn new() -> Self {
        Self {
            encoding: Base64Url,
        }
    }
}

impl<E: ByteEncoding> ShareCodec<E> {
    pub fn with_encoding(encoding: E) -> Self {
        Self { encoding }
    }

    /// ShareId -> ShareCode，失败返回 `None`
    pub fn encode(&self, share_id: &str) -> Option<String> {
        self.try_encode(share_id).ok()
    }

    /// ShareCode -> ShareId，失败返回 `None`
    pub fn decode(&self, code: &str) -> Option<String> {
        self.try_decode(code).ok()
    }

    pub fn try_encode(&self, share_id: &str) -> Result<String> {
        let id = ShareId::parse(share_id)?;
        Ok(self.encode_id(&id))
    }

    pub fn try_decode(&self, code: &str) -> Result<String> {
        self.decode_id(code).map(|id| id.to_string())
    }

    pub fn encode_id(&self, id: &ShareId) -> String {
        format!(
            "{}-{}-{}-{}",
            id.entity().prefix(),
            self.encoding.encode(id.primary().as_bytes()),
            to_base36(id.timestamp().value()),
            self.encoding.encode(id.secondary().as_bytes())
        )
    }

    pub fn decode_id(&self, code: &str) -> Result<ShareId> {
        let parsed = ShareCode::parse(code)?;

        let primary = self.decode_uuid(parsed.primary, Field::PrimaryUuid)?;
        let timestamp = from_base36(parsed.timestamp)?;
        let secondary = self.decode_uuid(parsed.secondary, Field::SecondaryUuid)?;

        Ok(ShareId::new(
            parsed.entity,
            primary,
            Timestamp::from_value(timestamp),
            secondary,
        ))
    }

    /// 不足 16 字节时左侧补零
    fn decode_uuid(&self, segment: &str, field: Field) -> Result<Uuid> {
        let bytes = self
            .encoding
            .decode(segment)
            .ok_or(CodecError::InvalidBase64 { field })?;

        if bytes.len() > 16 {
            return Err(CodecError::PayloadTooLong {
                field,
                len: bytes.len(),
            });
        }

        let mut raw = [0u8; 16];
        raw[16 - bytes.len()..].copy_from_slice(&bytes);
        Ok(Uuid::from_bytes(raw))
    }
}

static DEFAULT_CODEC: ShareCodec = ShareCodec::new();

/// 使用默认 base64url 编码的 [`ShareCodec::encode`]
pub fn encode(share_id: &str) -> Option<String> {
    DEFAULT_CODEC.encode(share_id)
}

/// 使用默认 base64url 编码的 [`ShareCodec::decode`]
pub fn decode(code: &str) -> Option<String> {
    DEFAULT_CODEC.decode(code)
}

pub fn try_encode(share_id: &str) -> Result<String> {
    DEFAULT_CODEC.try_encode(share_id)
}

pub fn try_decode(code: &str) -> Result<String> {
    DEFAULT_CODEC.try_decode(code)
}

pub fn default_codec() -> &'static ShareCodec {
    &DEFAULT_CODEC
}
