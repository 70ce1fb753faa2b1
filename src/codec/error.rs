//! 编解码失败原因
//!
//! 对外的 `encode` / `decode` 只返回 `Option`，这里保留具体原因，
//! 便于测试和 API 层区分失败类型。

use std::fmt;

/// ShareId / ShareCode 字段名
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    PrimaryUuid,
    Date,
    Time,
    SecondaryUuid,
    Timestamp,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::PrimaryUuid => "primary uuid",
            Field::Date => "date",
            Field::Time => "time",
            Field::SecondaryUuid => "secondary uuid",
            Field::Timestamp => "timestamp",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// ShareId 中 `_` 分隔的字段不足 5 个
    MissingFields { found: usize },
    UnknownEntity(String),
    /// 日期/时间字段不是定宽数字
    InvalidDigits { field: Field, value: String },
    InvalidUuid { field: Field, value: String },
    EmptyCode,
    /// ShareCode 段数不对，且无法按定宽恢复
    SegmentCount { found: usize },
    EmptySegment { field: Field },
    UnknownPrefix(String),
    InvalidBase64 { field: Field },
    /// base64 解码后超过 16 字节
    PayloadTooLong { field: Field, len: usize },
    InvalidBase36(String),
    /// 时间戳超过 14 位十进制
    TimestampOverflow(String),
}

impl CodecError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            CodecError::MissingFields { .. } => "C001",
            CodecError::UnknownEntity(_) => "C002",
            CodecError::InvalidDigits { .. } => "C003",
            CodecError::InvalidUuid { .. } => "C004",
            CodecError::EmptyCode => "C005",
            CodecError::SegmentCount { .. } => "C006",
            CodecError::EmptySegment { .. } => "C007",
            CodecError::UnknownPrefix(_) => "C008",
            CodecError::InvalidBase64 { .. } => "C009",
            CodecError::PayloadTooLong { .. } => "C010",
            CodecError::InvalidBase36(_) => "C011",
            CodecError::TimestampOverflow(_) => "C012",
        }
    }

    /// 是否为编码方向（ShareId 解析）的错误
    pub fn is_share_id_error(&self) -> bool {
        matches!(
            self,
            CodecError::MissingFields { .. }
                | CodecError::UnknownEntity(_)
                | CodecError::InvalidDigits { .. }
                | CodecError::InvalidUuid { .. }
        )
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFields { found } => {
                write!(f, "share id needs 5 '_'-separated fields, found {}", found)
            }
            Self::UnknownEntity(tag) => write!(f, "unknown entity type: '{}'", tag),
            Self::InvalidDigits { field, value } => {
                write!(f, "invalid {} field: '{}'", field, value)
            }
            Self::InvalidUuid { field, value } => {
                write!(f, "invalid {}: '{}'", field, value)
            }
            Self::EmptyCode => write!(f, "share code is empty"),
            Self::SegmentCount { found } => {
                write!(f, "share code needs 4 '-'-separated segments, found {}", found)
            }
            Self::EmptySegment { field } => write!(f, "empty {} segment", field),
            Self::UnknownPrefix(prefix) => write!(f, "unknown share code prefix: '{}'", prefix),
            Self::InvalidBase64 { field } => write!(f, "{} segment is not valid base64url", field),
            Self::PayloadTooLong { field, len } => {
                write!(f, "{} segment decodes to {} bytes, expected at most 16", field, len)
            }
            Self::InvalidBase36(value) => write!(f, "timestamp segment is not base36: '{}'", value),
            Self::TimestampOverflow(value) => {
                write!(f, "timestamp does not fit in 14 digits: '{}'", value)
            }
        }
    }
}

impl std::error::Error for CodecError {}

pub type Result<T> = std::result::Result<T, CodecError>;
