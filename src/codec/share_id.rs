//! ShareId：`<entityType>_<uuid1>_<YYYYMMDD>_<HHMMSS>_<uuid2>`

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use uuid::Uuid;

use super::entity::EntityType;
use super::error::{CodecError, Field, Result};

const DATE_WIDTH: usize = 8;
const TIME_WIDTH: usize = 6;
const UUID_WIDTH: usize = 36;
const HYPHEN_POSITIONS: [usize; 4] = [8, 13, 18, 23];

/// 14 位十进制时间戳（YYYYMMDDHHMMSS）
///
/// 只校验形状，不校验日历合法性。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Timestamp(u64);

impl Timestamp {
    pub fn from_value(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// 零填充到 14 位
    pub fn digits(&self) -> String {
        format!("{:014}", self.0)
    }

    pub fn date(&self) -> String {
        self.digits()[..DATE_WIDTH].to_string()
    }

    pub fn time(&self) -> String {
        self.digits()[DATE_WIDTH..].to_string()
    }

    /// 解释为日历时间，不合法的日期返回 `None`
    pub fn to_datetime(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.digits(), "%Y%m%d%H%M%S").ok()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShareId {
    entity: EntityType,
    primary: Uuid,
    timestamp: Timestamp,
    secondary: Uuid,
}

impl ShareId {
    pub fn new(entity: EntityType, primary: Uuid, timestamp: Timestamp, secondary: Uuid) -> Self {
        Self {
            entity,
            primary,
            timestamp,
            secondary,
        }
    }

    /// 解析 ShareId，按字段顺序做形状校验
    pub fn parse(input: &str) -> Result<Self> {
        let parts: Vec<&str> = input.split('_').collect();
        if parts.len() < 5 {
            return Err(CodecError::MissingFields { found: parts.len() });
        }

        let entity = EntityType::from_tag(parts[0])
            .ok_or_else(|| CodecError::UnknownEntity(parts[0].to_string()))?;

        let date = parse_digits(parts[2], DATE_WIDTH, Field::Date)?;
        let time = parse_digits(parts[3], TIME_WIDTH, Field::Time)?;

        let primary = parse_uuid(parts[1], Field::PrimaryUuid)?;
        let secondary = parse_uuid(parts[4], Field::SecondaryUuid)?;

        Ok(Self {
            entity,
            primary,
            timestamp: Timestamp(date * 1_000_000 + time),
            secondary,
        })
    }

    pub fn entity(&self) -> EntityType {
        self.entity
    }

    pub fn primary(&self) -> &Uuid {
        &self.primary
    }

    pub fn secondary(&self) -> &Uuid {
        &self.secondary
    }

    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }
}

fn parse_digits(value: &str, width: usize, field: Field) -> Result<u64> {
    if value.len() != width || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CodecError::InvalidDigits {
            field,
            value: value.to_string(),
        });
    }

    value.parse().map_err(|_| CodecError::InvalidDigits {
        field,
        value: value.to_string(),
    })
}

/// 只接受 8-4-4-4-12 的带连字符形式，大小写不敏感
fn parse_uuid(value: &str, field: Field) -> Result<Uuid> {
    let invalid = || CodecError::InvalidUuid {
        field,
        value: value.to_string(),
    };

    if value.len() != UUID_WIDTH {
        return Err(invalid());
    }

    let shape_ok = value.bytes().enumerate().all(|(i, b)| {
        if HYPHEN_POSITIONS.contains(&i) {
            b == b'-'
        } else {
            b.is_ascii_hexdigit()
        }
    });
    if !shape_ok {
        return Err(invalid());
    }

    Uuid::try_parse(value).map_err(|_| invalid())
}

impl fmt::Display for ShareId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}_{}_{}_{}_{}",
            self.entity.tag(),
            self.primary.hyphenated(),
            self.timestamp.date(),
            self.timestamp.time(),
            self.secondary.hyphenated()
        )
    }
}

impl FromStr for ShareId {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
