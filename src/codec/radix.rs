//! 时间戳的 base36 表示

use super::error::{CodecError, Result};

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// 14 位十进制能表示的最大值
pub const MAX_TIMESTAMP: u64 = 99_999_999_999_999;

pub fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut buf = Vec::with_capacity(13);
    while value > 0 {
        buf.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    buf.reverse();

    // DIGITS 全是 ASCII
    buf.into_iter().map(char::from).collect()
}

/// 严格解析：任何非 base36 字符都视为失败，大小写不敏感
pub fn from_base36(text: &str) -> Result<u64> {
    if text.is_empty() {
        return Err(CodecError::InvalidBase36(text.to_string()));
    }

    let mut value: u64 = 0;
    for c in text.chars() {
        let digit = c
            .to_digit(36)
            .ok_or_else(|| CodecError::InvalidBase36(text.to_string()))?;
        value = value
            .checked_mul(36)
            .and_then(|v| v.checked_add(u64::from(digit)))
            .ok_or_else(|| CodecError::TimestampOverflow(text.to_string()))?;
    }

    if value > MAX_TIMESTAMP {
        return Err(CodecError::TimestampOverflow(text.to_string()));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(20240115093000), "76a6hxwy0");
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(from_base36("76A6HXWY0"), Ok(20240115093000));
        assert_eq!(from_base36("z"), Ok(35));
    }

    #[test]
    fn test_max_timestamp_fits() {
        let encoded = to_base36(MAX_TIMESTAMP);
        assert!(encoded.len() <= 9);
        assert_eq!(from_base36(&encoded), Ok(MAX_TIMESTAMP));
    }

    #[test]
    fn test_rejects_invalid() {
        assert!(matches!(from_base36(""), Err(CodecError::InvalidBase36(_))));
        assert!(matches!(from_base36("###"), Err(CodecError::InvalidBase36(_))));
        assert!(matches!(from_base36("12-3"), Err(CodecError::InvalidBase36(_))));
        assert!(matches!(
            from_base36(&to_base36(MAX_TIMESTAMP + 1)),
            Err(CodecError::TimestampOverflow(_))
        ));
        assert!(matches!(
            from_base36("zzzzzzzzzzzzzzzzzzzz"),
            Err(CodecError::TimestampOverflow(_))
        ));
    }
}
