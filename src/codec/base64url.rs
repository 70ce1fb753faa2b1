//! 字节 <-> 文本 编码接口
//!
//! 编解码逻辑只依赖 [`ByteEncoding`]，底层 base64 实现可以按目标平台替换。

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

pub trait ByteEncoding: Send + Sync {
    fn encode(&self, bytes: &[u8]) -> String;

    /// 非法输入返回 `None`
    fn decode(&self, text: &str) -> Option<Vec<u8>>;
}

/// RFC 4648 base64url，无填充
#[derive(Debug, Clone, Copy, Default)]
pub struct Base64Url;

impl ByteEncoding for Base64Url {
    #[inline]
    fn encode(&self, bytes: &[u8]) -> String {
        URL_SAFE_NO_PAD.encode(bytes)
    }

    #[inline]
    fn decode(&self, text: &str) -> Option<Vec<u8>> {
        URL_SAFE_NO_PAD.decode(text).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uuid_bytes_encode_to_22_chars() {
        let encoded = Base64Url.encode(&[0u8; 16]);
        assert_eq!(encoded, "AAAAAAAAAAAAAAAAAAAAAA");
        assert_eq!(Base64Url.encode(&[0xffu8; 16]), "_____________________w");
    }

    #[test]
    fn test_rejects_padding_and_foreign_chars() {
        assert!(Base64Url.decode("AAAAAAAAAAAAAAAAAAAAAA==").is_none());
        assert!(Base64Url.decode("!!!").is_none());
        assert!(Base64Url.decode("AA+/").is_none());
    }

    #[test]
    fn test_url_safe_alphabet() {
        let bytes = [0xfb, 0xef, 0xff];
        assert_eq!(Base64Url.encode(&bytes), "--__");
        assert_eq!(Base64Url.decode("--__"), Some(bytes.to_vec()));
    }
}
