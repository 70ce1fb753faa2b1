//! API 类型定义

use serde::{Deserialize, Serialize};

use crate::codec::EntityType;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            code: ErrorCode::Success as i32,
            data,
        }
    }
}

/// API 业务错误码
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Success = 0,
    BadRequest = 1000,
    InvalidShareId = 1001,
    InvalidShareCode = 1002,
    NotFound = 1004,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ErrorData {
    pub message: String,
    /// 编解码器给出的具体原因代码，如 C004
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub reason: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PostNewLink {
    pub share_id: String,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DecodedCode {
    pub share_id: String,
    pub entity: EntityType,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SlugQuery {
    #[serde(default)]
    pub title: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SlugData {
    pub slug: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub started_at: String,
    pub uptime_seconds: u64,
}
