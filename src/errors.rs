use std::fmt;

use crate::codec::CodecError;
use crate::links::RouteError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SharelinkError {
    Config(String),
    Codec(String),
    FileOperation(String),
    Serialization(String),
}

impl SharelinkError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            SharelinkError::Config(_) => "E001",
            SharelinkError::Codec(_) => "E002",
            SharelinkError::FileOperation(_) => "E003",
            SharelinkError::Serialization(_) => "E004",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            SharelinkError::Config(_) => "Configuration Error",
            SharelinkError::Codec(_) => "Share Code Error",
            SharelinkError::FileOperation(_) => "File Operation Error",
            SharelinkError::Serialization(_) => "Serialization Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            SharelinkError::Config(msg)
            | SharelinkError::Codec(msg)
            | SharelinkError::FileOperation(msg)
            | SharelinkError::Serialization(msg) => msg,
        }
    }

    /// 格式化为彩色输出（用于 Server 模式）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出（用于 CLI 模式）
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for SharelinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for SharelinkError {}

// 便捷的构造函数
impl SharelinkError {
    pub fn config<T: Into<String>>(msg: T) -> Self {
        SharelinkError::Config(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        SharelinkError::Serialization(msg.into())
    }
}

impl From<CodecError> for SharelinkError {
    fn from(err: CodecError) -> Self {
        SharelinkError::Codec(format!("[{}] {}", err.code(), err))
    }
}

impl From<RouteError> for SharelinkError {
    fn from(err: RouteError) -> Self {
        SharelinkError::Config(err.to_string())
    }
}

impl From<std::io::Error> for SharelinkError {
    fn from(err: std::io::Error) -> Self {
        SharelinkError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for SharelinkError {
    fn from(err: serde_json::Error) -> Self {
        SharelinkError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SharelinkError>;
