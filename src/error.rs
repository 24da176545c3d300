//! 数据访问层错误类型
//!
//! 后端请求的所有失败都以 [`ApiError`] 返回给调用方，
//! 由展示层（handlers）决定如何提示用户。

use thiserror::Error;

/// 后端请求及参数校验错误
#[derive(Debug, Error)]
pub enum ApiError {
    /// 网络/连接错误
    #[error("网络异常: {0}")]
    Network(String),

    /// 请求超时
    #[error("请求超时: {0}")]
    Timeout(String),

    /// 非 2xx 的 HTTP 状态码
    #[error("HTTP 状态异常: {0}")]
    HttpStatus(u16),

    /// 响应信封中的业务码不是成功码
    #[error("业务异常 {code}: {message}")]
    Business { code: i32, message: String },

    /// 响应体解析失败
    #[error("响应解析失败: {0}")]
    Decode(String),

    /// 调用方传入的参数无效
    #[error("参数错误: {0}")]
    InvalidParam(String),
}

impl ApiError {
    /// 面向用户的提示语
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Business { message, .. } => message.clone(),
            ApiError::InvalidParam(msg) => msg.clone(),
            ApiError::Timeout(_) => "请求超时".to_string(),
            ApiError::HttpStatus(status) => format!("请求失败（HTTP {}）", status),
            ApiError::Network(_) | ApiError::Decode(_) => "网络异常".to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ApiError::Timeout(e.to_string())
        } else if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            ApiError::HttpStatus(status.as_u16())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}
