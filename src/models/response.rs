//! 通用响应模型
//!
//! - [`Envelope`]：BaseInfo 后端返回的 `{ code, message, data }` 信封
//! - [`ApiResponse`]：本服务对外返回的统一格式

use serde::{Deserialize, Serialize};
use chrono::Utc;
use chrono_tz::Asia::Shanghai;

/// 成功业务码
pub const SUCCESS_CODE: i32 = 200;

/// 获取北京时间（UTC+8）
fn get_beijing_time() -> chrono::DateTime<chrono_tz::Tz> {
    Utc::now().with_timezone(&Shanghai)
}

/// 后端响应信封
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    /// 业务码，200 表示成功
    pub code: i32,
    /// 提示信息
    pub message: Option<String>,
    /// 业务数据，可能缺省或为 null
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }
}

/// 统一 API 响应结构
///
/// 所有接口返回统一格式，包含：
/// - code: 业务码（成功为 200）
/// - success: 请求是否成功
/// - data: 响应数据（成功时有值）
/// - message: 响应消息
/// - timestamp: 响应时间戳（北京时间）
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub success: bool,
    pub data: Option<T>,
    pub message: String,
    pub timestamp: String,
}

impl<T> ApiResponse<T> {
    /// 创建成功响应
    pub fn success(data: T) -> Self {
        Self {
            code: SUCCESS_CODE,
            success: true,
            data: Some(data),
            message: "成功".to_string(),
            timestamp: get_beijing_time().to_rfc3339(),
        }
    }

    /// 创建错误响应
    ///
    /// # 参数
    /// - code: 业务码（一般取 HTTP 状态码）
    /// - message: 错误信息
    pub fn error(code: i32, message: String) -> Self {
        Self {
            code,
            success: false,
            data: None,
            message,
            timestamp: get_beijing_time().to_rfc3339(),
        }
    }
}
