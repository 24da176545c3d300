//! 业务逻辑服务模块
//!
//! 封装对 BaseInfo 后端的请求

pub mod base_info;  // HTTP 客户端封装
pub mod holiday;    // 节假日接口与缓存
pub mod stock_pool; // 股票池接口

pub use base_info::BaseInfoClient;
pub use holiday::{HolidayCache, HolidayService};
