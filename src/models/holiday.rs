//! 节假日数据模型

use serde::{Deserialize, Serialize};

/// 法定节假日记录
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayRecord {
    /// 节假日日期（YYYY-MM-DD）
    pub holiday_date: String,
    /// 节假日名称
    #[serde(default)]
    pub holiday_name: String,
    /// 是否为法定节假日 0-否 1-是
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_holiday: Option<i32>,
    /// 是否为调休补班日 0-否 1-是
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_makeup_work: Option<i32>,
}

impl HolidayRecord {
    pub fn is_statutory_holiday(&self) -> bool {
        self.is_holiday == Some(1)
    }

    pub fn is_makeup_workday(&self) -> bool {
        self.is_makeup_work == Some(1)
    }
}

/// 节假日查询参数
#[derive(Debug, Deserialize)]
pub struct HolidayQuery {
    /// 年份，缺省为北京时间当前年
    pub year: Option<i32>,
}
