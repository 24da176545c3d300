//! 股票池数据模型
//!
//! 字段命名与 BaseInfo 后端保持一致（camelCase），
//! 后端可能返回 null 的字段统一解析为空值。

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// 把 `null` 解析为类型默认值
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// 单只股票记录
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockRecord {
    /// 股票代码（如 603986.SS）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock_code: Option<String>,
    /// 股票名称
    #[serde(default, deserialize_with = "null_as_default")]
    pub stock_name: String,
    /// 涨停原因详情
    #[serde(default, deserialize_with = "null_as_default")]
    pub stock_reason: String,
    /// 涨停原因标签
    #[serde(default, deserialize_with = "null_as_default")]
    pub reason_list: Vec<String>,
    /// 涨跌幅（%）
    #[serde(default, deserialize_with = "null_as_default")]
    pub change_percent: f64,
    /// 连板天数，后端字段名为 limitDays
    #[serde(default, alias = "limitDays", skip_serializing_if = "Option::is_none")]
    pub limit_up_days: Option<u32>,
    /// 最新价（元）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// 是否命中筛选条件，仅由筛选设置
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_match: Option<bool>,
}

/// 股票分组（某个连板梯度或分类）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockGrade {
    /// 标题，如 "2 连板"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit_days: Option<u32>,
    /// 晋级几率
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chance: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub children: Vec<StockRecord>,
    /// 其余元数据原样保留
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// 股票池类型
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoolType {
    /// 涨停池
    #[default]
    Zt,
    /// 跌停池
    Dt,
    /// 昨日涨停
    YesterdayZt,
    /// 炸板池
    BrokenZt,
    /// 强势股池
    SuperStock,
}

impl PoolType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PoolType::Zt => "zt",
            PoolType::Dt => "dt",
            PoolType::YesterdayZt => "yesterday_zt",
            PoolType::BrokenZt => "broken_zt",
            PoolType::SuperStock => "super_stock",
        }
    }
}

impl fmt::Display for PoolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PoolType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "zt" => Ok(PoolType::Zt),
            "dt" => Ok(PoolType::Dt),
            "yesterday_zt" => Ok(PoolType::YesterdayZt),
            "broken_zt" => Ok(PoolType::BrokenZt),
            "super_stock" => Ok(PoolType::SuperStock),
            other => Err(format!("未知的股票池类型: {}", other)),
        }
    }
}

/// 股票池查询参数
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockPoolQuery {
    /// 交易日期（YYYY-MM-DD）
    pub trade_date: String,
    pub pool_type: PoolType,
    /// 是否隐藏 ST（0=显示，1=不显示）
    pub not_show_st: Option<u8>,
}

/// 连板晋级查询参数
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LbjjQuery {
    pub trade_date: String,
    pub not_show_st: Option<u8>,
}

/// 筛选条件，空值表示不限制
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterParams {
    /// 涨停原因（多选，命中一个即可）
    pub reason_list: Vec<String>,
    /// 股票名称模糊匹配
    pub stock_name: String,
    /// 原因详情模糊匹配
    pub stock_reason: String,
}

impl FilterParams {
    /// 从逗号分隔的原因字符串构造
    pub fn from_parts(reasons: Option<&str>, stock_name: Option<&str>, stock_reason: Option<&str>) -> Self {
        let reason_list = reasons
            .map(|r| {
                r.split(',')
                    .map(|s| s.trim())
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            reason_list,
            stock_name: stock_name.unwrap_or_default().trim().to_string(),
            stock_reason: stock_reason.unwrap_or_default().trim().to_string(),
        }
    }
}

/// 连板晋级统计行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromotionStat {
    /// 连板天数
    pub day: u32,
    /// 该梯度股票数
    pub count: usize,
    /// 由前一梯度晋级的比率，如 "1/3=33.33%"
    pub rate: String,
}
