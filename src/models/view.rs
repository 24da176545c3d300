//! 页面视图模型
//!
//! 对应前端的三个页面：自选、股票池、龙虎榜。

use serde::{Deserialize, Serialize};

use super::stock::{FilterParams, PoolType, PromotionStat, StockGrade};

/// 页面通用查询参数
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewQuery {
    /// 交易日期，缺省为最近交易日
    pub trade_date: Option<String>,
    /// 股票池类型，仅股票池页面使用，缺省为涨停池
    pub pool_type: Option<PoolType>,
    pub not_show_st: Option<u8>,
    /// 涨停原因，逗号分隔
    pub reason_list: Option<String>,
    pub stock_name: Option<String>,
    pub stock_reason: Option<String>,
}

impl ViewQuery {
    pub fn filter_params(&self) -> FilterParams {
        FilterParams::from_parts(
            self.reason_list.as_deref(),
            self.stock_name.as_deref(),
            self.stock_reason.as_deref(),
        )
    }
}

/// 股票列表页面（自选 / 股票池）
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockListView {
    pub trade_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pool_type: Option<PoolType>,
    /// 已标记 isMatch 的分组
    pub grades: Vec<StockGrade>,
    /// 可选的涨停原因
    pub reasons: Vec<String>,
    /// 命中数
    pub matched: usize,
    pub total: usize,
    /// 晋级梯队
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ladder: Vec<PromotionStat>,
}

/// 龙虎榜页面的日期上下文
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragonTigerView {
    pub trade_date: String,
    pub is_trade_day: bool,
    /// 节假日名称，非节假日为空串
    pub holiday_name: String,
    /// 日期选择器禁用的日期
    pub disabled_dates: Vec<String>,
}
