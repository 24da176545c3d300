//! 股票池接口
//!
//! 涨停/跌停/强势股/炸板等股票池查询，以及连板晋级梯度（lbjj）。
//! 均不缓存，每次调用都会请求后端。

use crate::error::ApiError;
use crate::models::{LbjjQuery, PoolType, StockGrade, StockPoolQuery};

use super::base_info::{ApiRequest, BaseInfoClient};

/// 股票池通用查询接口
pub const STOCK_POOL_QUERY_PATH: &str = "/baseInfo/baseInfo/stockPool/query";
/// 连板晋级接口
pub const STOCK_POOL_LBJJ_PATH: &str = "/baseInfo/baseInfo/stockPool/lbjj";

/// 查询股票池数据（参数原样透传）
pub async fn get_stock_pool_data(
    client: &BaseInfoClient,
    query: &StockPoolQuery,
) -> Result<Vec<StockGrade>, ApiError> {
    let req = ApiRequest::get(STOCK_POOL_QUERY_PATH)
        .param("tradeDate", &query.trade_date)
        .param("poolType", query.pool_type)
        .param_opt("notShowSt", query.not_show_st);

    client.fetch_list(req).await
}

/// 查询连板晋级梯度
pub async fn get_lbjj_data(client: &BaseInfoClient, query: &LbjjQuery) -> Result<Vec<StockGrade>, ApiError> {
    let req = ApiRequest::get(STOCK_POOL_LBJJ_PATH)
        .param("tradeDate", &query.trade_date)
        .param_opt("notShowSt", query.not_show_st);

    client.fetch_list(req).await
}

/// 按日期和类型拉取股票池，`not_show_st` 缺省为 0（显示 ST）
pub async fn fetch_stock_pool(
    client: &BaseInfoClient,
    trade_date: &str,
    pool_type: PoolType,
    not_show_st: Option<u8>,
) -> Result<Vec<StockGrade>, ApiError> {
    let query = StockPoolQuery {
        trade_date: trade_date.to_string(),
        pool_type,
        not_show_st: Some(not_show_st.unwrap_or(0)),
    };
    let grades = get_stock_pool_data(client, &query).await?;
    log::info!(
        "拉取 {} 股票池 {} 完成，共 {} 个分组",
        pool_type,
        trade_date,
        grades.len()
    );
    Ok(grades)
}
