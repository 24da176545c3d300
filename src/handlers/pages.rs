//! 页面路由
//!
//! - GET / - 重定向到 /optional
//! - GET /optional - 自选（连板晋级梯度）
//! - GET /stockPool - 盘面-股票池
//! - GET /dragonTiger - 盘面-龙虎榜
//!
//! 页面返回 JSON 视图模型，公共查询参数见 [`ViewQuery`]。

use actix_web::{http::header, web, HttpResponse};
use chrono::Datelike;

use super::{failure, resolve_trade_date, AppState};
use crate::error::ApiError;
use crate::models::{
    ApiResponse, DragonTigerView, LbjjQuery, StockGrade, StockListView, ViewQuery,
};
use crate::services::stock_pool;
use crate::utils::{date, filter, stats};

/// 默认页面
pub const DEFAULT_PAGE: &str = "/optional";

pub async fn index() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, DEFAULT_PAGE))
        .finish()
}

/// 标记筛选结果并汇总
fn build_list_view(trade_date: String, grades: &[StockGrade], query: &ViewQuery) -> StockListView {
    let marked = filter::filter_stocks(grades, &query.filter_params());
    let (matched, total) = filter::match_counts(&marked);

    StockListView {
        trade_date,
        pool_type: None,
        reasons: filter::extract_all_reasons(grades),
        grades: marked,
        matched,
        total,
        ladder: Vec::new(),
    }
}

async fn optional_view(state: &AppState, query: &ViewQuery) -> Result<StockListView, ApiError> {
    let trade_date = resolve_trade_date(state, query.trade_date.as_deref()).await?;
    let lbjj = LbjjQuery {
        trade_date: trade_date.clone(),
        not_show_st: query.not_show_st,
    };
    let grades = stock_pool::get_lbjj_data(&state.client, &lbjj).await?;
    Ok(build_list_view(trade_date, &grades, query))
}

async fn stock_pool_view(state: &AppState, query: &ViewQuery) -> Result<StockListView, ApiError> {
    let trade_date = resolve_trade_date(state, query.trade_date.as_deref()).await?;
    let pool_type = query.pool_type.unwrap_or_default();
    let grades = stock_pool::fetch_stock_pool(&state.client, &trade_date, pool_type, query.not_show_st).await?;

    let mut stocks: Vec<_> = grades.iter().flat_map(|g| g.children.iter().cloned()).collect();
    stats::sort_stocks_by_change_percent(&mut stocks);
    let groups = stats::group_stocks_by_limit_up_days(&stocks);

    let mut view = build_list_view(trade_date, &grades, query);
    view.pool_type = Some(pool_type);
    view.ladder = stats::promotion_ladder(&groups);
    Ok(view)
}

async fn dragon_tiger_view(state: &AppState, query: &ViewQuery) -> Result<DragonTigerView, ApiError> {
    let trade_date = resolve_trade_date(state, query.trade_date.as_deref()).await?;
    let target = date::parse_date(&trade_date)?;
    let holidays = state.holidays.fetch_holidays(target.year()).await?;
    let disabled_dates = state.holidays.disabled_dates(date::beijing_today()).await?;

    Ok(DragonTigerView {
        is_trade_day: date::is_trade_day(target, &holidays),
        holiday_name: date::holiday_name(&trade_date, &holidays).to_string(),
        trade_date,
        disabled_dates,
    })
}

/// 自选
pub async fn optional(state: web::Data<AppState>, query: web::Query<ViewQuery>) -> HttpResponse {
    match optional_view(&state, &query).await {
        Ok(view) => HttpResponse::Ok().json(ApiResponse::success(view)),
        Err(e) => failure(e),
    }
}

/// 盘面-股票池
pub async fn stock_pool_page(state: web::Data<AppState>, query: web::Query<ViewQuery>) -> HttpResponse {
    match stock_pool_view(&state, &query).await {
        Ok(view) => HttpResponse::Ok().json(ApiResponse::success(view)),
        Err(e) => failure(e),
    }
}

/// 盘面-龙虎榜
pub async fn dragon_tiger(state: web::Data<AppState>, query: web::Query<ViewQuery>) -> HttpResponse {
    match dragon_tiger_view(&state, &query).await {
        Ok(view) => HttpResponse::Ok().json(ApiResponse::success(view)),
        Err(e) => failure(e),
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/optional", web::get().to(optional))
        .route("/stockPool", web::get().to(stock_pool_page))
        .route("/dragonTiger", web::get().to(dragon_tiger));
}
