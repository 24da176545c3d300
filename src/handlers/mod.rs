pub mod clipboard;
pub mod health;
pub mod holiday;
pub mod pages;
pub mod stock_pool;

use actix_web::{error, http::StatusCode, web, HttpResponse};

use crate::error::ApiError;
use crate::models::ApiResponse;
use crate::services::{BaseInfoClient, HolidayService};
use crate::utils::date;

/// 各处理器共享的状态
pub struct AppState {
    pub client: BaseInfoClient,
    pub holidays: HolidayService,
}

/// 参数错误 400，后端超时 504，其余后端失败 502
fn status_for(e: &ApiError) -> StatusCode {
    match e {
        ApiError::InvalidParam(_) => StatusCode::BAD_REQUEST,
        ApiError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
        _ => StatusCode::BAD_GATEWAY,
    }
}

/// 把错误转换为统一响应，是后端失败提示用户的唯一出口
pub(crate) fn failure(e: ApiError) -> HttpResponse {
    log::error!("请求处理失败: {}", e);
    let status = status_for(&e);
    HttpResponse::build(status).json(ApiResponse::<()>::error(status.as_u16() as i32, e.user_message()))
}

/// 解析交易日期：传入则规范化，缺省取北京时间今天对应的最近交易日
pub(crate) async fn resolve_trade_date(state: &AppState, trade_date: Option<&str>) -> Result<String, ApiError> {
    match trade_date.map(str::trim).filter(|d| !d.is_empty()) {
        Some(input) => date::format_date(input),
        None => {
            let today = date::beijing_today();
            let trade_date = state.holidays.trade_date(today).await?;
            Ok(date::format_naive(trade_date))
        }
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    let query_config = web::QueryConfig::default().error_handler(|err, _req| {
        let message = format!("参数错误: {}", err);
        let response = HttpResponse::BadRequest().json(ApiResponse::<()>::error(400, message));
        error::InternalError::from_response(err, response).into()
    });

    cfg.app_data(query_config)
        .configure(pages::config)
        .service(
            web::scope("/api/v1")
                .configure(health::config)
                .configure(stock_pool::config)
                .configure(holiday::config)
                .configure(clipboard::config),
        );
}
