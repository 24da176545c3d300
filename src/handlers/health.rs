use actix_web::{web, HttpResponse};
use serde_json::json;

use super::AppState;
use crate::models::ApiResponse;

/// 健康检查，附带后端地址便于排查
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let info = json!({
        "status": "UP",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "baseInfo": state.client.base_url().as_str(),
        "cachedHolidayYears": state.holidays.cached_years().await,
    });
    HttpResponse::Ok().json(ApiResponse::success(info))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
}
