//! 股票池接口处理器
//!
//! - GET /stockPool/query?tradeDate=&poolType=&notShowSt= - 按类型查询股票池
//! - GET /stockPool/lbjj?tradeDate=&notShowSt= - 连板晋级梯度

use actix_web::{web, HttpResponse};

use super::{failure, AppState};
use crate::models::{ApiResponse, LbjjQuery, StockPoolQuery};
use crate::services::stock_pool;
use crate::utils::date;

/// 查询股票池
pub async fn query_stock_pool(state: web::Data<AppState>, query: web::Query<StockPoolQuery>) -> HttpResponse {
    let mut query = query.into_inner();
    query.trade_date = match date::format_date(&query.trade_date) {
        Ok(d) => d,
        Err(e) => return failure(e),
    };

    match stock_pool::get_stock_pool_data(&state.client, &query).await {
        Ok(grades) => HttpResponse::Ok().json(ApiResponse::success(grades)),
        Err(e) => failure(e),
    }
}

/// 连板晋级梯度
pub async fn query_lbjj(state: web::Data<AppState>, query: web::Query<LbjjQuery>) -> HttpResponse {
    let mut query = query.into_inner();
    query.trade_date = match date::format_date(&query.trade_date) {
        Ok(d) => d,
        Err(e) => return failure(e),
    };

    match stock_pool::get_lbjj_data(&state.client, &query).await {
        Ok(grades) => HttpResponse::Ok().json(ApiResponse::success(grades)),
        Err(e) => failure(e),
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/stockPool")
            .route("/query", web::get().to(query_stock_pool))
            .route("/lbjj", web::get().to(query_lbjj)),
    );
}

#[cfg(test)]
mod tests {
    use crate::handlers::tests::state_for;
    use crate::services::stock_pool::{STOCK_POOL_LBJJ_PATH, STOCK_POOL_QUERY_PATH};
    use actix_web::{http::StatusCode, test, App};
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[actix_web::test]
    async fn test_query_normalizes_trade_date() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(STOCK_POOL_QUERY_PATH))
            .and(query_param("tradeDate", "2025-03-03"))
            .and(query_param("poolType", "dt"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "code": 200,
                "data": [{ "title": "1 连板", "limitDays": 1, "children": [{ "stockName": "跌停股", "changePercent": -10.0 }] }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let app = test::init_service(App::new().app_data(state_for(&server)).configure(crate::handlers::config)).await;
        let req = test::TestRequest::get()
            .uri("/api/v1/stockPool/query?tradeDate=20250303&poolType=dt")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["success"], true);
        assert_eq!(body["data"][0]["children"][0]["stockName"], "跌停股");
    }

    #[actix_web::test]
    async fn test_query_rejects_unknown_pool_type() {
        let server = MockServer::start().await;
        let app = test::init_service(App::new().app_data(state_for(&server)).configure(crate::handlers::config)).await;

        let req = test::TestRequest::get()
            .uri("/api/v1/stockPool/query?tradeDate=2025-03-03&poolType=unknown")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
    }

    #[actix_web::test]
    async fn test_lbjj_business_error_is_bad_gateway() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(STOCK_POOL_LBJJ_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "code": 500, "message": "获取连板晋级梯度股票池失败"
            })))
            .mount(&server)
            .await;

        let app = test::init_service(App::new().app_data(state_for(&server)).configure(crate::handlers::config)).await;
        let req = test::TestRequest::get()
            .uri("/api/v1/stockPool/lbjj?tradeDate=2025-03-03")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "获取连板晋级梯度股票池失败");
        assert_eq!(body["code"], 502);
    }

    #[actix_web::test]
    async fn test_lbjj_invalid_date() {
        let server = MockServer::start().await;
        let app = test::init_service(App::new().app_data(state_for(&server)).configure(crate::handlers::config)).await;
        let req = test::TestRequest::get()
            .uri("/api/v1/stockPool/lbjj?tradeDate=2025-02-30")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
