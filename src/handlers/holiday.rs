//! 节假日接口处理器

use actix_web::{web, HttpResponse};
use chrono::Datelike;

use super::{failure, AppState};
use crate::models::{ApiResponse, HolidayQuery};
use crate::utils::date;

/// GET /holiday/query?year=2026
pub async fn query_holidays(state: web::Data<AppState>, query: web::Query<HolidayQuery>) -> HttpResponse {
    let year = query.year.unwrap_or_else(|| date::beijing_today().year());
    if !(1970..=2100).contains(&year) {
        return failure(crate::error::ApiError::InvalidParam(
            "年份参数无效，请输入1970-2100之间的年份".to_string(),
        ));
    }

    match state.holidays.fetch_holidays(year).await {
        Ok(holidays) => HttpResponse::Ok().json(ApiResponse::success(holidays)),
        Err(e) => failure(e),
    }
}

/// GET /holiday/disabledDates
pub async fn disabled_dates(state: web::Data<AppState>) -> HttpResponse {
    match state.holidays.disabled_dates(date::beijing_today()).await {
        Ok(dates) => HttpResponse::Ok().json(ApiResponse::success(dates)),
        Err(e) => failure(e),
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/holiday")
            .route("/query", web::get().to(query_holidays))
            .route("/disabledDates", web::get().to(disabled_dates)),
    );
}

#[cfg(test)]
mod tests {
    use crate::handlers::tests::state_for;
    use crate::services::holiday::HOLIDAY_QUERY_PATH;
    use crate::utils::date::FUTURE_WINDOW_DAYS;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[actix_web::test]
    async fn test_query_holidays_hits_cache() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(HOLIDAY_QUERY_PATH))
            .and(query_param("year", "2026"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "code": 200,
                "data": [{ "holidayDate": "2026-02-17", "holidayName": "春节", "isHoliday": 1 }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let app = test::init_service(App::new().app_data(state_for(&server)).configure(crate::handlers::config)).await;
        for _ in 0..2 {
            let req = test::TestRequest::get().uri("/api/v1/holiday/query?year=2026").to_request();
            let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
            assert_eq!(body["data"][0]["holidayName"], "春节");
        }
    }

    #[actix_web::test]
    async fn test_query_holidays_rejects_year() {
        let server = MockServer::start().await;
        let app = test::init_service(App::new().app_data(state_for(&server)).configure(crate::handlers::config)).await;
        let req = test::TestRequest::get().uri("/api/v1/holiday/query?year=1800").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_disabled_dates() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(HOLIDAY_QUERY_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "code": 200,
                "data": [{ "holidayDate": "2000-01-01", "holidayName": "元旦" }]
            })))
            .mount(&server)
            .await;

        let app = test::init_service(App::new().app_data(state_for(&server)).configure(crate::handlers::config)).await;
        let req = test::TestRequest::get().uri("/api/v1/holiday/disabledDates").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        let dates = body["data"].as_array().unwrap();
        assert_eq!(dates.len(), 1 + FUTURE_WINDOW_DAYS as usize);
        assert_eq!(dates[0], "2000-01-01");
    }
}
