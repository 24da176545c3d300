//! 节假日接口与按年缓存
//!
//! [`HolidayCache`] 由调用方创建并注入 [`HolidayService`]，
//! 按年份缓存后端返回的节假日列表，进程内长期有效，不过期。

use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::ApiError;
use crate::models::HolidayRecord;
use crate::utils::date;

use super::base_info::{ApiRequest, BaseInfoClient};

/// 节假日查询接口
pub const HOLIDAY_QUERY_PATH: &str = "/baseInfo/api/holiday/sync/query";

/// 年份 → 节假日列表
#[derive(Debug, Default)]
pub struct HolidayCache {
    entries: RwLock<HashMap<i32, Vec<HolidayRecord>>>,
}

impl HolidayCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, year: i32) -> Option<Vec<HolidayRecord>> {
        self.entries.read().await.get(&year).cloned()
    }

    pub async fn insert(&self, year: i32, holidays: Vec<HolidayRecord>) {
        self.entries.write().await.insert(year, holidays);
    }

    /// 已缓存的年份数
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}

/// 节假日服务
#[derive(Debug, Clone)]
pub struct HolidayService {
    client: BaseInfoClient,
    cache: Arc<HolidayCache>,
}

impl HolidayService {
    pub fn new(client: BaseInfoClient, cache: Arc<HolidayCache>) -> Self {
        Self { client, cache }
    }

    /// 查询节假日（不走缓存）
    ///
    /// 后端返回指定年份及上一年的节假日。
    pub async fn get_holiday_list(&self, year: i32) -> Result<Vec<HolidayRecord>, ApiError> {
        let req = ApiRequest::get(HOLIDAY_QUERY_PATH).param("year", year);
        self.client.fetch_list(req).await
    }

    /// 获取节假日，优先读缓存，未命中时请求后端并写入缓存
    ///
    /// 缓存按请求的年份分别存放，不同年份互不复用。
    pub async fn fetch_holidays(&self, year: i32) -> Result<Vec<HolidayRecord>, ApiError> {
        if let Some(cached) = self.cache.get(year).await {
            log::debug!("命中 {} 年节假日缓存，共 {} 条", year, cached.len());
            return Ok(cached);
        }

        let holidays = self.get_holiday_list(year).await?;
        log::info!("获取 {} 年节假日 {} 条，写入缓存", year, holidays.len());
        self.cache.insert(year, holidays.clone()).await;
        Ok(holidays)
    }

    /// 已缓存的年份数
    pub async fn cached_years(&self) -> usize {
        self.cache.len().await
    }

    /// 日期选择器的禁用日期：当年节假日 + 未来 364 天
    pub async fn disabled_dates(&self, today: NaiveDate) -> Result<Vec<String>, ApiError> {
        let holidays = self.fetch_holidays(today.year()).await?;
        Ok(date::disabled_dates(&holidays, today))
    }

    /// 最近的有效交易日（含当天）
    pub async fn trade_date(&self, target: NaiveDate) -> Result<NaiveDate, ApiError> {
        let holidays = self.fetch_holidays(target.year()).await?;
        Ok(date::valid_trade_date(target, &holidays))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::base_info::tests::client_for;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mount_year(server: &MockServer, year: i32, body: serde_json::Value, times: u64) {
        Mock::given(method("GET"))
            .and(path(HOLIDAY_QUERY_PATH))
            .and(query_param("year", year.to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(times)
            .mount(server)
            .await;
    }

    fn service(server: &MockServer) -> HolidayService {
        HolidayService::new(client_for(server), Arc::new(HolidayCache::new()))
    }

    #[tokio::test]
    async fn test_fetch_holidays_caches_per_year() {
        let server = MockServer::start().await;
        mount_year(
            &server,
            2025,
            json!({ "code": 200, "data": [{ "holidayDate": "2025-10-01", "holidayName": "国庆节", "isHoliday": 1 }] }),
            1,
        )
        .await;
        mount_year(
            &server,
            2026,
            json!({ "code": 200, "data": [{ "holidayDate": "2026-01-01", "holidayName": "元旦", "isHoliday": 1 }] }),
            1,
        )
        .await;

        let service = service(&server);
        let first = service.fetch_holidays(2025).await.unwrap();
        let second = service.fetch_holidays(2025).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first[0].holiday_name, "国庆节");

        // 不同年份各自请求
        let next_year = service.fetch_holidays(2026).await.unwrap();
        assert_eq!(next_year[0].holiday_date, "2026-01-01");
        assert_eq!(service.cache.len().await, 2);
    }

    #[tokio::test]
    async fn test_get_holiday_list_is_uncached() {
        let server = MockServer::start().await;
        mount_year(&server, 2025, json!({ "code": 200, "data": [] }), 2).await;

        let service = service(&server);
        service.get_holiday_list(2025).await.unwrap();
        service.get_holiday_list(2025).await.unwrap();
        assert_eq!(service.cache.len().await, 0);
    }

    #[tokio::test]
    async fn test_failed_fetch_is_not_cached() {
        let server = MockServer::start().await;
        mount_year(&server, 2025, json!({ "code": 500, "message": "执行失败" }), 2).await;

        let service = service(&server);
        assert!(service.fetch_holidays(2025).await.is_err());
        assert!(service.fetch_holidays(2025).await.is_err());
        assert_eq!(service.cache.len().await, 0);
    }

    #[tokio::test]
    async fn test_shared_cache_between_services() {
        let server = MockServer::start().await;
        mount_year(&server, 2025, json!({ "code": 200, "data": [] }), 1).await;

        let cache = Arc::new(HolidayCache::new());
        let a = HolidayService::new(client_for(&server), cache.clone());
        let b = HolidayService::new(client_for(&server), cache);
        a.fetch_holidays(2025).await.unwrap();
        b.fetch_holidays(2025).await.unwrap();
    }

    #[tokio::test]
    async fn test_disabled_dates_and_trade_date() {
        let server = MockServer::start().await;
        mount_year(
            &server,
            2025,
            json!({ "code": 200, "data": [
                { "holidayDate": "2025-10-01", "holidayName": "国庆节", "isHoliday": 1, "isMakeupWork": 0 },
                { "holidayDate": "2025-10-02", "holidayName": "国庆节", "isHoliday": 1, "isMakeupWork": 0 }
            ] }),
            1,
        )
        .await;

        let service = service(&server);
        let today = NaiveDate::from_ymd_opt(2025, 9, 30).unwrap();
        let dates = service.disabled_dates(today).await.unwrap();
        assert_eq!(&dates[..3], &["2025-10-01", "2025-10-02", "2025-10-01"]);
        assert_eq!(dates.len(), 2 + date::FUTURE_WINDOW_DAYS as usize);

        let target = NaiveDate::from_ymd_opt(2025, 10, 2).unwrap();
        assert_eq!(service.trade_date(target).await.unwrap(), today);
    }
}
