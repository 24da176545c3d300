//! 日期处理工具
//!
//! 日期统一以 `YYYY-MM-DD` 字符串对外，交易日按北京时间计算。

use chrono::{Datelike, Days, NaiveDate, Utc, Weekday};
use chrono_tz::Asia::Shanghai;
use regex::Regex;
use std::sync::OnceLock;

use crate::error::ApiError;
use crate::models::HolidayRecord;

/// 禁用的未来日期天数（不含今天）
pub const FUTURE_WINDOW_DAYS: u64 = 364;
/// 向前查找最近交易日的最大天数
const MAX_TRADE_DATE_LOOKBACK: u32 = 60;

const DATE_FORMAT: &str = "%Y-%m-%d";

fn separated_date_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(\d{4})[-/.](\d{1,2})[-/.](\d{1,2})(?:[T\s].*)?$").expect("valid date regex")
    })
}

fn compact_date_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d{4})(\d{2})(\d{2})$").expect("valid date regex"))
}

/// 北京时间的今天
pub fn beijing_today() -> NaiveDate {
    Utc::now().with_timezone(&Shanghai).date_naive()
}

pub fn format_naive(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// 解析常见日期写法
///
/// 支持 `2025-03-03`、`2025/3/3`、`2025.03.03`、`20250303`，
/// 以及以上述日期开头的时间串（如 `2025-03-03T09:30:00+08:00`）。
pub fn parse_date(input: &str) -> Result<NaiveDate, ApiError> {
    let input = input.trim();
    let caps = separated_date_re()
        .captures(input)
        .or_else(|| compact_date_re().captures(input))
        .ok_or_else(|| ApiError::InvalidParam(format!("无法识别的日期: {}", input)))?;

    let year: i32 = caps[1].parse().unwrap_or_default();
    let month: u32 = caps[2].parse().unwrap_or_default();
    let day: u32 = caps[3].parse().unwrap_or_default();

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| ApiError::InvalidParam(format!("无效的日期: {}", input)))
}

/// 格式化为 `YYYY-MM-DD`
pub fn format_date(input: &str) -> Result<String, ApiError> {
    parse_date(input).map(format_naive)
}

/// 禁用日期列表：节假日在前（保持原顺序），其后为未来 364 天（升序）
///
/// 不去重，节假日落在未来窗口内时会出现两次。
pub fn disabled_dates(holidays: &[HolidayRecord], today: NaiveDate) -> Vec<String> {
    let mut dates: Vec<String> = holidays
        .iter()
        .filter_map(|item| match format_date(&item.holiday_date) {
            Ok(date) => Some(date),
            Err(e) => {
                log::warn!("跳过无法解析的节假日 {:?}: {}", item, e);
                None
            }
        })
        .collect();

    dates.extend((1..=FUTURE_WINDOW_DAYS).map(|i| format_naive(today + Days::new(i))));
    dates
}

/// 获取节假日名称，未命中返回空串
pub fn holiday_name<'a>(date: &str, holidays: &'a [HolidayRecord]) -> &'a str {
    holidays
        .iter()
        .find(|item| item.holiday_date == date)
        .map(|item| item.holiday_name.as_str())
        .unwrap_or("")
}

/// 是否为交易日
///
/// 法定节假日休市，调休补班日开市，其余按周一至周五开市。
pub fn is_trade_day(date: NaiveDate, holidays: &[HolidayRecord]) -> bool {
    let key = format_naive(date);
    if let Some(holiday) = holidays.iter().find(|item| item.holiday_date == key) {
        if holiday.is_statutory_holiday() {
            return false;
        }
        if holiday.is_makeup_workday() {
            return true;
        }
    }

    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// 最近的有效交易日（含当天），最多向前查找 60 天
pub fn valid_trade_date(date: NaiveDate, holidays: &[HolidayRecord]) -> NaiveDate {
    let mut current = date;
    for _ in 0..MAX_TRADE_DATE_LOOKBACK {
        if is_trade_day(current, holidays) {
            if current != date {
                log::info!("{} 为非交易日，调整为最近交易日 {}", date, current);
            }
            return current;
        }
        match current.pred_opt() {
            Some(prev) => current = prev,
            None => break,
        }
    }

    log::warn!("查找最近交易日失败（已尝试{}天），返回日期：{}", MAX_TRADE_DATE_LOOKBACK, current);
    current
}
