//! 连板分组与晋级率统计

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::models::{PromotionStat, StockRecord};

/// 按连板天数分组，缺省或为 0 的天数计为 1，组内保持输入顺序
pub fn group_stocks_by_limit_up_days(stocks: &[StockRecord]) -> BTreeMap<u32, Vec<StockRecord>> {
    let mut groups: BTreeMap<u32, Vec<StockRecord>> = BTreeMap::new();
    for stock in stocks {
        let days = stock.limit_up_days.filter(|&d| d > 0).unwrap_or(1);
        groups.entry(days).or_default().push(stock.clone());
    }
    groups
}

/// 计算 `current_day - 1` 板晋级到 `current_day` 板的比率
///
/// 任一分组不存在时返回 `"N/A"`，否则返回形如 `"1/3=33.33%"` 的字符串。
pub fn calculate_promotion_rate<T>(groups: &BTreeMap<u32, Vec<T>>, current_day: u32) -> String {
    let prev = current_day.checked_sub(1).and_then(|day| groups.get(&day));
    let (Some(prev), Some(current)) = (prev, groups.get(&current_day)) else {
        return "N/A".to_string();
    };

    let total = prev.len();
    let success = current.len();
    if total == 0 {
        return format!("{}/{}=0%", success, total);
    }

    let rate = success as f64 / total as f64 * 100.0;
    format!("{}/{}={:.2}%", success, total, rate)
}

/// 按涨跌幅降序排序（原地）
pub fn sort_stocks_by_change_percent(stocks: &mut [StockRecord]) {
    stocks.sort_by(|a, b| {
        b.change_percent
            .partial_cmp(&a.change_percent)
            .unwrap_or(Ordering::Equal)
    });
}

/// 晋级梯队：每个连板梯度的数量和晋级率，高板在前
pub fn promotion_ladder(groups: &BTreeMap<u32, Vec<StockRecord>>) -> Vec<PromotionStat> {
    groups
        .iter()
        .rev()
        .map(|(&day, stocks)| PromotionStat {
            day,
            count: stocks.len(),
            rate: calculate_promotion_rate(groups, day),
        })
        .collect()
}
