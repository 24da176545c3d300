//! 筛选工具
//!
//! 只标记不隐藏：每只股票都会保留，命中与否写在 `is_match` 上，
//! 由前端决定高亮或置灰。

use std::collections::HashSet;

use crate::models::{FilterParams, StockGrade, StockRecord};

/// 单只股票是否命中（原因多选 + 名称模糊 + 详情模糊，三者取 AND）
pub fn stock_matches(stock: &StockRecord, params: &FilterParams) -> bool {
    let reason_match = params.reason_list.is_empty()
        || stock
            .reason_list
            .iter()
            .any(|reason| params.reason_list.contains(reason));

    let name_match = params.stock_name.is_empty() || stock.stock_name.contains(&params.stock_name);

    let detail_match =
        params.stock_reason.is_empty() || stock.stock_reason.contains(&params.stock_reason);

    reason_match && name_match && detail_match
}

/// 筛选股票，返回新的分组列表，输入不做修改
pub fn filter_stocks(grades: &[StockGrade], params: &FilterParams) -> Vec<StockGrade> {
    grades
        .iter()
        .map(|grade| StockGrade {
            children: grade
                .children
                .iter()
                .map(|stock| StockRecord {
                    is_match: Some(stock_matches(stock, params)),
                    ..stock.clone()
                })
                .collect(),
            ..grade.clone()
        })
        .collect()
}

/// 提取所有涨停原因并去重，按首次出现顺序返回
pub fn extract_all_reasons(grades: &[StockGrade]) -> Vec<String> {
    let mut seen = HashSet::new();
    grades
        .iter()
        .flat_map(|grade| grade.children.iter())
        .flat_map(|stock| stock.reason_list.iter())
        .filter(|reason| seen.insert(reason.as_str()))
        .cloned()
        .collect()
}

/// 命中数与总数
pub fn match_counts(grades: &[StockGrade]) -> (usize, usize) {
    grades
        .iter()
        .flat_map(|grade| grade.children.iter())
        .fold((0, 0), |(matched, total), stock| {
            (matched + usize::from(stock.is_match.unwrap_or(false)), total + 1)
        })
}
