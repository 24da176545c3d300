//! 纯计算工具：日期、筛选、统计、文本

pub mod date;
pub mod filter;
pub mod stats;
pub mod text;
