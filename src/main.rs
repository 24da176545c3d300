//! 股票池看板服务
//!
//! 面向本地前端的看板后端：转发 BaseInfo 股票池/节假日接口，
//! 并在服务端完成筛选标记、连板分组与晋级率统计。

mod config;     // 配置加载
mod error;      // 错误类型
mod handlers;   // HTTP 请求处理器
mod middleware; // 中间件
mod models;     // 数据模型定义
mod services;   // BaseInfo 接口封装
mod utils;      // 日期/筛选/统计/文本工具

use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::handlers::AppState;
use crate::middleware::ApiKeyMiddleware;
use crate::services::{BaseInfoClient, HolidayCache, HolidayService};

/// 应用程序入口
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load();

    // RUST_LOG 优先，其次使用配置文件中的级别
    env_logger::init_from_env(Env::default().default_filter_or(config.log.level.as_str()));

    let client = BaseInfoClient::new(&config.base_info)?;
    let holidays = HolidayService::new(client.clone(), Arc::new(HolidayCache::new()));
    let state = web::Data::new(AppState { client, holidays });

    if config.api.api_key.is_empty() {
        log::warn!("未设置 API Key，/api 接口不做认证");
    }

    let bind_addr = config.bind_addr();
    log::info!(
        "启动股票池看板服务 {}，后端地址 {}",
        bind_addr,
        state.client.base_url()
    );

    let api_key = config.api.api_key.clone();
    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())  // 添加请求日志中间件
            .wrap(ApiKeyMiddleware::new(api_key.clone()))  // API Key 认证
            .app_data(state.clone())
            .configure(handlers::config)  // 配置路由
    });
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(bind_addr.as_str())?.run().await?;
    Ok(())
}
