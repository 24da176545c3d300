//! BaseInfo 后端 HTTP 客户端
//!
//! 统一配置超时与请求头，解析 `{ code, message, data }` 信封：
//! - 业务码为 200 时返回 `data`
//! - 其余情况记录日志并返回 [`ApiError`]，由调用方决定如何提示

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

use crate::config::BaseInfoConfig;
use crate::error::ApiError;
use crate::models::Envelope;

/// 单次请求描述
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// 接口路径，如 `/baseInfo/api/holiday/sync/query`
    pub path: String,
    pub method: Method,
    /// 查询参数
    pub params: Vec<(String, String)>,
    /// JSON 请求体
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn get(path: &str) -> Self {
        Self {
            path: path.to_string(),
            method: Method::GET,
            params: Vec::new(),
            body: None,
        }
    }

    #[cfg(test)]
    pub fn post(path: &str, body: serde_json::Value) -> Self {
        Self {
            path: path.to_string(),
            method: Method::POST,
            params: Vec::new(),
            body: Some(body),
        }
    }

    /// 追加查询参数
    pub fn param(mut self, key: &str, value: impl ToString) -> Self {
        self.params.push((key.to_string(), value.to_string()));
        self
    }

    /// 值为 None 时不追加
    pub fn param_opt<V: ToString>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.param(key, v),
            None => self,
        }
    }
}

/// BaseInfo 后端客户端
///
/// 内部的 `reqwest::Client` 自带连接池，克隆开销很小。
#[derive(Debug, Clone)]
pub struct BaseInfoClient {
    client: Client,
    base_url: Url,
}

impl BaseInfoClient {
    /// 根据配置创建客户端
    pub fn new(config: &BaseInfoConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/json;charset=UTF-8"),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .gzip(true)
            .build()
            .map_err(|e| ApiError::Network(format!("创建 HTTP 客户端失败: {}", e)))?;

        // 保证以 / 结尾，拼接路径时保留前缀
        let mut base = config.base_url.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base)
            .map_err(|e| ApiError::InvalidParam(format!("无效的后端地址 {}: {}", config.base_url, e)))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ApiError::InvalidParam(format!("无效的接口路径 {}: {}", path, e)))
    }

    /// 发送请求并解包信封
    ///
    /// 成功时返回 `data`，后端未返回 `data` 时为 `None`。
    pub async fn request<T: DeserializeOwned>(&self, req: ApiRequest) -> Result<Option<T>, ApiError> {
        let url = self.endpoint(&req.path)?;
        log::debug!("请求 BaseInfo: {} {} {:?}", req.method, url, req.params);

        let mut builder = self.client.request(req.method.clone(), url.clone());
        if !req.params.is_empty() {
            builder = builder.query(&req.params);
        }
        if let Some(body) = &req.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            log::warn!("请求 {} 失败: {}", url, e);
            ApiError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("请求 {} 返回 HTTP {}", url, status);
            return Err(ApiError::HttpStatus(status.as_u16()));
        }

        let envelope: Envelope<T> = response.json().await.map_err(|e| {
            log::warn!("解析 {} 响应失败: {}", url, e);
            match ApiError::from(e) {
                ApiError::Network(msg) => ApiError::Decode(msg),
                other => other,
            }
        })?;

        if !envelope.is_success() {
            let message = envelope
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| "请求失败".to_string());
            log::warn!("请求 {} 业务失败: code={}, message={}", url, envelope.code, message);
            return Err(ApiError::Business { code: envelope.code, message });
        }

        Ok(envelope.data)
    }

    /// 列表接口：`data` 缺省时返回空列表
    pub async fn fetch_list<T: DeserializeOwned>(&self, req: ApiRequest) -> Result<Vec<T>, ApiError> {
        Ok(self.request::<Vec<T>>(req).await?.unwrap_or_default())
    }
}
