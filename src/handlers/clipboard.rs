//! 剪贴板接口
//!
//! 本地部署时前端可请求服务端复制股票名称/代码。

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use super::failure;
use crate::error::ApiError;
use crate::models::ApiResponse;
use crate::utils::text::{self, DEFAULT_TRUNCATE_LEN};

#[derive(Debug, Deserialize)]
pub struct CopyRequest {
    pub text: String,
}

/// POST /clipboard
pub async fn copy(req: web::Json<CopyRequest>) -> HttpResponse {
    if req.text.is_empty() {
        return failure(ApiError::InvalidParam("复制内容不能为空".to_string()));
    }

    text::copy_to_clipboard(&req.text);
    let preview = text::truncate_text(&req.text, DEFAULT_TRUNCATE_LEN);
    HttpResponse::Ok().json(ApiResponse::success(format!("已复制: {}", preview)))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/clipboard", web::post().to(copy));
}
