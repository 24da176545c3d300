//! API Key 认证中间件
//!
//! 仅保护 `/api/` 下的接口，通过 Header 中的 Authorization: Bearer <token> 认证。
//! 未配置 Key 时不启用；健康检查与页面路由始终放行。

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    Error, HttpResponse,
};
use futures::future::{ok, LocalBoxFuture, Ready};
use std::rc::Rc;

use crate::models::ApiResponse;

/// API Key 中间件
pub struct ApiKeyMiddleware {
    api_key: Option<Rc<String>>,
}

impl ApiKeyMiddleware {
    /// 传入空字符串表示关闭认证
    pub fn new(api_key: String) -> Self {
        let api_key = if api_key.trim().is_empty() {
            None
        } else {
            Some(Rc::new(api_key))
        };
        Self { api_key }
    }
}

/// 是否需要校验
fn requires_auth(path: &str) -> bool {
    path.starts_with("/api/") && !path.ends_with("/health")
}

fn bearer_token(req: &ServiceRequest) -> Option<&str> {
    req.headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
}

impl<S, B> Transform<S, ServiceRequest> for ApiKeyMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = ApiKeyMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(ApiKeyMiddlewareService {
            service: Rc::new(service),
            api_key: self.api_key.clone(),
        })
    }
}

pub struct ApiKeyMiddlewareService<S> {
    service: Rc<S>,
    api_key: Option<Rc<String>>,
}

impl<S, B> Service<ServiceRequest> for ApiKeyMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let api_key = self.api_key.clone();

        Box::pin(async move {
            let authorized = match &api_key {
                None => true,
                Some(_) if !requires_auth(req.path()) => true,
                Some(key) => bearer_token(&req) == Some(key.as_str()),
            };

            if authorized {
                let res = service.call(req).await?;
                return Ok(res.map_into_left_body());
            }

            log::warn!("拒绝未认证请求: {}", req.path());
            let response = HttpResponse::Unauthorized()
                .json(ApiResponse::<()>::error(401, "无效的 Bearer Token".to_string()));
            Ok(req.into_response(response).map_into_right_body())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App};

    async fn ok_handler() -> HttpResponse {
        HttpResponse::Ok().finish()
    }

    macro_rules! app_with_key {
        ($key:expr) => {
            test::init_service(
                App::new()
                    .wrap(ApiKeyMiddleware::new($key.to_string()))
                    .route("/optional", web::get().to(ok_handler))
                    .route("/api/v1/health", web::get().to(ok_handler))
                    .route("/api/v1/holiday/query", web::get().to(ok_handler)),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_protects_api_routes() {
        let app = app_with_key!("secret");

        let resp = test::call_service(&app, test::TestRequest::get().uri("/api/v1/holiday/query").to_request()).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let req = test::TestRequest::get()
            .uri("/api/v1/holiday/query")
            .insert_header((AUTHORIZATION, "Bearer wrong"))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);

        let req = test::TestRequest::get()
            .uri("/api/v1/holiday/query")
            .insert_header((AUTHORIZATION, "Bearer secret"))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_health_and_pages_are_open() {
        let app = app_with_key!("secret");
        for uri in ["/api/v1/health", "/optional"] {
            let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
            assert_eq!(resp.status(), StatusCode::OK, "uri: {}", uri);
        }
    }

    #[actix_web::test]
    async fn test_empty_key_disables_auth() {
        let app = app_with_key!("");
        let resp = test::call_service(&app, test::TestRequest::get().uri("/api/v1/holiday/query").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
