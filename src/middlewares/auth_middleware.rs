//! JWT 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 JWT 토큰을 검증하고 사용자 정보를 추출합니다.
//! `Required` 모드는 토큰이 없거나 유효하지 않으면 도메인 로직 실행 전에
//! 401로 차단하고, `Optional` 모드는 익명 진행을 허용합니다. 장소
//! 목록/상세처럼 선택적 신원 계약을 선언한 엔드포인트만 `Optional`을
//! 사용합니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::domain::auth::AuthMode;
use crate::middlewares::auth_inner::AuthMiddlewareService;

/// JWT 인증 미들웨어
pub struct AuthMiddleware {
    /// 인증 모드 (Required/Optional)
    mode: AuthMode,
}

impl AuthMiddleware {
    /// 새로운 인증 미들웨어 생성
    pub fn new(mode: AuthMode) -> Self {
        Self { mode }
    }

    /// 필수 인증 미들웨어 생성
    pub fn required() -> Self {
        Self::new(AuthMode::Required)
    }

    /// 선택적 인증 미들웨어 생성
    pub fn optional() -> Self {
        Self::new(AuthMode::Optional)
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            mode: self.mode.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::JwtConfig;
    use crate::domain::auth::{AuthenticatedUser, OptionalUser};
    use crate::services::auth::TokenService;
    use actix_web::{get, test, web, App, HttpResponse};

    #[get("/protected")]
    async fn protected(user: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().json(serde_json::json!({ "user_id": user.user_id }))
    }

    #[get("/open")]
    async fn open(viewer: OptionalUser) -> HttpResponse {
        HttpResponse::Ok().json(serde_json::json!({ "viewer": viewer.user_id() }))
    }

    fn token_service() -> TokenService {
        TokenService::new(&JwtConfig {
            secret: "test-secret".to_string(),
            expire_minutes: 30,
        })
    }

    #[actix_web::test]
    async fn test_required_mode_rejects_missing_token() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(token_service()))
                .service(web::scope("/api").wrap(AuthMiddleware::required()).service(protected)),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/protected").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_required_mode_accepts_valid_token() {
        let service = token_service();
        let token = service.issue(7).unwrap();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(service))
                .service(web::scope("/api").wrap(AuthMiddleware::required()).service(protected)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/protected")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["user_id"], 7);
    }

    #[actix_web::test]
    async fn test_optional_mode_allows_anonymous_and_resolves_token() {
        let service = token_service();
        let token = service.issue(7).unwrap();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(service))
                .service(web::scope("/api").wrap(AuthMiddleware::optional()).service(open)),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/open").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["viewer"], serde_json::Value::Null);

        let req = test::TestRequest::get()
            .uri("/api/open")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["viewer"], 7);
    }
}
