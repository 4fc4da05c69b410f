//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//! 사용자, 장소, 북마크, 기록 라우트와 헬스체크 엔드포인트를 포함합니다.
//!
//! # Auth Middleware Usage
//!
//! 라우트 그룹별로 다른 인증 레벨을 적용합니다:
//!
//! - 회원가입/로그인: 인증 불필요 (Public)
//! - 장소 목록/상세: 선택적 인증 (토큰이 있으면 북마크 플래그 계산)
//! - 내 정보/북마크/기록: 필수 인증

use actix_web::web;
use serde_json::json;

use crate::handlers;
use crate::middlewares::AuthMiddleware;

/// 모든 라우트를 설정합니다
///
/// 기능별로 분할된 라우트들을 통합하여 애플리케이션에 등록합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    // Feature-specific routes
    configure_user_routes(cfg);
    configure_place_routes(cfg);
    configure_bookmark_routes(cfg);
    configure_record_routes(cfg);
}

/// 사용자 관련 라우트를 설정합니다
///
/// ## Public 라우트 (인증 불필요)
/// - `POST /users` - 회원가입
/// - `POST /users/login/local` - 로컬 로그인
/// - `POST /users/login/{kakao,naver,google}` - 소셜 로그인
///
/// ## Protected 라우트 (인증 필요)
/// - `GET /users/me` - 현재 사용자 프로필
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    // /users/me가 /users 스코프의 경로 템플릿보다 먼저 매칭되도록 등록
    cfg.service(
        web::scope("/users/me")
            .wrap(AuthMiddleware::required())
            .service(handlers::users::me),
    );

    cfg.service(
        web::scope("/users")
            .service(handlers::users::create_user)
            // 리터럴 경로가 /login/{provider} 템플릿보다 먼저 매칭되도록 등록 순서 유지
            .service(handlers::users::local_login)
            .service(handlers::users::social_login),
    );
}

/// 장소 관련 라우트를 설정합니다
///
/// 선택적 인증: bearer 토큰이 있으면 뷰어 기준 `is_bookmark`가
/// 계산되고, 없어도 익명으로 접근할 수 있습니다.
fn configure_place_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/places")
            .wrap(AuthMiddleware::optional())
            .service(handlers::places::get_places)
            .service(handlers::places::get_place_detail),
    );
}

/// 북마크 관련 라우트를 설정합니다 (인증 필요)
fn configure_bookmark_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/bookmarks")
            .wrap(AuthMiddleware::required())
            .service(handlers::bookmarks::get_bookmarks)
            .service(handlers::bookmarks::create_bookmark)
            .service(handlers::bookmarks::delete_bookmark),
    );
}

/// 기록 관련 라우트를 설정합니다 (인증 필요)
fn configure_record_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/records")
            .wrap(AuthMiddleware::required())
            .service(handlers::records::get_records)
            .service(handlers::records::create_record)
            .service(handlers::records::get_record_detail),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "swimlog_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
