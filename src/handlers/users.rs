//! # User HTTP Handlers
//!
//! 회원가입, 로컬/소셜 로그인, 내 정보 조회 엔드포인트를 처리하는
//! 핸들러 함수들입니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 인증 | 설명 |
//! |--------|------|------|------|
//! | `POST` | `/users` | 없음 | 로컬 회원가입 (이메일 중복 시 409) |
//! | `POST` | `/users/login/local` | 없음 | 이메일/비밀번호 로그인 |
//! | `POST` | `/users/login/{kakao,naver,google}` | 없음 | 프로바이더 토큰 검증 후 로그인 |
//! | `GET` | `/users/me` | bearer | 현재 사용자 프로필 |

use actix_web::{get, post, web, HttpResponse};
use serde_json::json;
use validator::Validate;

use crate::config::AuthProvider;
use crate::domain::auth::AuthenticatedUser;
use crate::domain::dto::common::ApiResponse;
use crate::domain::dto::users::request::{CreateUserRequest, LocalLoginRequest, SocialLoginRequest};
use crate::domain::dto::users::response::TokenResponse;
use crate::errors::AppError;
use crate::services::auth::{SocialAuthService, TokenService};
use crate::services::users::UserService;

/// 회원가입 핸들러
///
/// 닉네임을 생략하면 서버가 무작위 닉네임을 생성합니다.
///
/// # Endpoint
/// `POST /users`
#[post("")]
pub async fn create_user(
    payload: web::Json<CreateUserRequest>,
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user = user_service.register(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        "User created successfully",
        Some(json!({ "user_id": user.id })),
    )))
}

/// 로컬 로그인 핸들러
///
/// 이메일과 패스워드를 검증하고 bearer 토큰을 발급합니다.
///
/// # Endpoint
/// `POST /users/login/local`
#[post("/login/local")]
pub async fn local_login(
    payload: web::Json<LocalLoginRequest>,
    user_service: web::Data<UserService>,
    token_service: web::Data<TokenService>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user = user_service
        .verify_password(&payload.email, &payload.password)
        .await?;

    log::info!("로컬 로그인 성공: {} (ID: {})", payload.email, user.id);

    let access_token = token_service.issue(user.id)?;

    Ok(HttpResponse::Ok().json(TokenResponse::bearer(access_token)))
}

/// 소셜 로그인 핸들러
///
/// 클라이언트가 전달한 프로바이더 액세스 토큰을 검증하고, 최초 로그인인
/// 경우 사용자를 지연 생성한 뒤 bearer 토큰을 발급합니다.
///
/// # Endpoint
/// `POST /users/login/{kakao,naver,google}`
#[post("/login/{provider}")]
pub async fn social_login(
    path: web::Path<String>,
    payload: web::Json<SocialLoginRequest>,
    social_auth: web::Data<SocialAuthService>,
    user_service: web::Data<UserService>,
    token_service: web::Data<TokenService>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let provider = AuthProvider::from_str(&path.into_inner())
        .map_err(|e| AppError::ValidationError(e))?;

    // 프로바이더는 검증된 신원의 오라클로만 사용된다
    let profile = social_auth
        .verify(provider, &payload.access_token)
        .await?;

    let user = user_service.social_login(provider, profile).await?;
    let access_token = token_service.issue(user.id)?;

    Ok(HttpResponse::Ok().json(TokenResponse::bearer(access_token)))
}

/// 현재 인증된 사용자 정보 조회 핸들러
///
/// 토큰은 유효하지만 사용자가 삭제된 경우에도 401로 응답합니다.
///
/// # Endpoint
/// `GET /users/me`
#[get("")]
pub async fn me(
    user: AuthenticatedUser,
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let profile = user_service.get_user_by_id(user.user_id).await.map_err(|_| {
        AppError::AuthenticationError("사용자를 찾을 수 없습니다".to_string())
    })?;

    Ok(HttpResponse::Ok().json(profile))
}
