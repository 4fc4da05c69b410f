//! 사용자 관련 응답 DTO
//!
//! 민감 정보(비밀번호 해시, 프로바이더 사용자 ID)를 제거한
//! 사용자 프로필 응답과 로그인 토큰 응답을 정의합니다.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::AuthProvider;
use crate::domain::entities::User;

/// 사용자 프로필 응답 DTO
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub nickname: String,
    pub email: Option<String>,
    pub profile_image: Option<String>,
    pub provider: Option<AuthProvider>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            nickname: user.nickname,
            email: user.email,
            profile_image: user.profile_image,
            provider: user.provider,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// 로그인 성공 시 발급되는 토큰 응답
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

impl TokenResponse {
    /// bearer 타입 토큰 응답 생성
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}
