//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 로컬 인증과 소셜 인증을 모두 지원하는 통합된 사용자 모델을 제공합니다.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::config::AuthProvider;

/// 사용자 엔티티
///
/// 시스템의 모든 사용자를 표현하는 핵심 도메인 엔티티입니다.
/// 로컬 사용자는 이메일로, 소셜 사용자는 (provider, provider_user_id)
/// 쌍으로 유일하게 식별됩니다. 닉네임은 전체 유니크입니다.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    /// 닉네임 (unique, 미지정 시 자동 생성)
    pub nickname: String,
    /// 이메일 (unique, 소셜 전용 계정은 없을 수 있음)
    pub email: Option<String>,
    /// 해시된 비밀번호 (소셜 사용자의 경우 None)
    pub password: Option<String>,
    /// 프로필 이미지 URL
    pub profile_image: Option<String>,
    /// 인증 프로바이더
    pub provider: Option<AuthProvider>,
    /// 프로바이더 측 사용자 ID (소셜 계정 전용)
    pub provider_user_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// 로컬 인증 사용자인지 확인
    pub fn is_local_auth(&self) -> bool {
        matches!(self.provider, Some(AuthProvider::Local))
    }

    /// 소셜 인증 사용자인지 확인
    pub fn is_social_auth(&self) -> bool {
        self.provider.map_or(false, |p| p.is_social())
    }

    /// 비밀번호 인증이 가능한 사용자인지 확인
    pub fn can_authenticate_with_password(&self) -> bool {
        self.is_local_auth() && self.password.is_some()
    }
}
