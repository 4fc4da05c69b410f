//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! 로컬 계정은 이메일로, 소셜 계정은 (provider, provider_user_id) 쌍으로
//! 식별합니다.
//!
//! ## 데이터 무결성
//!
//! 이메일/닉네임/(provider, provider_user_id)의 유니크 제약은 스키마
//! 수준에서 강제되며, 위반 시 `ConflictError`로 번역됩니다. 생성은
//! `INSERT ... RETURNING` 단일 문장으로 수행되어 부분 쓰기가 외부에
//! 관찰되지 않습니다.

use chrono::Utc;
use sqlx::SqlitePool;

use crate::config::AuthProvider;
use crate::domain::entities::User;
use crate::errors::{AppError, AppResult};

const USER_COLUMNS: &str =
    "id, nickname, email, password, profile_image, provider, provider_user_id, created_at, updated_at";

/// 사용자 데이터 액세스 리포지토리
#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// 이메일 주소로 사용자 조회
    ///
    /// 정규화 없이 정확히 일치하는 행을 조회합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(User))` - 사용자를 찾은 경우
    /// * `Ok(None)` - 해당 이메일의 사용자가 없는 경우
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let query = format!("SELECT {} FROM user WHERE email = ?", USER_COLUMNS);

        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(Into::into)
    }

    /// (provider, provider_user_id) 쌍으로 소셜 사용자 조회
    pub async fn find_by_social_id(
        &self,
        provider: AuthProvider,
        provider_user_id: &str,
    ) -> AppResult<Option<User>> {
        let query = format!(
            "SELECT {} FROM user WHERE provider = ? AND provider_user_id = ?",
            USER_COLUMNS
        );

        sqlx::query_as::<_, User>(&query)
            .bind(provider)
            .bind(provider_user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(Into::into)
    }

    /// ID로 사용자 조회
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        let query = format!("SELECT {} FROM user WHERE id = ?", USER_COLUMNS);

        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(Into::into)
    }

    /// 닉네임으로 사용자 조회
    ///
    /// 닉네임은 시스템 전체에서 유니크하므로 최대 1개의 결과만 반환됩니다.
    /// 닉네임 자동 생성의 충돌 검사에 사용됩니다.
    pub async fn find_by_nickname(&self, nickname: &str) -> AppResult<Option<User>> {
        let query = format!("SELECT {} FROM user WHERE nickname = ?", USER_COLUMNS);

        sqlx::query_as::<_, User>(&query)
            .bind(nickname)
            .fetch_optional(&self.pool)
            .await
            .map_err(Into::into)
    }

    /// 새 로컬 사용자 생성
    ///
    /// 비밀번호는 호출자가 이미 해싱한 값이어야 합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(User)` - 생성된 사용자 (ID 포함)
    /// * `Err(AppError::ConflictError)` - 이메일 또는 닉네임 중복
    pub async fn create_local(
        &self,
        nickname: &str,
        email: &str,
        password_hash: &str,
    ) -> AppResult<User> {
        let now = Utc::now();
        let query = format!(
            "INSERT INTO user (nickname, email, password, provider, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?) \
             RETURNING {}",
            USER_COLUMNS
        );

        sqlx::query_as::<_, User>(&query)
            .bind(nickname)
            .bind(email)
            .bind(password_hash)
            .bind(AuthProvider::Local)
            .bind(now)
            .bind(now)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::from_sqlx(
                    e,
                    "이미 사용 중인 이메일 또는 닉네임입니다",
                    "참조하는 리소스를 찾을 수 없습니다",
                )
            })
    }

    /// 새 소셜 사용자 생성
    ///
    /// 외부 프로바이더가 신원을 검증한 이후에만 호출됩니다. 비밀번호는
    /// 저장하지 않습니다.
    pub async fn create_social(
        &self,
        nickname: &str,
        email: Option<&str>,
        profile_image: Option<&str>,
        provider: AuthProvider,
        provider_user_id: &str,
    ) -> AppResult<User> {
        let now = Utc::now();
        let query = format!(
            "INSERT INTO user (nickname, email, profile_image, provider, provider_user_id, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?) \
             RETURNING {}",
            USER_COLUMNS
        );

        sqlx::query_as::<_, User>(&query)
            .bind(nickname)
            .bind(email)
            .bind(profile_image)
            .bind(provider)
            .bind(provider_user_id)
            .bind(now)
            .bind(now)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::from_sqlx(
                    e,
                    "이미 등록된 소셜 계정 또는 닉네임입니다",
                    "참조하는 리소스를 찾을 수 없습니다",
                )
            })
    }
}
