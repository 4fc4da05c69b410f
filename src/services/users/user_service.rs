//! # 사용자 관리 서비스 구현
//!
//! 사용자 계정의 전체 생명주기를 관리하는 핵심 비즈니스 로직을 구현합니다.
//! 로컬 회원가입, 비밀번호 인증, 소셜 로그인 시 지연 생성, 닉네임 자동
//! 생성을 담당합니다.
//!
//! ## 보안 설계 원칙
//!
//! - **bcrypt 해싱**: 비밀번호는 환경별 cost로 해싱되며 평문은 저장도
//!   로깅도 되지 않습니다.
//! - **에러 메시지 통합**: 존재하지 않는 이메일과 틀린 비밀번호는 같은
//!   메시지로 응답하여 계정 존재 여부를 노출하지 않습니다.
//! - **소셜 계정 보호**: 소셜 계정은 비밀번호 인증을 시도할 수 없습니다.
//!
//! ## 닉네임 생성
//!
//! 무작위 닉네임은 고정 횟수까지만 재시도하고, 소진 시 숫자 꼬리
//! 폴백을 한 번 시도한 뒤 실패로 처리합니다. 동시 가입 경쟁은 닉네임
//! 유니크 제약이 최종적으로 차단합니다.

use std::sync::Arc;

use bcrypt::hash;

use crate::config::AuthProvider;
use crate::domain::dto::users::request::CreateUserRequest;
use crate::domain::dto::users::response::UserResponse;
use crate::domain::entities::User;
use crate::errors::{AppError, AppResult};
use crate::repositories::users::UserRepository;
use crate::services::auth::social::SocialUserProfile;
use crate::utils::nickname;
use crate::utils::string_utils::clean_optional_string;

/// 무작위 닉네임 생성 최대 시도 횟수
const MAX_NICKNAME_ATTEMPTS: usize = 5;

/// 사용자 관리 비즈니스 로직 서비스
pub struct UserService {
    user_repo: Arc<UserRepository>,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(user_repo: Arc<UserRepository>, bcrypt_cost: u32) -> Self {
        Self {
            user_repo,
            bcrypt_cost,
        }
    }

    /// 새 로컬 사용자 계정 생성
    ///
    /// # 처리 과정
    ///
    /// 1. 이메일 중복 확인
    /// 2. 닉네임 결정 (미지정 시 자동 생성)
    /// 3. 비밀번호 해싱 (bcrypt, 환경별 cost)
    /// 4. 저장 (유니크 제약이 동시 가입 경쟁을 최종 차단)
    ///
    /// # 반환값
    ///
    /// * `Ok(User)` - 생성된 사용자
    /// * `Err(AppError::ConflictError)` - 이메일 또는 닉네임 중복
    pub async fn register(&self, request: CreateUserRequest) -> AppResult<User> {
        if self.user_repo.find_by_email(&request.email).await?.is_some() {
            return Err(AppError::ConflictError(
                "이미 등록된 이메일입니다".to_string(),
            ));
        }

        let nickname = self.resolve_nickname(request.nickname).await?;

        let start = std::time::Instant::now();
        let password_hash = hash(&request.password, self.bcrypt_cost)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;
        log::debug!("Password hashing took: {:?}", start.elapsed());

        let user = self
            .user_repo
            .create_local(&nickname, &request.email, &password_hash)
            .await?;

        log::info!("신규 로컬 사용자 등록: {} (ID: {})", request.email, user.id);

        Ok(user)
    }

    /// 로컬 계정 비밀번호 검증
    ///
    /// # 반환값
    ///
    /// * `Ok(User)` - 인증된 사용자 엔티티
    /// * `Err(AppError::AuthenticationError)` - 잘못된 자격증명 또는 소셜 계정
    pub async fn verify_password(&self, email: &str, password: &str) -> AppResult<User> {
        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| {
                AppError::AuthenticationError("잘못된 이메일 또는 비밀번호입니다".to_string())
            })?;

        // 소셜 계정은 비밀번호 인증 불가
        if !user.can_authenticate_with_password() {
            return Err(AppError::AuthenticationError(
                "소셜 계정입니다. 해당 프로바이더로 로그인해주세요".to_string(),
            ));
        }

        let password_hash = user
            .password
            .as_ref()
            .ok_or_else(|| AppError::InternalError("비밀번호 해시가 없습니다".to_string()))?;

        let is_valid = bcrypt::verify(password, password_hash)
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))?;

        if !is_valid {
            return Err(AppError::AuthenticationError(
                "잘못된 이메일 또는 비밀번호입니다".to_string(),
            ));
        }

        Ok(user)
    }

    /// 소셜 로그인 처리 (최초 로그인 시 지연 생성)
    ///
    /// 외부 프로바이더가 신원을 검증한 뒤에만 호출됩니다.
    /// (provider, provider_user_id)로 기존 회원을 조회하고, 없으면
    /// 프로바이더 프로필로 새 계정을 생성합니다.
    pub async fn social_login(
        &self,
        provider: AuthProvider,
        profile: SocialUserProfile,
    ) -> AppResult<User> {
        if let Some(user) = self
            .user_repo
            .find_by_social_id(provider, &profile.provider_user_id)
            .await?
        {
            log::info!(
                "{} 사용자 로그인: ID {}",
                provider.as_str(),
                user.id
            );
            return Ok(user);
        }

        // 프로바이더 닉네임이 없거나 이미 사용 중이면 자동 생성으로 폴백
        let nickname = match clean_optional_string(profile.nickname) {
            Some(wanted) if self.user_repo.find_by_nickname(&wanted).await?.is_none() => wanted,
            _ => self.generate_unique_nickname().await?,
        };

        let user = self
            .user_repo
            .create_social(
                &nickname,
                profile.email.as_deref(),
                profile.profile_image.as_deref(),
                provider,
                &profile.provider_user_id,
            )
            .await?;

        log::info!(
            "신규 {} 사용자 등록: ID {}",
            provider.as_str(),
            user.id
        );

        Ok(user)
    }

    /// ID로 사용자 프로필 조회
    ///
    /// # 반환값
    ///
    /// * `Ok(UserResponse)` - 민감 정보를 제거한 사용자 프로필
    /// * `Err(AppError::NotFound)` - 해당 ID의 사용자가 존재하지 않음
    pub async fn get_user_by_id(&self, id: i64) -> AppResult<UserResponse> {
        let user = self
            .user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        Ok(UserResponse::from(user))
    }

    /// 요청된 닉네임을 확정하거나 자동 생성합니다.
    ///
    /// 사용자가 직접 지정한 닉네임의 중복은 폴백 없이 `ConflictError`로
    /// 처리합니다.
    async fn resolve_nickname(&self, wanted: Option<String>) -> AppResult<String> {
        match wanted {
            Some(nickname) => {
                if self.user_repo.find_by_nickname(&nickname).await?.is_some() {
                    return Err(AppError::ConflictError(
                        "이미 사용 중인 닉네임입니다".to_string(),
                    ));
                }
                Ok(nickname)
            }
            None => self.generate_unique_nickname().await,
        }
    }

    /// 저장소와 충돌하지 않는 무작위 닉네임을 생성합니다.
    ///
    /// 고정 횟수까지 재시도한 뒤 숫자 꼬리 폴백을 한 번 시도하며,
    /// 그래도 충돌하면 무한 재시도 대신 설정 오류로 간주하고 실패합니다.
    async fn generate_unique_nickname(&self) -> AppResult<String> {
        for _ in 0..MAX_NICKNAME_ATTEMPTS {
            let candidate = nickname::random_nickname();
            if self.user_repo.find_by_nickname(&candidate).await?.is_none() {
                return Ok(candidate);
            }
        }

        let fallback = nickname::with_numeric_tail(&nickname::random_nickname());
        if self.user_repo.find_by_nickname(&fallback).await?.is_none() {
            return Ok(fallback);
        }

        log::error!("닉네임 자동 생성 실패: 후보 공간이 소진되었습니다");
        Err(AppError::ConflictError(
            "닉네임을 생성할 수 없습니다. 닉네임을 직접 지정해주세요".to_string(),
        ))
    }
}
