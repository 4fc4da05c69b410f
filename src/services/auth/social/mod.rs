//! # 소셜 로그인 검증 서비스
//!
//! 각 프로바이더를 "액세스 토큰 검증 → (provider_user_id, email,
//! nickname, profile_image)" 형태의 균일한 능력 인터페이스 뒤로
//! 추상화합니다. 핵심 로직은 이 인터페이스에만 의존하며,
//! 프로바이더별 HTTP 세부사항은 각 구현 파일에 격리됩니다.
//!
//! ## 에러 매핑
//!
//! - 프로바이더가 2xx 이외를 반환 → `AuthenticationError` (401)
//! - 타임아웃/연결 실패/응답 파싱 실패 → `ExternalServiceError` (502)

pub mod google;
pub mod kakao;
pub mod naver;

use std::time::Duration;

use async_trait::async_trait;

use crate::config::{AuthProvider, OAuthConfig};
use crate::errors::{AppError, AppResult};

pub use google::GoogleVerifier;
pub use kakao::KakaoVerifier;
pub use naver::NaverVerifier;

/// 프로바이더가 검증한 신원 정보
///
/// 프로바이더별 응답 형태를 벗겨낸 공통 프로필입니다.
#[derive(Debug, Clone, PartialEq)]
pub struct SocialUserProfile {
    /// 프로바이더 측 사용자 고유 ID
    pub provider_user_id: String,
    pub email: Option<String>,
    pub nickname: Option<String>,
    pub profile_image: Option<String>,
}

/// 소셜 로그인 프로바이더 검증 인터페이스
///
/// 프로바이더는 검증된 신원의 오라클로만 취급됩니다.
#[async_trait]
pub trait ProviderVerifier: Send + Sync {
    /// 이 검증기가 담당하는 프로바이더
    fn provider(&self) -> AuthProvider;

    /// 프로바이더 액세스 토큰을 검증하고 신원 정보를 반환합니다.
    async fn verify(&self, access_token: &str) -> AppResult<SocialUserProfile>;
}

/// 소셜 로그인 검증 서비스
///
/// 등록된 검증기들을 프로바이더별로 디스패치합니다.
pub struct SocialAuthService {
    verifiers: Vec<Box<dyn ProviderVerifier>>,
}

impl SocialAuthService {
    /// 설정된 엔드포인트와 타임아웃으로 전체 프로바이더 검증기를 구성합니다.
    pub fn new(config: &OAuthConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| AppError::InternalError(format!("HTTP 클라이언트 생성 실패: {}", e)))?;

        let verifiers: Vec<Box<dyn ProviderVerifier>> = vec![
            Box::new(KakaoVerifier::new(
                client.clone(),
                config.kakao_user_info_uri.clone(),
            )),
            Box::new(NaverVerifier::new(
                client.clone(),
                config.naver_user_info_uri.clone(),
            )),
            Box::new(GoogleVerifier::new(client, config.google_user_info_uri.clone())),
        ];

        Ok(Self { verifiers })
    }

    /// 프로바이더 액세스 토큰을 검증합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 소셜 로그인을 지원하지 않는 프로바이더
    /// * `AppError::AuthenticationError` - 프로바이더가 토큰을 거부함
    /// * `AppError::ExternalServiceError` - 프로바이더 통신 실패
    pub async fn verify(
        &self,
        provider: AuthProvider,
        access_token: &str,
    ) -> AppResult<SocialUserProfile> {
        let verifier = self
            .verifiers
            .iter()
            .find(|v| v.provider() == provider)
            .ok_or_else(|| {
                AppError::ValidationError(format!(
                    "지원하지 않는 로그인 방식입니다: {}",
                    provider.as_str()
                ))
            })?;

        verifier.verify(access_token).await
    }
}

/// reqwest 전송 에러를 도메인 에러로 번역
pub(crate) fn transport_error(provider: AuthProvider, err: reqwest::Error) -> AppError {
    AppError::ExternalServiceError(format!(
        "{} 사용자 정보 요청 실패: {}",
        provider.as_str(),
        err
    ))
}

/// 프로바이더의 2xx 이외 응답을 도메인 에러로 번역
pub(crate) fn rejected_token_error(provider: AuthProvider) -> AppError {
    AppError::AuthenticationError(format!(
        "유효하지 않은 {} 토큰입니다",
        provider.as_str()
    ))
}

/// 프로바이더 응답 파싱 실패를 도메인 에러로 번역
pub(crate) fn parse_error(provider: AuthProvider, err: reqwest::Error) -> AppError {
    AppError::ExternalServiceError(format!(
        "{} 사용자 정보 파싱 실패: {}",
        provider.as_str(),
        err
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_local_provider_is_not_dispatchable() {
        let service = SocialAuthService::new(&OAuthConfig {
            kakao_user_info_uri: "http://localhost/kakao".to_string(),
            naver_user_info_uri: "http://localhost/naver".to_string(),
            google_user_info_uri: "http://localhost/google".to_string(),
            request_timeout_secs: 1,
        })
        .unwrap();

        let err = service.verify(AuthProvider::Local, "token").await.unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }
}
