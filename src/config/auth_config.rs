//! # Authentication Configuration Module
//!
//! OAuth 프로바이더, JWT 토큰 등 인증 관련 설정을 관리하는 모듈입니다.
//!
//! ## 지원하는 인증 방식
//!
//! 1. **로컬 인증**: 이메일/패스워드 기반 전통적인 인증
//! 2. **소셜 로그인**: Kakao / Naver / Google 액세스 토큰 검증
//! 3. **JWT 토큰**: Stateless 인증을 위한 JSON Web Token
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export ACCESS_TOKEN_EXPIRE_MINUTES="1440"
//! ```
//!
//! 프로바이더 user-info 엔드포인트는 기본값이 제공되며,
//! 테스트 환경에서 모의 서버를 가리키도록 재정의할 수 있습니다.

use std::env;

/// JSON Web Token (JWT) 관련 설정
///
/// 토큰 서명 비밀키와 만료 시간을 관리합니다. 서명 키와 알고리즘(HS256)은
/// 프로세스 전역 설정으로, 시작 시 한 번 로드된 후 불변입니다.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// JWT 서명 비밀키
    pub secret: String,
    /// 액세스 토큰 만료 시간 (분)
    pub expire_minutes: i64,
}

impl JwtConfig {
    /// 환경 변수에서 JWT 설정을 로드합니다.
    ///
    /// # Environment Variables
    ///
    /// - `JWT_SECRET`: 서명 비밀키. 미설정 시 개발용 기본값과 경고 로그
    /// - `ACCESS_TOKEN_EXPIRE_MINUTES`: 만료 시간(분). 기본값 1440 (24시간)
    pub fn from_env() -> Self {
        let secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            log::warn!("JWT_SECRET not set, using default (not secure for production!)");
            "your-secret-key".to_string()
        });
        let expire_minutes = env::var("ACCESS_TOKEN_EXPIRE_MINUTES")
            .unwrap_or_else(|_| "1440".to_string())
            .parse()
            .unwrap_or(1440);

        Self {
            secret,
            expire_minutes,
        }
    }
}

/// 소셜 로그인 프로바이더 설정
///
/// 각 프로바이더의 user-info 엔드포인트와 외부 호출 타임아웃을 관리합니다.
/// 프로바이더 호출은 타임아웃으로 상한이 걸리며, 초과 시 외부 서비스
/// 에러로 처리됩니다.
#[derive(Debug, Clone)]
pub struct OAuthConfig {
    /// Kakao 사용자 정보 조회 엔드포인트
    pub kakao_user_info_uri: String,
    /// Naver 사용자 정보 조회 엔드포인트
    pub naver_user_info_uri: String,
    /// Google 사용자 정보 조회 엔드포인트
    pub google_user_info_uri: String,
    /// 프로바이더 호출 타임아웃 (초)
    pub request_timeout_secs: u64,
}

impl OAuthConfig {
    /// 환경 변수에서 OAuth 설정을 로드합니다.
    ///
    /// # Environment Variables
    ///
    /// - `KAKAO_USER_INFO_URI` (기본값: `https://kapi.kakao.com/v2/user/me`)
    /// - `NAVER_USER_INFO_URI` (기본값: `https://openapi.naver.com/v1/nid/me`)
    /// - `GOOGLE_USER_INFO_URI` (기본값: `https://www.googleapis.com/oauth2/v2/userinfo`)
    /// - `OAUTH_REQUEST_TIMEOUT_SECS` (기본값: 5)
    pub fn from_env() -> Self {
        let kakao_user_info_uri = env::var("KAKAO_USER_INFO_URI")
            .unwrap_or_else(|_| "https://kapi.kakao.com/v2/user/me".to_string());
        let naver_user_info_uri = env::var("NAVER_USER_INFO_URI")
            .unwrap_or_else(|_| "https://openapi.naver.com/v1/nid/me".to_string());
        let google_user_info_uri = env::var("GOOGLE_USER_INFO_URI")
            .unwrap_or_else(|_| "https://www.googleapis.com/oauth2/v2/userinfo".to_string());
        let request_timeout_secs = env::var("OAUTH_REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "5".to_string())
            .parse()
            .unwrap_or(5);

        Self {
            kakao_user_info_uri,
            naver_user_info_uri,
            google_user_info_uri,
            request_timeout_secs,
        }
    }
}

/// 지원하는 인증 공급자를 나타내는 열거형
///
/// 사용자 레코드의 `provider` 컬럼(TEXT)과 직접 매핑되며,
/// `serde`를 통한 JSON 직렬화도 동일한 소문자 표기를 사용합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize, sqlx::Type)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    /// 로컬 이메일/패스워드 인증
    Local,
    /// Kakao 소셜 로그인
    Kakao,
    /// Naver 소셜 로그인
    Naver,
    /// Google 소셜 로그인
    Google,
}

impl AuthProvider {
    /// 문자열에서 AuthProvider를 생성합니다.
    ///
    /// # 지원되는 값
    ///
    /// `"local"`, `"kakao"`, `"naver"`, `"google"` (대소문자 무관)
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "local" => Ok(AuthProvider::Local),
            "kakao" => Ok(AuthProvider::Kakao),
            "naver" => Ok(AuthProvider::Naver),
            "google" => Ok(AuthProvider::Google),
            _ => Err(format!("Unsupported auth provider: {}", s)),
        }
    }

    /// AuthProvider를 문자열로 변환합니다.
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::Local => "local",
            AuthProvider::Kakao => "kakao",
            AuthProvider::Naver => "naver",
            AuthProvider::Google => "google",
        }
    }

    /// 소셜 로그인 프로바이더인지 확인
    pub fn is_social(&self) -> bool {
        !matches!(self, AuthProvider::Local)
    }
}
