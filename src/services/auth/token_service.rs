//! JWT 토큰 관리 서비스 구현
//!
//! JSON Web Token 기반의 인증 시스템을 제공합니다.
//! 액세스 토큰의 발급과 검증을 담당하며, HMAC-SHA256 서명을 사용합니다.
//!
//! 토큰은 상태 없는 bearer 자격 증명입니다. 철회 목록은 없으며
//! 만료가 유일한 무효화 수단입니다. 서명 키와 기본 만료 시간은
//! 시작 시 [`JwtConfig`]에서 한 번 로드됩니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::config::JwtConfig;
use crate::domain::token::TokenClaims;
use crate::errors::{AppError, AppResult};

/// JWT 토큰 관리 서비스
pub struct TokenService {
    secret: String,
    expire_minutes: i64,
}

impl TokenService {
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            secret: config.secret.clone(),
            expire_minutes: config.expire_minutes,
        }
    }

    /// 설정된 기본 만료 시간으로 액세스 토큰 발급
    ///
    /// # 인자
    ///
    /// * `user_id` - 토큰의 주체가 될 사용자 ID
    ///
    /// # 반환값
    ///
    /// * `Ok(String)` - 생성된 JWT 액세스 토큰
    pub fn issue(&self, user_id: i64) -> AppResult<String> {
        self.issue_with_ttl(user_id, self.expire_minutes)
    }

    /// 만료 시간을 지정하여 액세스 토큰 발급
    ///
    /// 토큰에는 주체 ID와 절대 만료 시각(현재 시각 + ttl)이 담깁니다.
    pub fn issue_with_ttl(&self, user_id: i64, ttl_minutes: i64) -> AppResult<String> {
        let now = Utc::now();
        let expiration = now + Duration::minutes(ttl_minutes);

        let claims = TokenClaims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        let header = Header::default();
        let encoding_key = EncodingKey::from_secret(self.secret.as_ref());

        encode(&header, &claims, &encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// JWT 토큰 검증 및 클레임 추출
    ///
    /// # 반환값
    ///
    /// * `Ok(TokenClaims)` - 검증된 토큰의 클레임 정보
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 토큰 만료, 잘못된 형식/서명
    pub fn verify(&self, token: &str) -> AppResult<TokenClaims> {
        let decoding_key = DecodingKey::from_secret(self.secret.as_ref());
        let validation = Validation::default();

        decode::<TokenClaims>(token, &decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
                }
                _ => AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string()),
            })
    }

    /// 액세스 토큰으로부터 사용자 ID 추출
    pub fn extract_user_id(&self, token: &str) -> AppResult<i64> {
        let claims = self.verify(token)?;

        claims
            .sub
            .parse::<i64>()
            .map_err(|_| AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string()))
    }

    /// Bearer 토큰에서 실제 토큰 부분 추출
    ///
    /// HTTP Authorization 헤더의 "Bearer {token}" 형식에서 토큰 부분만을 추출합니다.
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> AppResult<&'a str> {
        if let Some(token) = auth_header.strip_prefix("Bearer ") {
            Ok(token)
        } else {
            Err(AppError::AuthenticationError(
                "유효하지 않은 인증 헤더 형식입니다".to_string(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new(&JwtConfig {
            secret: "test-secret".to_string(),
            expire_minutes: 30,
        })
    }

    #[test]
    fn test_issue_verify_round_trip() {
        let service = service();

        let token = service.issue(42).unwrap();
        let claims = service.verify(&token).unwrap();

        assert_eq!(claims.sub, "42");
        assert!(claims.exp > claims.iat);
        assert_eq!(service.extract_user_id(&token).unwrap(), 42);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let service = service();

        // 기본 leeway(60초)를 넘어서는 과거 만료 시각
        let token = service.issue_with_ttl(42, -2).unwrap();
        let err = service.verify(&token).unwrap_err();

        assert!(matches!(err, AppError::AuthenticationError(_)));
    }

    #[test]
    fn test_tampered_signature_is_rejected() {
        let service = service();

        let token = service.issue(42).unwrap();
        let mut tampered = token.clone();
        let last = tampered.pop().unwrap();
        tampered.push(if last == 'a' { 'b' } else { 'a' });

        assert!(matches!(
            service.verify(&tampered),
            Err(AppError::AuthenticationError(_))
        ));
    }

    #[test]
    fn test_token_from_other_secret_is_rejected() {
        let service = service();
        let other = TokenService::new(&JwtConfig {
            secret: "other-secret".to_string(),
            expire_minutes: 30,
        });

        let token = other.issue(42).unwrap();

        assert!(matches!(
            service.verify(&token),
            Err(AppError::AuthenticationError(_))
        ));
    }

    #[test]
    fn test_malformed_token_is_rejected() {
        let service = service();

        assert!(matches!(
            service.verify("not-a-jwt"),
            Err(AppError::AuthenticationError(_))
        ));
    }

    #[test]
    fn test_extract_bearer_token() {
        let service = service();

        assert_eq!(
            service.extract_bearer_token("Bearer abc.def.ghi").unwrap(),
            "abc.def.ghi"
        );
        assert!(service.extract_bearer_token("Basic abc").is_err());
        assert!(service.extract_bearer_token("abc").is_err());
    }
}
