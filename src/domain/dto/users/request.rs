//! 사용자 관련 요청 DTO
//!
//! 회원가입, 로컬 로그인, 소셜 로그인 요청 본문의 역직렬화와
//! 입력 검증을 담당합니다.

use serde::Deserialize;
use validator::Validate;

use crate::utils::string_utils::deserialize_optional_string;

/// 새로운 사용자 계정 생성을 위한 요청 DTO
///
/// 닉네임은 생략 가능하며, 생략하거나 공백만 보낸 경우 서버가
/// 무작위 닉네임을 생성합니다.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// 닉네임 (선택, 최대 50자)
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 50, message = "닉네임은 50자 이하여야 합니다"))]
    pub nickname: Option<String>,

    /// 사용자 이메일 주소
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    /// 계정 비밀번호
    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

/// 로컬 로그인 요청 구조체
#[derive(Debug, Deserialize, Validate)]
pub struct LocalLoginRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

/// 소셜 로그인 요청 구조체
///
/// 클라이언트가 프로바이더에서 직접 발급받은 액세스 토큰을 전달합니다.
#[derive(Debug, Deserialize, Validate)]
pub struct SocialLoginRequest {
    #[validate(length(min = 1, message = "프로바이더 액세스 토큰이 필요합니다"))]
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_user_request_without_nickname() {
        let json = r#"{"email": "a@x.com", "password": "pw"}"#;
        let req: CreateUserRequest = serde_json::from_str(json).unwrap();

        assert_eq!(req.nickname, None);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_create_user_request_blank_nickname_becomes_none() {
        let json = r#"{"nickname": "   ", "email": "a@x.com", "password": "pw"}"#;
        let req: CreateUserRequest = serde_json::from_str(json).unwrap();

        assert_eq!(req.nickname, None);
    }

    #[test]
    fn test_create_user_request_rejects_bad_email() {
        let json = r#"{"email": "not-an-email", "password": "pw"}"#;
        let req: CreateUserRequest = serde_json::from_str(json).unwrap();

        assert!(req.validate().is_err());
    }

    #[test]
    fn test_social_login_request_rejects_empty_token() {
        let req = SocialLoginRequest {
            access_token: String::new(),
        };

        assert!(req.validate().is_err());
    }
}
