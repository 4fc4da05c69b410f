//! Naver 소셜 로그인 검증기
//!
//! Naver 회원 프로필 조회 API(`/v1/nid/me`)를 호출하여 액세스 토큰을
//! 검증하고 공통 프로필로 변환합니다. Naver는 HTTP 200 안에
//! `resultcode` 필드로 성공 여부를 한 번 더 표현합니다.

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::AuthProvider;
use crate::errors::AppResult;

use super::{parse_error, rejected_token_error, transport_error, ProviderVerifier, SocialUserProfile};

/// Naver 회원 프로필 조회 응답
#[derive(Debug, Deserialize)]
struct NaverUserResponse {
    resultcode: String,
    response: Option<NaverProfile>,
}

#[derive(Debug, Deserialize)]
struct NaverProfile {
    id: String,
    email: Option<String>,
    nickname: Option<String>,
    profile_image: Option<String>,
}

impl NaverUserResponse {
    /// 성공 응답("00")에서만 프로필을 꺼냅니다.
    fn into_profile(self) -> Option<SocialUserProfile> {
        if self.resultcode != "00" {
            return None;
        }

        self.response.map(|p| SocialUserProfile {
            provider_user_id: p.id,
            email: p.email,
            nickname: p.nickname,
            profile_image: p.profile_image,
        })
    }
}

/// Naver 프로바이더 검증기
pub struct NaverVerifier {
    client: reqwest::Client,
    user_info_uri: String,
}

impl NaverVerifier {
    pub fn new(client: reqwest::Client, user_info_uri: String) -> Self {
        Self {
            client,
            user_info_uri,
        }
    }
}

#[async_trait]
impl ProviderVerifier for NaverVerifier {
    fn provider(&self) -> AuthProvider {
        AuthProvider::Naver
    }

    async fn verify(&self, access_token: &str) -> AppResult<SocialUserProfile> {
        let response = self
            .client
            .get(&self.user_info_uri)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| transport_error(self.provider(), e))?;

        if !response.status().is_success() {
            return Err(rejected_token_error(self.provider()));
        }

        let user = response
            .json::<NaverUserResponse>()
            .await
            .map_err(|e| parse_error(self.provider(), e))?;

        user.into_profile()
            .ok_or_else(|| rejected_token_error(AuthProvider::Naver))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_successful_naver_response() {
        let json = r#"{
            "resultcode": "00",
            "message": "success",
            "response": {
                "id": "32742776",
                "email": "user@naver.com",
                "nickname": "네이버유저",
                "profile_image": "https://ssl.pstatic.net/p.png"
            }
        }"#;

        let profile = serde_json::from_str::<NaverUserResponse>(json)
            .unwrap()
            .into_profile()
            .unwrap();

        assert_eq!(profile.provider_user_id, "32742776");
        assert_eq!(profile.email.as_deref(), Some("user@naver.com"));
        assert_eq!(profile.nickname.as_deref(), Some("네이버유저"));
    }

    #[test]
    fn test_non_success_resultcode_yields_no_profile() {
        let json = r#"{"resultcode": "024", "message": "Authentication failed"}"#;

        let parsed = serde_json::from_str::<NaverUserResponse>(json).unwrap();
        assert!(parsed.into_profile().is_none());
    }
}
