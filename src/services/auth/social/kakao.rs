//! Kakao 소셜 로그인 검증기
//!
//! Kakao user-info API(`/v2/user/me`)를 호출하여 액세스 토큰을
//! 검증하고 공통 프로필로 변환합니다.

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::AuthProvider;
use crate::errors::AppResult;

use super::{parse_error, rejected_token_error, transport_error, ProviderVerifier, SocialUserProfile};

/// Kakao user-info 응답
///
/// 이메일/프로필 동의 항목은 사용자가 거부할 수 있으므로 전부 선택값입니다.
#[derive(Debug, Deserialize)]
struct KakaoUserResponse {
    id: i64,
    #[serde(default)]
    kakao_account: Option<KakaoAccount>,
}

#[derive(Debug, Default, Deserialize)]
struct KakaoAccount {
    email: Option<String>,
    profile: Option<KakaoProfile>,
}

#[derive(Debug, Default, Deserialize)]
struct KakaoProfile {
    nickname: Option<String>,
    profile_image_url: Option<String>,
}

impl KakaoUserResponse {
    fn into_profile(self) -> SocialUserProfile {
        let account = self.kakao_account.unwrap_or_default();
        let profile = account.profile.unwrap_or_default();

        SocialUserProfile {
            provider_user_id: self.id.to_string(),
            email: account.email,
            nickname: profile.nickname,
            profile_image: profile.profile_image_url,
        }
    }
}

/// Kakao 프로바이더 검증기
pub struct KakaoVerifier {
    client: reqwest::Client,
    user_info_uri: String,
}

impl KakaoVerifier {
    pub fn new(client: reqwest::Client, user_info_uri: String) -> Self {
        Self {
            client,
            user_info_uri,
        }
    }
}

#[async_trait]
impl ProviderVerifier for KakaoVerifier {
    fn provider(&self) -> AuthProvider {
        AuthProvider::Kakao
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
            .json::<KakaoUserResponse>()
            .await
            .map_err(|e| parse_error(self.provider(), e))?;

        Ok(user.into_profile())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_kakao_response() {
        let json = r#"{
            "id": 1234567,
            "kakao_account": {
                "email": "user@kakao.com",
                "profile": {
                    "nickname": "카카오유저",
                    "profile_image_url": "http://img.kakaocdn.net/p.jpg"
                }
            }
        }"#;

        let profile = serde_json::from_str::<KakaoUserResponse>(json)
            .unwrap()
            .into_profile();

        assert_eq!(profile.provider_user_id, "1234567");
        assert_eq!(profile.email.as_deref(), Some("user@kakao.com"));
        assert_eq!(profile.nickname.as_deref(), Some("카카오유저"));
        assert_eq!(
            profile.profile_image.as_deref(),
            Some("http://img.kakaocdn.net/p.jpg")
        );
    }

    #[test]
    fn test_parse_kakao_response_without_consent_items() {
        // 동의 항목을 모두 거부한 경우에도 id만으로 신원이 성립한다
        let json = r#"{"id": 1234567}"#;

        let profile = serde_json::from_str::<KakaoUserResponse>(json)
            .unwrap()
            .into_profile();

        assert_eq!(profile.provider_user_id, "1234567");
        assert_eq!(profile.email, None);
        assert_eq!(profile.nickname, None);
        assert_eq!(profile.profile_image, None);
    }
}
