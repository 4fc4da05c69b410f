//! Google 소셜 로그인 검증기
//!
//! Google userinfo API(`/oauth2/v2/userinfo`)를 호출하여 액세스 토큰을
//! 검증하고 공통 프로필로 변환합니다.

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::AuthProvider;
use crate::errors::AppResult;

use super::{parse_error, rejected_token_error, transport_error, ProviderVerifier, SocialUserProfile};

/// Google userinfo 응답
#[derive(Debug, Deserialize)]
struct GoogleUserInfo {
    id: String,
    email: Option<String>,
    name: Option<String>,
    picture: Option<String>,
}

impl GoogleUserInfo {
    fn into_profile(self) -> SocialUserProfile {
        SocialUserProfile {
            provider_user_id: self.id,
            email: self.email,
            nickname: self.name,
            profile_image: self.picture,
        }
    }
}

/// Google 프로바이더 검증기
pub struct GoogleVerifier {
    client: reqwest::Client,
    user_info_uri: String,
}

impl GoogleVerifier {
    pub fn new(client: reqwest::Client, user_info_uri: String) -> Self {
        Self {
            client,
            user_info_uri,
        }
    }
}

#[async_trait]
impl ProviderVerifier for GoogleVerifier {
    fn provider(&self) -> AuthProvider {
        AuthProvider::Google
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
            .json::<GoogleUserInfo>()
            .await
            .map_err(|e| parse_error(self.provider(), e))?;

        Ok(user.into_profile())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_google_userinfo() {
        let json = r#"{
            "id": "110248495921238986420",
            "email": "user@gmail.com",
            "verified_email": true,
            "name": "Google User",
            "picture": "https://lh3.googleusercontent.com/p.jpg"
        }"#;

        let profile = serde_json::from_str::<GoogleUserInfo>(json)
            .unwrap()
            .into_profile();

        assert_eq!(profile.provider_user_id, "110248495921238986420");
        assert_eq!(profile.email.as_deref(), Some("user@gmail.com"));
        assert_eq!(profile.nickname.as_deref(), Some("Google User"));
    }
}
