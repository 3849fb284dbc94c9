use serde::{Deserialize, Serialize};

/// 프로바이더 토큰 엔드포인트 응답
///
/// GitHub는 `Accept: application/json` 헤더를 줘야 JSON으로 응답합니다.
#[derive(Debug, Deserialize)]
pub struct OAuthTokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub scope: Option<String>,
}

/// 로그인 URL 발급 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OAuthLoginUrlResponse {
    pub login_url: String,
    pub state: String,
}
