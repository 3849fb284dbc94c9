//! # OAuth 2.0 Authorization Code 클라이언트
//!
//! 외부 프로바이더 로그인의 앞부분을 담당합니다. 결과는 정규화된
//! [`ProviderProfile`]이며, 사용자 조회/생성은 전략이 합니다.
//!
//! ```text
//! Client                      Backend                          Provider
//!   │ GET /auth/{p}/login        │                                 │
//!   │───────────────────────────▶│ state(+PKCE) 생성, 저장 (TTL)    │
//!   │◀── login_url, state ───────│                                 │
//!   │────────────── 사용자 동의 ─────────────────────────────────────▶│
//!   │ GET /auth/{p}/callback?code&state                            │
//!   │───────────────────────────▶│ state 소비 (1회)                │
//!   │                            │── code 교환 ───────────────────▶│
//!   │                            │── 프로필 조회 ─────────────────▶│
//!   │                            │ ProviderProfile로 정규화        │
//! ```
//!
//! Twitter는 OAuth 2.0 + PKCE(S256)를 쓰며 토큰 교환 시 클라이언트 인증을
//! HTTP Basic 헤더로 보냅니다.

use std::collections::HashMap;
use std::sync::Arc;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde_json::Value;
use sha2::{Digest, Sha256};
use uuid::Uuid;
use crate::{
    config::{AuthProvider, OAuthConfig, OAuthProviderConfig},
    domain::dto::users::response::{OAuthLoginUrlResponse, OAuthTokenResponse},
    domain::models::oauth::{PendingAuthorization, ProviderProfile},
    errors::AppError,
    repositories::oauth::StateStore,
};

pub struct OAuthClient {
    providers: HashMap<AuthProvider, OAuthProviderConfig>,
    states: Arc<dyn StateStore>,
    http: reqwest::Client,
    state_ttl_seconds: u64,
}

impl OAuthClient {
    pub fn new(providers: Vec<OAuthProviderConfig>, states: Arc<dyn StateStore>) -> Self {
        Self {
            providers: providers
                .into_iter()
                .map(|config| (config.provider, config))
                .collect(),
            states,
            http: reqwest::Client::new(),
            state_ttl_seconds: OAuthConfig::state_ttl_minutes() * 60,
        }
    }

    /// 환경 변수에 클라이언트 ID가 설정된 프로바이더만 활성화합니다.
    pub fn from_env(states: Arc<dyn StateStore>) -> Self {
        let providers: Vec<OAuthProviderConfig> = AuthProvider::ALL
            .into_iter()
            .filter_map(OAuthProviderConfig::from_env)
            .collect();

        for config in &providers {
            log::info!("🔑 OAuth 프로바이더 활성화: {}", config.provider);
        }

        Self::new(providers, states)
    }

    fn config(&self, provider: AuthProvider) -> Result<&OAuthProviderConfig, AppError> {
        self.providers.get(&provider).ok_or_else(|| {
            AppError::NotFound(format!("설정되지 않은 OAuth 프로바이더입니다: {}", provider))
        })
    }

    /// 프로바이더 로그인 URL 생성
    ///
    /// 새 state 값을 만들어 저장소에 TTL과 함께 저장합니다. PKCE를 쓰는
    /// 프로바이더는 code_verifier도 함께 저장합니다.
    pub async fn login_url(&self, provider: AuthProvider) -> Result<OAuthLoginUrlResponse, AppError> {
        let config = self.config(provider)?;
        let state = Uuid::new_v4().simple().to_string();

        let code_verifier = config.use_pkce.then(generate_code_verifier);

        let mut params = vec![
            ("response_type", "code".to_string()),
            ("client_id", config.client_id.clone()),
            ("redirect_uri", config.callback_url.clone()),
            ("scope", config.scope.clone()),
            ("state", state.clone()),
        ];
        if let Some(verifier) = &code_verifier {
            params.push(("code_challenge", code_challenge(verifier)));
            params.push(("code_challenge_method", "S256".to_string()));
        }

        let pending = PendingAuthorization { provider, code_verifier };
        self.states.save(&state, &pending, self.state_ttl_seconds).await?;

        let query_string = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        let login_url = format!("{}?{}", config.auth_uri, query_string);

        Ok(OAuthLoginUrlResponse { login_url, state })
    }

    /// 콜백 처리: state 확인, code 교환, 프로필 조회
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - state가 없거나 만료됨, 다른 프로바이더의 state
    /// * `AppError::ExternalServiceError` - 프로바이더 요청 실패
    /// * `AppError::ValidationError` - 프로필 필수 필드 누락
    pub async fn fetch_profile(
        &self,
        provider: AuthProvider,
        code: &str,
        state: &str,
    ) -> Result<ProviderProfile, AppError> {
        let config = self.config(provider)?;

        let pending = self
            .states
            .take(state)
            .await?
            .ok_or_else(|| AppError::AuthenticationError("유효하지 않거나 만료된 OAuth state".to_string()))?;

        if pending.provider != provider {
            return Err(AppError::AuthenticationError(format!(
                "{} 로그인으로 발급된 state입니다",
                pending.provider
            )));
        }

        let token = self
            .exchange_code_for_token(config, code, pending.code_verifier.as_deref())
            .await?;

        let profile = self.get_json(config, &config.profile_uri, &token.access_token).await?;
        let emails = match &config.emails_uri {
            Some(uri) => Some(self.get_json(config, uri, &token.access_token).await?),
            None => None,
        };

        Ok(ProviderProfile::from_provider_json(provider, profile, emails)?)
    }

    async fn exchange_code_for_token(
        &self,
        config: &OAuthProviderConfig,
        code: &str,
        code_verifier: Option<&str>,
    ) -> Result<OAuthTokenResponse, AppError> {
        let mut params = vec![
            ("code", code),
            ("redirect_uri", config.callback_url.as_str()),
            ("grant_type", "authorization_code"),
        ];
        if let Some(verifier) = code_verifier {
            params.push(("code_verifier", verifier));
        }

        let mut request = self
            .http
            .post(&config.token_uri)
            .header(reqwest::header::ACCEPT, "application/json");

        if config.basic_auth {
            request = request.basic_auth(&config.client_id, Some(&config.client_secret));
            params.push(("client_id", config.client_id.as_str()));
        } else {
            params.push(("client_id", config.client_id.as_str()));
            params.push(("client_secret", config.client_secret.as_str()));
        }

        let response = request
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("{} 토큰 요청 실패: {}", config.provider, e)))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "{} 토큰 교환 실패: {}",
                config.provider, error_text
            )));
        }

        response
            .json::<OAuthTokenResponse>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("{} 토큰 응답 파싱 실패: {}", config.provider, e)))
    }

    async fn get_json(
        &self,
        config: &OAuthProviderConfig,
        uri: &str,
        access_token: &str,
    ) -> Result<Value, AppError> {
        // GitHub API는 User-Agent가 없으면 403을 돌려준다
        let response = self
            .http
            .get(uri)
            .bearer_auth(access_token)
            .header(reqwest::header::ACCEPT, "application/json")
            .header(reqwest::header::USER_AGENT, "tagboard")
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("{} 사용자 정보 요청 실패: {}", config.provider, e)))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "{} 사용자 정보 조회 실패: {}",
                config.provider, error_text
            )));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("{} 사용자 정보 파싱 실패: {}", config.provider, e)))
    }
}

/// 64자 code_verifier (RFC 7636 허용 범위 43~128자)
fn generate_code_verifier() -> String {
    format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple())
}

/// S256 code_challenge
fn code_challenge(verifier: &str) -> String {
    URL_SAFE_NO_PAD.encode(Sha256::digest(verifier.as_bytes()))
}
