//! # Authentication Configuration Module
//!
//! 인증 프로바이더, 세션 토큰(JWT), OAuth 관련 설정을 관리하는 모듈입니다.
//!
//! ## 지원하는 인증 방식
//!
//! 1. **로컬 인증**: 이메일/패스워드 기반 인증
//! 2. **GitHub / Google / LinkedIn / Twitter**: OAuth 2.0 Authorization Code 플로우
//!
//! ## 필수 환경 변수 설정
//!
//! 프로바이더마다 `<PROVIDER>_CLIENT_ID`, `<PROVIDER>_CLIENT_SECRET`,
//! `<PROVIDER>_CALLBACK_URL` 세 값을 설정합니다. `CLIENT_ID`가 없는 프로바이더는
//! 비활성화된 것으로 간주합니다.
//!
//! ```bash
//! export GITHUB_CLIENT_ID="..."
//! export GITHUB_CLIENT_SECRET="..."
//! export GITHUB_CALLBACK_URL="http://localhost:8080/api/v1/auth/github/callback"
//!
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_EXPIRATION_HOURS="24"
//! export OAUTH_STATE_TTL_MINUTES="10"
//! ```
//!
//! 엔드포인트는 `<PROVIDER>_AUTH_URI`, `<PROVIDER>_TOKEN_URI`,
//! `<PROVIDER>_PROFILE_URI`로 덮어쓸 수 있습니다.

use std::env;

/// 지원하는 인증 공급자를 나타내는 열거형
///
/// 사용자 문서의 `provider` 필드에 소문자 태그로 저장되며,
/// 인증 코디네이터가 전략(adapter)을 선택하는 키로 사용됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    /// GitHub OAuth 인증
    GitHub,
    /// Google OAuth 2.0 인증
    Google,
    /// LinkedIn (OpenID Connect) 인증
    LinkedIn,
    /// Twitter OAuth 2.0 인증. 이메일을 제공하지 않습니다.
    Twitter,
    /// 로컬 이메일/패스워드 인증
    Local,
}

impl AuthProvider {
    /// 모든 프로바이더 목록
    pub const ALL: [AuthProvider; 5] = [
        AuthProvider::GitHub,
        AuthProvider::Google,
        AuthProvider::LinkedIn,
        AuthProvider::Twitter,
        AuthProvider::Local,
    ];

    /// 문자열에서 AuthProvider를 생성합니다. (대소문자 무관)
    ///
    /// # 예제
    ///
    /// ```rust,ignore
    /// let provider = AuthProvider::from_str("github")?;
    /// assert_eq!(provider, AuthProvider::GitHub);
    /// ```
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "github" => Ok(AuthProvider::GitHub),
            "google" => Ok(AuthProvider::Google),
            "linkedin" => Ok(AuthProvider::LinkedIn),
            "twitter" => Ok(AuthProvider::Twitter),
            "local" => Ok(AuthProvider::Local),
            _ => Err(format!("Unsupported auth provider: {}", s)),
        }
    }

    /// AuthProvider를 소문자 문자열로 변환합니다.
    ///
    /// 사용자 문서에서 프로필 스냅샷이 저장되는 필드 이름이기도 합니다.
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::GitHub => "github",
            AuthProvider::Google => "google",
            AuthProvider::LinkedIn => "linkedin",
            AuthProvider::Twitter => "twitter",
            AuthProvider::Local => "local",
        }
    }

    /// 외부 프로바이더인지 확인합니다.
    pub fn is_external(&self) -> bool {
        !matches!(self, AuthProvider::Local)
    }

    /// 프로필 스냅샷 안에서 조회 키로 쓰이는 필드 이름
    ///
    /// Twitter는 숫자 id 대신 문자열 `id_str`을 조회 키로 사용합니다.
    /// 로컬 계정은 스냅샷이 없으므로 `None`입니다.
    pub fn identity_key(&self) -> Option<&'static str> {
        match self {
            AuthProvider::GitHub | AuthProvider::Google | AuthProvider::LinkedIn => Some("id"),
            AuthProvider::Twitter => Some("id_str"),
            AuthProvider::Local => None,
        }
    }

    /// 사용자 컬렉션에서의 조회 필드 경로 (`github.id`, `twitter.id_str`, `email`)
    pub fn lookup_field(&self) -> String {
        match self.identity_key() {
            Some(key) => format!("{}.{}", self.as_str(), key),
            None => "email".to_string(),
        }
    }

    /// 외부 프로필이 최소 하나의 이메일을 가져야 하는지 여부
    pub fn requires_email(&self) -> bool {
        matches!(
            self,
            AuthProvider::GitHub | AuthProvider::Google | AuthProvider::LinkedIn
        )
    }
}

impl std::fmt::Display for AuthProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 세션 토큰(JWT) 설정
pub struct JwtConfig;

impl JwtConfig {
    /// JWT 서명에 사용할 비밀키를 반환합니다.
    ///
    /// 설정되지 않은 경우 개발용 기본값을 사용하며 경고 로그를 남깁니다.
    pub fn secret() -> String {
        env::var("JWT_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                "your-secret-key".to_string()
            })
    }

    /// 세션 토큰의 만료 시간 (시간 단위, 기본값 24)
    pub fn expiration_hours() -> i64 {
        env::var("JWT_EXPIRATION_HOURS")
            .unwrap_or_else(|_| "24".to_string())
            .parse()
            .unwrap_or(24)
    }
}

/// OAuth 공통 설정
pub struct OAuthConfig;

impl OAuthConfig {
    /// 발급한 state 값이 유효한 시간 (분 단위, 기본값 10)
    ///
    /// 사용자가 프로바이더 로그인 페이지에서 돌아오기까지 허용되는 시간입니다.
    pub fn state_ttl_minutes() -> u64 {
        env::var("OAUTH_STATE_TTL_MINUTES")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .unwrap_or(10)
    }
}

/// 프로바이더 하나의 OAuth 2.0 클라이언트 설정
///
/// 클라이언트 자격 증명과 콜백 URL, 프로바이더 엔드포인트와 스코프를 담습니다.
#[derive(Debug, Clone, PartialEq)]
pub struct OAuthProviderConfig {
    pub provider: AuthProvider,
    pub client_id: String,
    pub client_secret: String,
    pub callback_url: String,
    pub auth_uri: String,
    pub token_uri: String,
    pub profile_uri: String,
    /// GitHub 전용: 프로필에 공개 이메일이 없을 때 조회하는 엔드포인트
    pub emails_uri: Option<String>,
    pub scope: String,
    /// PKCE(S256) 사용 여부 (Twitter 필수)
    pub use_pkce: bool,
    /// 토큰 교환 시 클라이언트 인증을 HTTP Basic 헤더로 보낼지 여부
    pub basic_auth: bool,
}

impl OAuthProviderConfig {
    /// 프로바이더별 기본 엔드포인트로 설정을 만듭니다.
    ///
    /// 로컬 프로바이더는 OAuth 설정이 없으므로 `None`을 반환합니다.
    pub fn with_defaults(
        provider: AuthProvider,
        client_id: String,
        client_secret: String,
        callback_url: String,
    ) -> Option<Self> {
        let (auth_uri, token_uri, profile_uri, emails_uri, scope, use_pkce, basic_auth) = match provider {
            AuthProvider::GitHub => (
                "https://github.com/login/oauth/authorize",
                "https://github.com/login/oauth/access_token",
                "https://api.github.com/user",
                Some("https://api.github.com/user/emails"),
                "user:email",
                false,
                false,
            ),
            AuthProvider::Google => (
                "https://accounts.google.com/o/oauth2/auth",
                "https://oauth2.googleapis.com/token",
                "https://www.googleapis.com/oauth2/v2/userinfo",
                None,
                "openid email profile",
                false,
                false,
            ),
            AuthProvider::LinkedIn => (
                "https://www.linkedin.com/oauth/v2/authorization",
                "https://www.linkedin.com/oauth/v2/accessToken",
                "https://api.linkedin.com/v2/userinfo",
                None,
                "openid profile email",
                false,
                false,
            ),
            AuthProvider::Twitter => (
                "https://twitter.com/i/oauth2/authorize",
                "https://api.twitter.com/2/oauth2/token",
                "https://api.twitter.com/2/users/me",
                None,
                "users.read tweet.read",
                true,
                true,
            ),
            AuthProvider::Local => return None,
        };

        Some(Self {
            provider,
            client_id,
            client_secret,
            callback_url,
            auth_uri: auth_uri.to_string(),
            token_uri: token_uri.to_string(),
            profile_uri: profile_uri.to_string(),
            emails_uri: emails_uri.map(str::to_string),
            scope: scope.to_string(),
            use_pkce,
            basic_auth,
        })
    }

    /// 환경 변수에서 프로바이더 설정을 읽습니다.
    ///
    /// `<PROVIDER>_CLIENT_ID`가 없으면 해당 프로바이더는 비활성화된 것으로 보고
    /// `None`을 반환합니다.
    pub fn from_env(provider: AuthProvider) -> Option<Self> {
        let prefix = provider.as_str().to_uppercase();
        let var = |name: &str| env::var(format!("{}_{}", prefix, name)).ok();

        let client_id = var("CLIENT_ID")?;
        let client_secret = var("CLIENT_SECRET").unwrap_or_else(|| {
            log::warn!("{}_CLIENT_SECRET not set", prefix);
            String::new()
        });
        let callback_url = var("CALLBACK_URL").unwrap_or_else(|| {
            format!("http://localhost:8080/api/v1/auth/{}/callback", provider.as_str())
        });

        let mut config = Self::with_defaults(provider, client_id, client_secret, callback_url)?;
        if let Some(uri) = var("AUTH_URI") {
            config.auth_uri = uri;
        }
        if let Some(uri) = var("TOKEN_URI") {
            config.token_uri = uri;
        }
        if let Some(uri) = var("PROFILE_URI") {
            config.profile_uri = uri;
        }
        Some(config)
    }
}
