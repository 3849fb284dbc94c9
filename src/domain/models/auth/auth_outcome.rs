//! 인증 전략의 입력과 결과
//!
//! 전략은 `Result<AuthOutcome, AppError>`를 돌려주며, 세 가지 결과 중 정확히
//! 하나를 뜻합니다.
//!
//! | 결과 | 의미 |
//! |------|------|
//! | `Ok(AuthOutcome::Success(user))` | 인증 성공, 세션에 사용자를 연결 |
//! | `Ok(AuthOutcome::Failure(info))` | 인증 거절 (사유 문자열 포함) |
//! | `Err(AppError)` | 저장소 등 인프라 장애 |

use serde::Serialize;
use crate::config::AuthProvider;
use crate::domain::entities::users::user::User;
use crate::domain::models::oauth::ProviderProfile;

/// 전략에 전달되는 자격 증명
#[derive(Debug, Clone)]
pub enum Credentials {
    /// 로컬 이메일/패스워드
    Password { email: String, password: String },
    /// 외부 프로바이더에서 받은 프로필
    Profile(ProviderProfile),
}

impl Credentials {
    /// 이 자격 증명을 처리할 수 있는 프로바이더
    pub fn provider(&self) -> AuthProvider {
        match self {
            Credentials::Password { .. } => AuthProvider::Local,
            Credentials::Profile(profile) => profile.provider,
        }
    }
}

/// 인증 거절 사유
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthFailure {
    pub message: String,
}

impl AuthFailure {
    pub const UNKNOWN_USER: &'static str = "Unknown user";
    pub const INVALID_PASSWORD: &'static str = "Invalid password";

    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    pub fn unknown_user() -> Self {
        Self::new(Self::UNKNOWN_USER)
    }

    pub fn invalid_password() -> Self {
        Self::new(Self::INVALID_PASSWORD)
    }
}

/// 인증 결과 (성공 또는 거절)
#[derive(Debug, Clone, PartialEq)]
pub enum AuthOutcome {
    Success(User),
    Failure(AuthFailure),
}

impl AuthOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, AuthOutcome::Success(_))
    }
}
