//! # 외부 프로바이더 전략
//!
//! GitHub, Google, LinkedIn, Twitter 전략은 같은 흐름을 공유합니다.
//!
//! 1. 프로필의 조회 키로 사용자를 찾는다 (`github.id`, `twitter.id_str` 등)
//! 2. 있으면 그 사용자를 그대로 돌려준다
//! 3. 없으면 프로필로 새 사용자를 만들어 저장한다
//!
//! 프로바이더마다 다른 것은 새 사용자의 필드 매핑뿐입니다.
//!
//! | 프로바이더 | name | email | username |
//! |------------|------|-------|----------|
//! | GitHub | 표시 이름 | 첫 이메일 | 로그인 아이디 |
//! | Google | 표시 이름 | 첫 이메일 | (없으면 빈 값) |
//! | LinkedIn | 표시 이름 | 첫 이메일 | 첫 이메일 |
//! | Twitter | 표시 이름 | 빈 값 | 핸들 |
//!
//! 이메일이 같더라도 다른 프로바이더 계정과 병합하지 않습니다.

use std::sync::Arc;
use async_trait::async_trait;
use crate::{
    config::AuthProvider,
    domain::entities::users::user::User,
    domain::models::auth::{AuthOutcome, Credentials},
    domain::models::oauth::ProviderProfile,
    errors::AppError,
    repositories::users::{UserCriteria, UserStore},
};
use super::strategy::{mismatched_credentials, AuthStrategy};

pub struct ProfileStrategy {
    provider: AuthProvider,
    users: Arc<dyn UserStore>,
}

impl ProfileStrategy {
    pub fn github(users: Arc<dyn UserStore>) -> Self {
        Self { provider: AuthProvider::GitHub, users }
    }

    pub fn google(users: Arc<dyn UserStore>) -> Self {
        Self { provider: AuthProvider::Google, users }
    }

    pub fn linkedin(users: Arc<dyn UserStore>) -> Self {
        Self { provider: AuthProvider::LinkedIn, users }
    }

    pub fn twitter(users: Arc<dyn UserStore>) -> Self {
        Self { provider: AuthProvider::Twitter, users }
    }

    /// 처음 로그인한 프로필로 저장할 사용자를 만듭니다.
    fn new_user(&self, profile: &ProviderProfile) -> Result<User, AppError> {
        let username = profile.username.clone().unwrap_or_default();

        let (email, username) = match self.provider {
            AuthProvider::GitHub | AuthProvider::Google => {
                (profile.primary_email()?.to_string(), username)
            }
            AuthProvider::LinkedIn => {
                let email = profile.primary_email()?.to_string();
                (email.clone(), email)
            }
            AuthProvider::Twitter => (String::new(), username),
            AuthProvider::Local => return Err(mismatched_credentials(
                self.provider,
                &Credentials::Profile(profile.clone()),
            )),
        };

        Ok(User::new_external(
            self.provider,
            profile.display_name.clone(),
            email,
            username,
            profile.identity_document()?,
        ))
    }
}

#[async_trait]
impl AuthStrategy for ProfileStrategy {
    fn provider(&self) -> AuthProvider {
        self.provider
    }

    async fn authenticate(&self, credentials: Credentials) -> Result<AuthOutcome, AppError> {
        let profile = match credentials {
            Credentials::Profile(profile) if profile.provider == self.provider => profile,
            other => return Err(mismatched_credentials(self.provider, &other)),
        };
        profile.validate()?;

        let criteria = UserCriteria::ProviderId {
            provider: self.provider,
            id: profile.lookup_id()?,
        };

        if let Some(user) = self.users.find_one(&criteria).await? {
            return Ok(AuthOutcome::Success(user));
        }

        let user = self.users.create(self.new_user(&profile)?).await?;
        log::info!(
            "✅ 새 {} 사용자 생성: {} ({})",
            self.provider,
            user.id_string().unwrap_or_default(),
            profile.id
        );

        Ok(AuthOutcome::Success(user))
    }
}
