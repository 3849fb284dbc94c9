//! # 인증 코디네이터
//!
//! 프로바이더 태그로 전략을 골라 호출하고 결과를 기록합니다. 전략 목록은
//! 애플리케이션 컨텍스트를 만들 때 한 번 등록되며 이후에는 읽기만 합니다.
//!
//! 로깅 규칙 (모든 프로바이더 공통):
//!
//! - 성공: `info`
//! - 거절: `warn` (사유 포함)
//! - 저장소/인프라 장애: `error`

use std::collections::HashMap;
use std::sync::Arc;
use crate::{
    config::AuthProvider,
    domain::models::auth::{AuthOutcome, Credentials},
    errors::AppError,
    repositories::users::UserStore,
};
use super::{local_strategy::LocalStrategy, profile_strategy::ProfileStrategy, strategy::AuthStrategy};

#[derive(Default)]
pub struct Authenticator {
    strategies: HashMap<AuthProvider, Arc<dyn AuthStrategy>>,
}

impl Authenticator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 다섯 가지 기본 전략을 모두 등록합니다.
    pub fn with_default_strategies(users: Arc<dyn UserStore>) -> Self {
        Self::new()
            .register(Arc::new(LocalStrategy::new(users.clone())))
            .register(Arc::new(ProfileStrategy::github(users.clone())))
            .register(Arc::new(ProfileStrategy::google(users.clone())))
            .register(Arc::new(ProfileStrategy::linkedin(users.clone())))
            .register(Arc::new(ProfileStrategy::twitter(users)))
    }

    /// 전략 등록. 같은 프로바이더가 이미 있으면 교체합니다.
    pub fn register(mut self, strategy: Arc<dyn AuthStrategy>) -> Self {
        self.strategies.insert(strategy.provider(), strategy);
        self
    }

    pub fn supports(&self, provider: AuthProvider) -> bool {
        self.strategies.contains_key(&provider)
    }

    pub async fn authenticate(&self, credentials: Credentials) -> Result<AuthOutcome, AppError> {
        let provider = credentials.provider();
        let strategy = self.strategies.get(&provider).ok_or_else(|| {
            AppError::NotFound(format!("등록되지 않은 인증 프로바이더입니다: {}", provider))
        })?;

        match strategy.authenticate(credentials).await {
            Ok(AuthOutcome::Success(user)) => {
                log::info!("🔐 {} 로그인 성공: {}", provider, user.id_string().unwrap_or_default());
                Ok(AuthOutcome::Success(user))
            }
            Ok(AuthOutcome::Failure(failure)) => {
                log::warn!("{} 로그인 거절: {}", provider, failure.message);
                Ok(AuthOutcome::Failure(failure))
            }
            Err(e) => {
                log::error!("{} 인증 실패: {}", provider, e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use crate::domain::entities::users::user::User;
    use crate::domain::models::oauth::ProviderProfile;
    use crate::repositories::memory::InMemoryUserStore;
    use crate::repositories::users::UserCriteria;

    struct UnavailableStore;

    #[async_trait]
    impl UserStore for UnavailableStore {
        async fn find_one(&self, _: &UserCriteria) -> Result<Option<User>, AppError> {
            Err(AppError::DatabaseError("connection refused".to_string()))
        }

        async fn create(&self, _: User) -> Result<User, AppError> {
            Err(AppError::DatabaseError("connection refused".to_string()))
        }
    }

    fn google_profile() -> Credentials {
        Credentials::Profile(
            ProviderProfile::from_provider_json(
                AuthProvider::Google,
                json!({ "id": "g-1", "name": "G", "email": "g@example.com" }),
                None,
            )
            .unwrap(),
        )
    }

    #[test]
    fn test_default_strategies_cover_every_provider() {
        let authenticator = Authenticator::with_default_strategies(Arc::new(InMemoryUserStore::new()));

        for provider in AuthProvider::ALL {
            assert!(authenticator.supports(provider), "{} missing", provider);
        }
    }

    #[actix_web::test]
    async fn test_unregistered_provider_is_not_found() {
        let authenticator = Authenticator::new()
            .register(Arc::new(LocalStrategy::new(Arc::new(InMemoryUserStore::new()))));

        let err = authenticator.authenticate(google_profile()).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[actix_web::test]
    async fn test_dispatches_by_provider() {
        let store = Arc::new(InMemoryUserStore::new());
        let authenticator = Authenticator::with_default_strategies(store.clone());

        let outcome = authenticator.authenticate(google_profile()).await.unwrap();

        let AuthOutcome::Success(user) = outcome else {
            panic!("expected success");
        };
        assert_eq!(user.provider, AuthProvider::Google);
        assert_eq!(store.len(), 1);
    }

    #[actix_web::test]
    async fn test_store_failure_is_hard_failure_for_every_provider() {
        let authenticator = Authenticator::with_default_strategies(Arc::new(UnavailableStore));

        let local = authenticator
            .authenticate(Credentials::Password {
                email: "a@example.com".to_string(),
                password: "pw".to_string(),
            })
            .await;
        let external = authenticator.authenticate(google_profile()).await;

        assert!(matches!(local, Err(AppError::DatabaseError(_))));
        assert!(matches!(external, Err(AppError::DatabaseError(_))));
    }
}
