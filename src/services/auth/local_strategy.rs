//! 로컬(이메일/패스워드) 전략

use std::sync::Arc;
use async_trait::async_trait;
use crate::{
    config::AuthProvider,
    domain::models::auth::{AuthFailure, AuthOutcome, Credentials},
    errors::AppError,
    repositories::users::{UserCriteria, UserStore},
};
use super::strategy::{mismatched_credentials, AuthStrategy};

pub struct LocalStrategy {
    users: Arc<dyn UserStore>,
}

impl LocalStrategy {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl AuthStrategy for LocalStrategy {
    fn provider(&self) -> AuthProvider {
        AuthProvider::Local
    }

    async fn authenticate(&self, credentials: Credentials) -> Result<AuthOutcome, AppError> {
        let (email, password) = match credentials {
            Credentials::Password { email, password } => (email, password),
            other => return Err(mismatched_credentials(self.provider(), &other)),
        };

        let user = match self.users.find_one(&UserCriteria::Email(email)).await? {
            Some(user) => user,
            None => return Ok(AuthOutcome::Failure(AuthFailure::unknown_user())),
        };

        if !user.verify_password(&password)? {
            return Ok(AuthOutcome::Failure(AuthFailure::invalid_password()));
        }

        Ok(AuthOutcome::Success(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::user::User;
    use crate::repositories::memory::InMemoryUserStore;

    fn store_with_jane() -> Arc<InMemoryUserStore> {
        let hash = bcrypt::hash("correct horse", 4).unwrap();
        Arc::new(InMemoryUserStore::with_users(vec![User::new_local(
            "Jane".to_string(),
            "jane@example.com".to_string(),
            "jane".to_string(),
            hash,
        )]))
    }

    fn password(email: &str, password: &str) -> Credentials {
        Credentials::Password {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[actix_web::test]
    async fn test_correct_password_succeeds() {
        let strategy = LocalStrategy::new(store_with_jane());

        let outcome = strategy
            .authenticate(password("jane@example.com", "correct horse"))
            .await
            .unwrap();

        match outcome {
            AuthOutcome::Success(user) => assert_eq!(user.email, "jane@example.com"),
            other => panic!("expected success, got {:?}", other),
        }
    }

    #[actix_web::test]
    async fn test_unknown_email_is_soft_failure() {
        let strategy = LocalStrategy::new(store_with_jane());

        let outcome = strategy
            .authenticate(password("nobody@example.com", "correct horse"))
            .await
            .unwrap();

        assert_eq!(outcome, AuthOutcome::Failure(AuthFailure::new("Unknown user")));
    }

    #[actix_web::test]
    async fn test_wrong_password_is_soft_failure() {
        let strategy = LocalStrategy::new(store_with_jane());

        let outcome = strategy
            .authenticate(password("jane@example.com", "battery staple"))
            .await
            .unwrap();

        assert_eq!(outcome, AuthOutcome::Failure(AuthFailure::new("Invalid password")));
    }

    #[actix_web::test]
    async fn test_external_account_cannot_log_in_with_password() {
        use mongodb::bson::doc;

        let store = Arc::new(InMemoryUserStore::with_users(vec![User::new_external(
            AuthProvider::Google,
            "G".to_string(),
            "g@example.com".to_string(),
            String::new(),
            doc! { "id": "g-1" },
        )]));
        let strategy = LocalStrategy::new(store);

        let outcome = strategy
            .authenticate(password("g@example.com", "anything"))
            .await
            .unwrap();

        assert_eq!(outcome, AuthOutcome::Failure(AuthFailure::invalid_password()));
    }
}
