//! 메모리 저장소
//!
//! MongoDB/Redis 없이 서비스와 핸들러를 검증하기 위한 구현입니다. 조회 의미는
//! 각 기준의 `matches`를 사용하므로 Mongo 필터와 같은 결과를 냅니다.

use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use crate::{
    config::AuthProvider,
    domain::entities::{articles::article::Article, users::user::User},
    domain::models::oauth::PendingAuthorization,
    errors::AppError,
};
use super::{
    articles::{ArticleCriteria, ArticleStore},
    oauth::StateStore,
    users::{UserCriteria, UserStore},
};

fn poisoned<T>(_: T) -> AppError {
    AppError::InternalError("in-memory store lock poisoned".to_string())
}

#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: Vec<User>) -> Self {
        let users = users
            .into_iter()
            .map(|mut user| {
                user.id.get_or_insert_with(ObjectId::new);
                user
            })
            .collect();
        Self { users: RwLock::new(users) }
    }

    pub fn len(&self) -> usize {
        self.users.read().map(|users| users.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_one(&self, criteria: &UserCriteria) -> Result<Option<User>, AppError> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users.iter().find(|user| criteria.matches(user)).cloned())
    }

    async fn create(&self, mut user: User) -> Result<User, AppError> {
        let mut users = self.users.write().map_err(poisoned)?;

        // unique sparse 인덱스와 같은 제약
        for provider in AuthProvider::ALL.into_iter().filter(AuthProvider::is_external) {
            if let Some(id) = user.identity_id(provider) {
                if users.iter().any(|other| other.identity_id(provider) == Some(id)) {
                    return Err(AppError::DatabaseError(format!(
                        "duplicate key: {}",
                        provider.lookup_field()
                    )));
                }
            }
        }

        user.id = Some(ObjectId::new());
        users.push(user.clone());
        Ok(user)
    }
}

#[derive(Default)]
pub struct InMemoryArticleStore {
    articles: RwLock<Vec<Article>>,
}

impl InMemoryArticleStore {
    pub fn with_articles(articles: Vec<Article>) -> Self {
        Self { articles: RwLock::new(articles) }
    }
}

#[async_trait]
impl ArticleStore for InMemoryArticleStore {
    async fn count(&self, criteria: &ArticleCriteria) -> Result<u64, AppError> {
        let articles = self.articles.read().map_err(poisoned)?;
        Ok(articles.iter().filter(|article| criteria.matches(article)).count() as u64)
    }

    async fn find_page(
        &self,
        criteria: &ArticleCriteria,
        page: u64,
        limit: u64,
    ) -> Result<Vec<Article>, AppError> {
        let articles = self.articles.read().map_err(poisoned)?;

        let mut matched: Vec<&Article> = articles
            .iter()
            .filter(|article| criteria.matches(article))
            .collect();
        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let skip = usize::try_from(page.saturating_mul(limit)).unwrap_or(usize::MAX);
        let take = usize::try_from(limit).unwrap_or(usize::MAX);
        Ok(matched.into_iter().skip(skip).take(take).cloned().collect())
    }
}

/// TTL을 흉내 내는 state 저장소
#[derive(Default)]
pub struct InMemoryStateStore {
    entries: RwLock<HashMap<String, (PendingAuthorization, Instant)>>,
}

impl InMemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StateStore for InMemoryStateStore {
    async fn save(
        &self,
        state: &str,
        pending: &PendingAuthorization,
        ttl_seconds: u64,
    ) -> Result<(), AppError> {
        let expires_at = Instant::now() + Duration::from_secs(ttl_seconds);
        self.entries
            .write()
            .map_err(poisoned)?
            .insert(state.to_string(), (pending.clone(), expires_at));
        Ok(())
    }

    async fn take(&self, state: &str) -> Result<Option<PendingAuthorization>, AppError> {
        let entry = self.entries.write().map_err(poisoned)?.remove(state);
        Ok(entry
            .filter(|(_, expires_at)| *expires_at > Instant::now())
            .map(|(pending, _)| pending))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{doc, DateTime};

    #[actix_web::test]
    async fn test_duplicate_identity_is_rejected() {
        let store = InMemoryUserStore::new();
        let user = User::new_external(
            AuthProvider::Twitter,
            "Jack".to_string(),
            String::new(),
            "jack".to_string(),
            doc! { "id_str": "12" },
        );

        store.create(user.clone()).await.unwrap();
        let err = store.create(user).await.unwrap_err();

        assert!(matches!(err, AppError::DatabaseError(_)));
        assert_eq!(store.len(), 1);
    }

    #[actix_web::test]
    async fn test_find_page_is_newest_first() {
        let articles = (0..5)
            .map(|i| {
                let mut article = Article::new(format!("a{}", i), String::new(), vec!["rust".to_string()]);
                article.created_at = DateTime::from_millis(1_000 * i);
                article
            })
            .collect();
        let store = InMemoryArticleStore::with_articles(articles);
        let criteria = ArticleCriteria::Tag("rust".to_string());

        let first: Vec<String> = store
            .find_page(&criteria, 0, 2)
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.title)
            .collect();
        assert_eq!(first, vec!["a4", "a3"]);

        let last = store.find_page(&criteria, 2, 2).await.unwrap();
        assert_eq!(last.len(), 1);
        assert_eq!(last[0].title, "a0");
    }

    #[actix_web::test]
    async fn test_state_can_be_taken_once() {
        let store = InMemoryStateStore::new();
        let pending = PendingAuthorization {
            provider: AuthProvider::GitHub,
            code_verifier: None,
        };

        store.save("s1", &pending, 60).await.unwrap();
        assert_eq!(store.take("s1").await.unwrap(), Some(pending));
        assert_eq!(store.take("s1").await.unwrap(), None);
    }

    #[actix_web::test]
    async fn test_expired_state_is_gone() {
        let store = InMemoryStateStore::new();
        let pending = PendingAuthorization {
            provider: AuthProvider::Google,
            code_verifier: None,
        };

        store.save("s2", &pending, 0).await.unwrap();
        assert_eq!(store.take("s2").await.unwrap(), None);
    }
}
