//! # 사용자 리포지토리 구현
//!
//! 서비스는 [`UserStore`] trait에만 의존하고, 운영에서는 MongoDB 구현인
//! [`MongoUserRepository`]가, 테스트에서는 메모리 구현이 주입됩니다.
//!
//! ## 조회 기준
//!
//! | 기준 | MongoDB 필터 |
//! |------|--------------|
//! | `Email` | `{ "email": ... }` |
//! | `ProviderId` | `{ "github.id": 583231 }`, `{ "twitter.id_str": "12" }` 등 |
//! | `Id` | `{ "_id": ObjectId }` |
//!
//! 사용자는 이 서비스에서 수정/삭제되지 않으므로 `find_one`과 `create`만 있습니다.

use std::sync::Arc;
use async_trait::async_trait;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    options::IndexOptions,
    Collection, IndexModel,
};
use crate::{
    config::AuthProvider,
    db::Database,
    domain::entities::users::user::User,
    domain::models::oauth::ProviderId,
    errors::AppError,
};

/// 사용자 조회 기준
#[derive(Debug, Clone, PartialEq)]
pub enum UserCriteria {
    /// 로컬 로그인 식별자
    Email(String),
    /// 외부 프로바이더의 프로필 id
    ProviderId { provider: AuthProvider, id: ProviderId },
    /// 세션 토큰의 `sub`
    Id(ObjectId),
}

impl UserCriteria {
    /// MongoDB 필터 문서로 변환합니다.
    pub fn to_filter(&self) -> Document {
        match self {
            UserCriteria::Email(email) => doc! { "email": email },
            UserCriteria::ProviderId { provider, id } => {
                let mut filter = Document::new();
                filter.insert(provider.lookup_field(), id.to_bson());
                filter
            }
            UserCriteria::Id(id) => doc! { "_id": *id },
        }
    }

    /// 메모리 저장소에서 같은 의미로 비교할 때 사용합니다.
    #[cfg(test)]
    pub fn matches(&self, user: &User) -> bool {
        match self {
            UserCriteria::Email(email) => &user.email == email,
            UserCriteria::ProviderId { provider, id } => {
                user.identity_id(*provider) == Some(&id.to_bson())
            }
            UserCriteria::Id(id) => user.id.as_ref() == Some(id),
        }
    }
}

/// 사용자 저장소
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 기준에 맞는 사용자 한 명을 찾습니다.
    async fn find_one(&self, criteria: &UserCriteria) -> Result<Option<User>, AppError>;

    /// 사용자를 저장하고 ID가 채워진 사용자를 돌려줍니다.
    async fn create(&self, user: User) -> Result<User, AppError>;
}

/// MongoDB `users` 컬렉션 리포지토리
pub struct MongoUserRepository {
    db: Arc<Database>,
}

impl MongoUserRepository {
    pub const COLLECTION: &'static str = "users";

    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<User> {
        self.db.get_database().collection::<User>(Self::COLLECTION)
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 1. `email` 일반 인덱스 (로컬 로그인 조회)
    /// 2. 프로바이더별 조회 키의 unique + sparse 인덱스
    ///
    /// 조회 후 생성 사이의 경합으로 같은 프로필이 두 번 저장되려 하면 두 번째
    /// insert가 unique 인덱스에 막혀 `DatabaseError`가 됩니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .name("email_lookup".to_string())
                .build())
            .build();

        let mut indexes = vec![email_index];
        for provider in AuthProvider::ALL.into_iter().filter(AuthProvider::is_external) {
            let field = provider.lookup_field();
            let mut keys = Document::new();
            keys.insert(field.clone(), 1);

            indexes.push(
                IndexModel::builder()
                    .keys(keys)
                    .options(IndexOptions::builder()
                        .unique(true)
                        .sparse(true)
                        .name(format!("{}_unique", field.replace('.', "_")))
                        .build())
                    .build(),
            );
        }

        self.collection().create_indexes(indexes).await?;

        Ok(())
    }
}

#[async_trait]
impl UserStore for MongoUserRepository {
    async fn find_one(&self, criteria: &UserCriteria) -> Result<Option<User>, AppError> {
        self.collection()
            .find_one(criteria.to_filter())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn create(&self, mut user: User) -> Result<User, AppError> {
        let result = self.collection()
            .insert_one(&user)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::DatabaseError("inserted id is not an ObjectId".to_string()))?;
        user.id = Some(id);

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::Bson;

    #[test]
    fn test_provider_filters_use_typed_lookup_key() {
        let github = UserCriteria::ProviderId {
            provider: AuthProvider::GitHub,
            id: ProviderId::Numeric(583231),
        };
        assert_eq!(github.to_filter().get("github.id"), Some(&Bson::Int64(583231)));

        let twitter = UserCriteria::ProviderId {
            provider: AuthProvider::Twitter,
            id: ProviderId::Text("12".to_string()),
        };
        assert_eq!(twitter.to_filter().get_str("twitter.id_str").unwrap(), "12");

        let email = UserCriteria::Email("a@example.com".to_string());
        assert_eq!(email.to_filter(), doc! { "email": "a@example.com" });
    }

    #[test]
    fn test_matches_agrees_with_stored_snapshot() {
        let user = User::new_external(
            AuthProvider::GitHub,
            "Octo".to_string(),
            "octo@example.com".to_string(),
            "octocat".to_string(),
            doc! { "id": 583231_i64, "login": "octocat" },
        );

        assert!(UserCriteria::ProviderId {
            provider: AuthProvider::GitHub,
            id: ProviderId::Numeric(583231),
        }
        .matches(&user));
        assert!(!UserCriteria::ProviderId {
            provider: AuthProvider::Google,
            id: ProviderId::Text("583231".to_string()),
        }
        .matches(&user));
        assert!(UserCriteria::Email("octo@example.com".to_string()).matches(&user));
        assert!(!UserCriteria::Id(ObjectId::new()).matches(&user));
    }
}
