//! # 애플리케이션 컨텍스트
//!
//! 저장소, 전략, 서비스를 한 곳에서 조립합니다. 핸들러는
//! `web::Data<AppContext>`로 이 구조체를 받습니다.
//!
//! ```text
//! Database ──▶ MongoUserRepository ──┬──▶ Authenticator (전략 5개)
//!                                    └──▶ UserService
//! Database ──▶ MongoArticleRepository ──▶ TagService
//! Redis ─────▶ RedisStateStore ─────────▶ OAuthClient
//!                                          TokenService (JWT_SECRET)
//! ```

use std::sync::Arc;
use crate::{
    caching::redis::RedisClient,
    db::Database,
    errors::AppError,
    repositories::{
        articles::{ArticleStore, MongoArticleRepository},
        oauth::{RedisStateStore, StateStore},
        users::{MongoUserRepository, UserStore},
    },
    services::{
        articles::TagService,
        auth::{Authenticator, OAuthClient, TokenService},
        users::UserService,
    },
};
#[cfg(test)]
use crate::config::OAuthProviderConfig;

pub struct AppContext {
    pub authenticator: Authenticator,
    pub oauth: OAuthClient,
    pub tokens: TokenService,
    pub users: UserService,
    pub tags: TagService,
}

impl AppContext {
    /// 저장소 구현을 받아 서비스를 조립합니다.
    pub fn new(
        user_store: Arc<dyn UserStore>,
        article_store: Arc<dyn ArticleStore>,
        oauth: OAuthClient,
        tokens: TokenService,
        users: UserService,
    ) -> Self {
        Self {
            authenticator: Authenticator::with_default_strategies(user_store),
            oauth,
            tokens,
            users,
            tags: TagService::new(article_store),
        }
    }

    /// 운영 구성: MongoDB 리포지토리, Redis state 저장소, 환경 변수 설정
    ///
    /// 리포지토리 인덱스도 여기서 생성합니다.
    pub async fn connect(database: Arc<Database>, redis: Arc<RedisClient>) -> Result<Self, AppError> {
        let user_repo = MongoUserRepository::new(database.clone());
        user_repo.create_indexes().await?;

        let article_repo = MongoArticleRepository::new(database);
        article_repo.create_indexes().await?;

        log::info!("✅ 인덱스 생성 완료");

        let user_store: Arc<dyn UserStore> = Arc::new(user_repo);
        let state_store: Arc<dyn StateStore> = Arc::new(RedisStateStore::new(redis));

        Ok(Self::new(
            user_store.clone(),
            Arc::new(article_repo),
            OAuthClient::from_env(state_store),
            TokenService::from_config(),
            UserService::new(user_store),
        ))
    }

    /// 주어진 OAuth 설정과 state 저장소로 구성합니다.
    #[cfg(test)]
    pub fn with_oauth_providers(
        user_store: Arc<dyn UserStore>,
        article_store: Arc<dyn ArticleStore>,
        state_store: Arc<dyn StateStore>,
        providers: Vec<OAuthProviderConfig>,
        tokens: TokenService,
        bcrypt_cost: u32,
    ) -> Self {
        Self::new(
            user_store.clone(),
            article_store,
            OAuthClient::new(providers, state_store),
            tokens,
            UserService::with_cost(user_store, bcrypt_cost),
        )
    }
}
