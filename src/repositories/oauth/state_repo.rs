//! # OAuth state 저장소
//!
//! 로그인 URL을 발급할 때 만든 state 값을 TTL과 함께 보관하고, 콜백에서
//! 한 번만 꺼낼 수 있게 합니다. 같은 state로 두 번째 콜백이 오면 `None`입니다.

use std::sync::Arc;
use async_trait::async_trait;
use crate::{
    caching::redis::RedisClient,
    domain::models::oauth::PendingAuthorization,
    errors::AppError,
};

#[async_trait]
pub trait StateStore: Send + Sync {
    async fn save(
        &self,
        state: &str,
        pending: &PendingAuthorization,
        ttl_seconds: u64,
    ) -> Result<(), AppError>;

    /// 저장된 값을 꺼내면서 삭제합니다.
    async fn take(&self, state: &str) -> Result<Option<PendingAuthorization>, AppError>;
}

/// Redis 기반 state 저장소 (`oauth:state:{state}` 키)
pub struct RedisStateStore {
    redis: Arc<RedisClient>,
}

impl RedisStateStore {
    pub fn new(redis: Arc<RedisClient>) -> Self {
        Self { redis }
    }

    pub fn key(state: &str) -> String {
        format!("oauth:state:{}", state)
    }
}

#[async_trait]
impl StateStore for RedisStateStore {
    async fn save(
        &self,
        state: &str,
        pending: &PendingAuthorization,
        ttl_seconds: u64,
    ) -> Result<(), AppError> {
        self.redis
            .set_with_expiry(&Self::key(state), pending, ttl_seconds)
            .await?;
        Ok(())
    }

    async fn take(&self, state: &str) -> Result<Option<PendingAuthorization>, AppError> {
        let pending = self.redis.take(&Self::key(state)).await?;
        Ok(pending)
    }
}
