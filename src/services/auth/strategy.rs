//! 인증 전략 seam
//!
//! 프로바이더마다 하나의 전략이 있고, 코디네이터는 [`AuthProvider`] 태그로
//! 전략을 골라 호출합니다.

use async_trait::async_trait;
use crate::{
    config::AuthProvider,
    domain::models::auth::{AuthOutcome, Credentials},
    errors::AppError,
};

/// 인증 전략
///
/// * `Ok(AuthOutcome::Success(user))` - 기존 사용자 또는 방금 생성된 사용자
/// * `Ok(AuthOutcome::Failure(info))` - 거절 (재시도 가능한 사용자 오류)
/// * `Err(AppError)` - 저장소 장애 등. 재시도하지 않습니다.
#[async_trait]
pub trait AuthStrategy: Send + Sync {
    fn provider(&self) -> AuthProvider;

    async fn authenticate(&self, credentials: Credentials) -> Result<AuthOutcome, AppError>;
}

/// 다른 프로바이더용 자격 증명이 들어온 경우의 에러
pub(crate) fn mismatched_credentials(expected: AuthProvider, credentials: &Credentials) -> AppError {
    AppError::ValidationError(format!(
        "{} strategy cannot handle {} credentials",
        expected,
        credentials.provider()
    ))
}
