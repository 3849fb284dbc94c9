//! # OAuth 통합 모델
//!
//! 외부 프로바이더 응답을 도메인으로 옮기는 모델입니다.
//!
//! - [`provider_profile`] - 프로바이더별 사용자 정보를 정규화한 프로필과 검증 에러
//! - [`pending_authorization`] - 로그인 URL 발급부터 콜백까지 보관되는 state 정보

pub mod provider_profile;
pub mod pending_authorization;

pub use provider_profile::{ProfileError, ProviderId, ProviderProfile};
pub use pending_authorization::PendingAuthorization;
