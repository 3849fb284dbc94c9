//! 인증 서비스 모듈
//!
//! - [`strategy`]: 전략 trait (`AuthStrategy`)
//! - [`local_strategy`], [`profile_strategy`]: 다섯 가지 전략 구현
//! - [`authenticator`]: 프로바이더 태그로 전략을 고르는 코디네이터
//! - [`oauth_client`]: 외부 프로바이더 Authorization Code 흐름
//! - [`token_service`]: 세션 토큰(JWT) 발급/검증

pub mod strategy;
pub mod local_strategy;
pub mod profile_strategy;
pub mod authenticator;
pub mod oauth_client;
pub mod token_service;

pub use strategy::AuthStrategy;
pub use local_strategy::LocalStrategy;
pub use profile_strategy::ProfileStrategy;
pub use authenticator::Authenticator;
pub use oauth_client::OAuthClient;
pub use token_service::TokenService;
