//! # Domain Models
//!
//! 저장되지 않는 도메인 모델입니다.
//!
//! - [`auth`] - 인증 전략의 자격 증명과 결과
//! - [`oauth`] - 외부 프로바이더 프로필, 진행 중인 OAuth 로그인
//! - [`token`] - 세션 토큰 클레임

pub mod auth;
pub mod oauth;
pub mod token;

pub use auth::*;
pub use oauth::*;
pub use token::*;
