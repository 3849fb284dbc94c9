//! # Configuration Module
//!
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, 저장소, 요청 제한 설정
//! - [`auth_config`] - 인증 프로바이더, 세션 토큰, OAuth 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # 저장소
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="tagboard_dev"
//! export REDIS_URL="redis://localhost:6379"
//!
//! # 세션 토큰
//! export JWT_SECRET="your-super-secret-key"
//!
//! # 프로바이더 (사용하는 것만)
//! export GITHUB_CLIENT_ID="..."
//! export GITHUB_CLIENT_SECRET="..."
//! export GITHUB_CALLBACK_URL="https://yourdomain.com/api/v1/auth/github/callback"
//! ```
//!
//! `.env.dev` / `.env.prod` 파일은 `PROFILE` 환경 변수에 따라 `main`에서 로드됩니다.

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
