//! # Domain Layer Module
//!
//! 서비스 계층이 다루는 타입들을 모아 둔 모듈입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - MongoDB에 저장되는 문서 (User, Article)
//! ├── dto       - HTTP 요청/응답
//! └── models    - 인증 흐름 모델 (자격 증명, 결과, 프로필, 세션 클레임)
//!      │
//!      ▼
//! Services (인증 전략, 태그 목록)
//!      │
//!      ▼
//! Repositories (UserStore, ArticleStore, StateStore)
//! ```
//!
//! 엔티티는 저장 형태를 그대로 따르고, 외부 프로바이더 응답은 `models::oauth`에서
//! 한 번 정규화된 뒤에만 서비스로 들어갑니다.

pub mod entities;
pub mod dto;
pub mod models;
