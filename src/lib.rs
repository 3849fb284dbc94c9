//! # tagboard
//!
//! 태그별 게시글 목록과 다섯 가지 로그인 전략(GitHub, Google, LinkedIn,
//! Twitter, 로컬)을 제공하는 블로그 백엔드입니다.
//!
//! ```text
//! handlers ──▶ services ──▶ repositories ──▶ db / caching
//!     │            │
//!     └── domain ◀─┘
//! ```
//!
//! 조립은 [`core::AppContext`]에서 이루어지며, 저장소는 trait 객체로 주입됩니다.

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
pub mod errors;
