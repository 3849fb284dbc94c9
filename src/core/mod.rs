//! # Core Module
//!
//! 애플리케이션 조립 지점입니다. 전역 레지스트리 없이 [`AppContext`]가
//! 모든 의존성을 생성자로 받아 연결합니다.

pub mod context;

pub use context::AppContext;
