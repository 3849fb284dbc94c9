//! # Domain Entities
//!
//! MongoDB에 저장되는 핵심 도메인 객체입니다.
//!
//! - [`users`] - 사용자 (`users` 컬렉션)
//! - [`articles`] - 게시글 (`articles` 컬렉션)

pub mod users;
pub mod articles;

pub use users::User;
pub use articles::Article;
