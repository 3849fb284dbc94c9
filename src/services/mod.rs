//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 저장소 trait 객체를 생성자로 받습니다. 실제 구성은
//! [`AppContext`](crate::core::context::AppContext)에서 한 번 이루어집니다.
//!
//! - [`auth`]: 인증 전략, 코디네이터, OAuth 클라이언트, 세션 토큰
//! - [`users`]: 로컬 회원가입
//! - [`articles`]: 태그별 게시글 목록

pub mod auth;
pub mod users;
pub mod articles;
