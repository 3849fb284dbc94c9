//! # Data Transfer Objects (DTO) Module
//!
//! HTTP 경계에서 주고받는 요청/응답 구조체입니다. 엔티티를 그대로 노출하지
//! 않고 DTO로 변환해서 비밀번호 해시나 프로필 스냅샷이 응답에 섞이지 않게 합니다.
//!
//! ```text
//! dto/
//! ├── users/
//! │   ├── request/    # 로그인, 회원가입, OAuth 콜백 쿼리
//! │   └── response/   # 사용자, 로그인 결과, 로그인 URL
//! └── articles/       # 태그 목록 쿼리와 뷰 모델
//! ```
//!
//! 요청 DTO는 `validator`의 `Validate`를 구현하며, 핸들러에서 서비스로 넘기기
//! 전에 검증합니다.

pub mod users;
pub mod articles;

pub use users::*;
pub use articles::*;
