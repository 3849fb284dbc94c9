//! 데이터 액세스 계층
//!
//! 저장소마다 trait과 구현을 함께 둡니다. 서비스는 `Arc<dyn ...Store>`만
//! 받으므로 운영 구현과 메모리 구현을 자유롭게 바꿔 끼울 수 있습니다.
//!
//! | trait | 운영 구현 | 저장소 |
//! |-------|-----------|--------|
//! | [`UserStore`](users::UserStore) | `MongoUserRepository` | `users` 컬렉션 |
//! | [`ArticleStore`](articles::ArticleStore) | `MongoArticleRepository` | `articles` 컬렉션 |
//! | [`StateStore`](oauth::StateStore) | `RedisStateStore` | `oauth:state:*` 키 |
//!
//! 테스트 빌드에서는 `memory` 모듈이 같은 trait의 메모리 구현을 제공합니다.

pub mod users;
pub mod articles;
pub mod oauth;
#[cfg(test)]
pub mod memory;
