use serde::{Deserialize, Serialize};
use crate::config::AuthProvider;
use crate::domain::entities::users::user::User;
use crate::domain::models::token::SessionToken;

/// 클라이언트에게 노출되는 사용자 정보
///
/// 비밀번호 해시와 프로필 스냅샷은 포함하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub username: String,
    pub provider: AuthProvider,
    pub created_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            name,
            email,
            username,
            provider,
            created_at,
            ..
        } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            name,
            email,
            username,
            provider,
            created_at: created_at.try_to_rfc3339_string().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserResponse {
    pub user: UserResponse,
    pub message: String,
}

/// 로그인 성공 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: UserResponse,
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

impl LoginResponse {
    pub fn new(user: User, token: SessionToken) -> Self {
        Self {
            user: UserResponse::from(user),
            access_token: token.access_token,
            token_type: "Bearer".to_string(),
            expires_in: token.expires_in,
        }
    }
}
