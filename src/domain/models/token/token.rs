//! 세션 토큰 클레임
//!
//! 인증 성공 후 발급되는 JWT의 페이로드입니다. RFC 7519 표준 클레임에
//! 인증 프로바이더만 더했습니다.
use serde::{Deserialize, Serialize};
use crate::config::AuthProvider;

/// JWT 세션 토큰의 클레임(Payload) 구조체
///
/// - `sub`: 사용자 ID (ObjectId 16진수 문자열)
/// - `provider`: 로그인에 사용한 프로바이더
/// - `iat` / `exp`: 발급/만료 시간 (Unix timestamp)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub provider: AuthProvider,
    pub iat: i64,
    pub exp: i64,
}

/// 클라이언트에게 전달되는 세션 토큰
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionToken {
    pub access_token: String,
    /// 만료까지 남은 시간 (초)
    pub expires_in: i64,
}
