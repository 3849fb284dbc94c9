//! 진행 중인 OAuth 로그인 정보
//!
//! 로그인 URL을 발급할 때 state 값과 함께 저장되며, 콜백에서 한 번만 소비됩니다.

use serde::{Deserialize, Serialize};
use crate::config::AuthProvider;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingAuthorization {
    /// 로그인을 시작한 프로바이더
    pub provider: AuthProvider,
    /// PKCE code_verifier (PKCE를 쓰지 않는 프로바이더는 None)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_verifier: Option<String>,
}
