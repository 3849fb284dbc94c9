//! User Entity Implementation
//!
//! 로컬 계정과 외부 프로바이더 계정을 하나의 문서 형태로 표현합니다.
//!
//! ```text
//! {
//!   "_id": ObjectId,
//!   "name": "Jane",
//!   "email": "jane@example.com",
//!   "username": "jane",
//!   "provider": "github",
//!   "github": { "id": 1234, "login": "jane", ... },   // 프로필 스냅샷
//!   "created_at": ISODate
//! }
//! ```
//!
//! 외부 계정은 프로바이더 이름과 같은 필드에 최초 로그인 시점의 프로필
//! 스냅샷을 저장하며, 스냅샷 안의 `id`(Twitter는 `id_str`)가 조회 키입니다.

use mongodb::bson::{oid::ObjectId, DateTime, Document};
use serde::{Deserialize, Serialize};
use crate::config::AuthProvider;
use crate::errors::AppError;

/// 사용자 엔티티
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 표시 이름
    #[serde(default)]
    pub name: String,
    /// 이메일 (로컬 로그인 식별자, Twitter 계정은 빈 문자열)
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub username: String,
    /// 계정을 만든 인증 프로바이더
    pub provider: AuthProvider,
    /// bcrypt 해시 (솔트 포함). 로컬 계정만 가집니다.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hashed_password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<Document>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google: Option<Document>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<Document>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<Document>,
    pub created_at: DateTime,
}

impl User {
    /// 새 로컬 사용자 생성 (이메일/패스워드)
    pub fn new_local(name: String, email: String, username: String, hashed_password: String) -> Self {
        Self {
            id: None,
            name,
            email,
            username,
            provider: AuthProvider::Local,
            hashed_password: Some(hashed_password),
            github: None,
            google: None,
            linkedin: None,
            twitter: None,
            created_at: DateTime::now(),
        }
    }

    /// 외부 프로바이더로 처음 로그인한 사용자 생성
    ///
    /// `identity`는 조회 키가 들어 있는 프로필 스냅샷이며
    /// 프로바이더 이름과 같은 필드에 저장됩니다.
    pub fn new_external(
        provider: AuthProvider,
        name: String,
        email: String,
        username: String,
        identity: Document,
    ) -> Self {
        let mut user = Self {
            id: None,
            name,
            email,
            username,
            provider,
            hashed_password: None,
            github: None,
            google: None,
            linkedin: None,
            twitter: None,
            created_at: DateTime::now(),
        };
        if let Some(slot) = user.identity_slot(provider) {
            *slot = Some(identity);
        }
        user
    }

    fn identity_slot(&mut self, provider: AuthProvider) -> Option<&mut Option<Document>> {
        match provider {
            AuthProvider::GitHub => Some(&mut self.github),
            AuthProvider::Google => Some(&mut self.google),
            AuthProvider::LinkedIn => Some(&mut self.linkedin),
            AuthProvider::Twitter => Some(&mut self.twitter),
            AuthProvider::Local => None,
        }
    }

    /// 프로바이더의 프로필 스냅샷
    #[cfg(test)]
    pub fn identity(&self, provider: AuthProvider) -> Option<&Document> {
        match provider {
            AuthProvider::GitHub => self.github.as_ref(),
            AuthProvider::Google => self.google.as_ref(),
            AuthProvider::LinkedIn => self.linkedin.as_ref(),
            AuthProvider::Twitter => self.twitter.as_ref(),
            AuthProvider::Local => None,
        }
    }

    /// 스냅샷에 저장된 조회 키 값 (`github.id`, `twitter.id_str` 등)
    #[cfg(test)]
    pub fn identity_id(&self, provider: AuthProvider) -> Option<&mongodb::bson::Bson> {
        let key = provider.identity_key()?;
        self.identity(provider)?.get(key)
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 제출된 비밀번호를 저장된 해시와 비교합니다.
    ///
    /// 해시가 없는 계정(외부 프로바이더 계정)은 항상 `false`입니다.
    pub fn verify_password(&self, password: &str) -> Result<bool, AppError> {
        match &self.hashed_password {
            Some(hash) => bcrypt::verify(password, hash)
                .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e))),
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{doc, Bson};

    #[test]
    fn test_new_external_places_identity_under_provider_field() {
        let user = User::new_external(
            AuthProvider::Twitter,
            "Jack".to_string(),
            String::new(),
            "jack".to_string(),
            doc! { "id": "12", "id_str": "12" },
        );

        assert!(user.twitter.is_some());
        assert!(user.github.is_none());
        assert_eq!(user.identity_id(AuthProvider::Twitter), Some(&Bson::String("12".to_string())));
        assert_eq!(user.identity_id(AuthProvider::Local), None);
    }

    #[test]
    fn test_external_user_serializes_only_its_snapshot() {
        let user = User::new_external(
            AuthProvider::GitHub,
            "Octo".to_string(),
            "octo@example.com".to_string(),
            "octocat".to_string(),
            doc! { "id": 583231_i64 },
        );

        let document = mongodb::bson::to_document(&user).unwrap();
        assert_eq!(document.get_str("provider").unwrap(), "github");
        assert_eq!(document.get_document("github").unwrap().get_i64("id").unwrap(), 583231);
        assert!(!document.contains_key("google"));
        assert!(!document.contains_key("hashed_password"));
        assert!(!document.contains_key("_id"));
    }

    #[test]
    fn test_verify_password() {
        let hash = bcrypt::hash("s3cret", 4).unwrap();
        let user = User::new_local(
            "Jane".to_string(),
            "jane@example.com".to_string(),
            "jane".to_string(),
            hash,
        );

        assert!(user.verify_password("s3cret").unwrap());
        assert!(!user.verify_password("wrong").unwrap());
    }

    #[test]
    fn test_external_user_never_matches_password() {
        let user = User::new_external(
            AuthProvider::Google,
            "G".to_string(),
            "g@example.com".to_string(),
            String::new(),
            doc! { "id": "g-1" },
        );

        assert!(!user.verify_password("anything").unwrap());
    }
}
