//! # 외부 프로바이더 프로필 모델
//!
//! 프로바이더마다 응답 형태가 다른 사용자 정보를 하나의 [`ProviderProfile`]로
//! 정규화합니다. 필수 필드는 이 경계에서 검증되며, 검증 실패는 이름 있는
//! [`ProfileError`]로 보고됩니다.
//!
//! | 프로바이더 | 원본 응답 | id | 이메일 |
//! |------------|-----------|----|--------|
//! | GitHub | `GET /user` (+ `/user/emails`) | `id` (숫자) | 필수 |
//! | Google | `GET /oauth2/v2/userinfo` | `id` | 필수 |
//! | LinkedIn | `GET /v2/userinfo` (OpenID) | `sub` | 필수 |
//! | Twitter | `GET /2/users/me` | `data.id` | 읽지 않음 |

use mongodb::bson::{Bson, Document};
use serde_json::Value;
use thiserror::Error;
use crate::config::AuthProvider;
use crate::errors::AppError;

/// 프로필 검증 에러
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    #[error("{0} profile has no email address")]
    MissingEmail(AuthProvider),

    #[error("{0} profile has no id")]
    MissingId(AuthProvider),

    #[error("{provider} profile id is not numeric: {id}")]
    InvalidId { provider: AuthProvider, id: String },

    #[error("{0} profile is malformed: {1}")]
    Malformed(AuthProvider, String),
}

impl From<ProfileError> for AppError {
    fn from(e: ProfileError) -> Self {
        AppError::ValidationError(e.to_string())
    }
}

/// 프로필 스냅샷 안의 조회 키 값
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderId {
    /// GitHub의 정수 id
    Numeric(i64),
    Text(String),
}

impl ProviderId {
    pub fn to_bson(&self) -> Bson {
        match self {
            ProviderId::Numeric(id) => Bson::Int64(*id),
            ProviderId::Text(id) => Bson::String(id.clone()),
        }
    }
}

/// 정규화된 외부 프로바이더 프로필
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderProfile {
    pub provider: AuthProvider,
    /// 프로바이더가 준 사용자 id (문자열 형태)
    pub id: String,
    pub display_name: String,
    pub username: Option<String>,
    /// 주 이메일이 맨 앞에 옵니다.
    pub emails: Vec<String>,
    /// 프로바이더 원본 응답
    pub raw: Value,
}

impl ProviderProfile {
    /// 필수 필드를 검증합니다.
    ///
    /// id가 비어 있으면 안 되며, GitHub/Google/LinkedIn은 이메일이 최소 하나 있어야 합니다.
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.id.trim().is_empty() {
            return Err(ProfileError::MissingId(self.provider));
        }
        if self.provider.requires_email() {
            self.primary_email()?;
        }
        self.lookup_id().map(|_| ())
    }

    /// 첫 번째 이메일
    pub fn primary_email(&self) -> Result<&str, ProfileError> {
        self.emails
            .first()
            .map(String::as_str)
            .filter(|email| !email.is_empty())
            .ok_or(ProfileError::MissingEmail(self.provider))
    }

    /// 사용자 컬렉션에서 쓰이는 조회 키 값
    ///
    /// GitHub는 정수로 저장되고 나머지 프로바이더는 문자열로 저장됩니다.
    pub fn lookup_id(&self) -> Result<ProviderId, ProfileError> {
        match self.provider {
            AuthProvider::GitHub => self
                .id
                .trim()
                .parse::<i64>()
                .map(ProviderId::Numeric)
                .map_err(|_| ProfileError::InvalidId {
                    provider: self.provider,
                    id: self.id.clone(),
                }),
            _ => Ok(ProviderId::Text(self.id.clone())),
        }
    }

    /// 사용자 문서에 저장할 프로필 스냅샷
    ///
    /// 원본 응답에 조회 키(`id` 또는 `id_str`)를 덮어써서 조회 필드가
    /// 항상 존재하고 타입이 일정하도록 합니다.
    pub fn identity_document(&self) -> Result<Document, ProfileError> {
        let key = self
            .provider
            .identity_key()
            .ok_or_else(|| ProfileError::Malformed(self.provider, "local has no profile".to_string()))?;

        let mut document = match &self.raw {
            Value::Object(_) => mongodb::bson::to_document(&self.raw)
                .map_err(|e| ProfileError::Malformed(self.provider, e.to_string()))?,
            Value::Null => Document::new(),
            _ => {
                return Err(ProfileError::Malformed(
                    self.provider,
                    "profile is not an object".to_string(),
                ))
            }
        };
        document.insert(key, self.lookup_id()?.to_bson());
        Ok(document)
    }

    /// 프로바이더 응답 JSON을 정규화합니다.
    ///
    /// `emails`는 GitHub `/user/emails` 응답이며 다른 프로바이더에서는 무시됩니다.
    pub fn from_provider_json(
        provider: AuthProvider,
        json: Value,
        emails: Option<Value>,
    ) -> Result<Self, ProfileError> {
        let profile = match provider {
            AuthProvider::GitHub => Self::from_github(json, emails),
            AuthProvider::Google => Self::from_google(json),
            AuthProvider::LinkedIn => Self::from_linkedin(json),
            AuthProvider::Twitter => Self::from_twitter(json)?,
            AuthProvider::Local => {
                return Err(ProfileError::Malformed(provider, "local has no profile".to_string()))
            }
        };
        profile.validate()?;
        Ok(profile)
    }

    fn from_github(json: Value, emails: Option<Value>) -> Self {
        let login = str_field(&json, "login");

        // 주 이메일을 맨 앞으로
        let mut listed: Vec<(bool, String)> = emails
            .as_ref()
            .and_then(Value::as_array)
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|entry| {
                        let email = entry.get("email")?.as_str()?.to_string();
                        let primary = entry.get("primary").and_then(Value::as_bool).unwrap_or(false);
                        Some((primary, email))
                    })
                    .collect()
            })
            .unwrap_or_default();
        listed.sort_by_key(|(primary, _)| !primary);
        let mut email_list: Vec<String> = listed.into_iter().map(|(_, email)| email).collect();
        if email_list.is_empty() {
            if let Some(public) = str_field(&json, "email") {
                email_list.push(public);
            }
        }

        Self {
            provider: AuthProvider::GitHub,
            id: id_field(&json, "id"),
            display_name: str_field(&json, "name").or_else(|| login.clone()).unwrap_or_default(),
            username: login,
            emails: email_list,
            raw: json,
        }
    }

    fn from_google(json: Value) -> Self {
        let id = match id_field(&json, "id") {
            id if id.is_empty() => id_field(&json, "sub"),
            id => id,
        };

        Self {
            provider: AuthProvider::Google,
            id,
            display_name: str_field(&json, "name").unwrap_or_default(),
            username: None,
            emails: str_field(&json, "email").into_iter().collect(),
            raw: json,
        }
    }

    fn from_linkedin(json: Value) -> Self {
        let display_name = str_field(&json, "name").unwrap_or_else(|| {
            [str_field(&json, "given_name"), str_field(&json, "family_name")]
                .into_iter()
                .flatten()
                .collect::<Vec<_>>()
                .join(" ")
        });

        Self {
            provider: AuthProvider::LinkedIn,
            id: id_field(&json, "sub"),
            display_name,
            username: None,
            emails: str_field(&json, "email").into_iter().collect(),
            raw: json,
        }
    }

    fn from_twitter(json: Value) -> Result<Self, ProfileError> {
        // v2 API는 사용자 객체를 data 안에 감싸서 돌려준다
        let data = match json {
            Value::Object(mut map) => match map.remove("data") {
                Some(data @ Value::Object(_)) => data,
                _ => Value::Object(map),
            },
            _ => {
                return Err(ProfileError::Malformed(
                    AuthProvider::Twitter,
                    "profile is not an object".to_string(),
                ))
            }
        };

        Ok(Self {
            provider: AuthProvider::Twitter,
            id: id_field(&data, "id"),
            display_name: str_field(&data, "name").unwrap_or_default(),
            username: str_field(&data, "username"),
            emails: Vec::new(),
            raw: data,
        })
    }
}

fn str_field(json: &Value, key: &str) -> Option<String> {
    json.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// 숫자/문자열 어느 쪽으로 와도 문자열로 읽는다
fn id_field(json: &Value, key: &str) -> String {
    match json.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}
