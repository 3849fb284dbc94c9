//! Article Entity
//!
//! 게시글의 생성/수정은 이 서비스 밖에서 이루어지며, 여기서는 태그 목록
//! 조회에 필요한 필드만 읽습니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    /// 작성자 ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<ObjectId>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime,
}

impl Article {
    pub fn new(title: String, body: String, tags: Vec<String>) -> Self {
        Self {
            id: None,
            title,
            body,
            user: None,
            tags,
            created_at: DateTime::now(),
        }
    }

    /// 태그 목록에 정확히 일치하는 태그가 있는지 확인합니다.
    #[cfg(test)]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_tag_is_exact() {
        let article = Article::new(
            "Ownership".to_string(),
            String::new(),
            vec!["rust".to_string(), "memory".to_string()],
        );

        assert!(article.has_tag("rust"));
        assert!(!article.has_tag("Rust"));
        assert!(!article.has_tag("rus"));
    }
}
