use serde::{Deserialize, Serialize};
use crate::domain::entities::articles::article::Article;

/// `GET /tags/{tag}?page=N` 쿼리
///
/// 숫자가 아닌 값도 에러 없이 받기 위해 문자열로 둡니다.
/// 해석은 [`TagService`](crate::services::articles::TagService)가 합니다.
#[derive(Debug, Default, Deserialize)]
pub struct TagPageQuery {
    #[serde(default)]
    pub page: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleResponse {
    pub id: String,
    pub title: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    pub tags: Vec<String>,
    pub created_at: String,
}

impl From<Article> for ArticleResponse {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.map(|id| id.to_hex()).unwrap_or_default(),
            title: article.title,
            body: article.body,
            user: article.user.map(|id| id.to_hex()),
            tags: article.tags,
            created_at: article.created_at.try_to_rfc3339_string().unwrap_or_default(),
        }
    }
}

/// 태그 목록 뷰 모델
///
/// `page`는 1부터 시작하고 `pages`는 `ceil(count / 30)`입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleListView {
    pub title: String,
    pub articles: Vec<ArticleResponse>,
    pub page: u64,
    pub pages: u64,
}
