//! 게시글 리포지토리
//!
//! 태그 목록 화면에 필요한 두 가지 조회(개수, 페이지)만 제공합니다.

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    options::IndexOptions,
    Collection, IndexModel,
};
use crate::{db::Database, domain::entities::articles::article::Article, errors::AppError};

/// 게시글 조회 기준
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleCriteria {
    /// `tags` 배열에 정확히 일치하는 값이 있는 게시글
    Tag(String),
}

impl ArticleCriteria {
    pub fn to_filter(&self) -> Document {
        match self {
            // 배열 필드에 스칼라를 비교하면 원소 포함 여부로 평가된다
            ArticleCriteria::Tag(tag) => doc! { "tags": tag },
        }
    }

    #[cfg(test)]
    pub fn matches(&self, article: &Article) -> bool {
        match self {
            ArticleCriteria::Tag(tag) => article.has_tag(tag),
        }
    }
}

#[async_trait]
pub trait ArticleStore: Send + Sync {
    async fn count(&self, criteria: &ArticleCriteria) -> Result<u64, AppError>;

    /// 최신순으로 `page`(0부터) 번째 페이지를 가져옵니다.
    async fn find_page(
        &self,
        criteria: &ArticleCriteria,
        page: u64,
        limit: u64,
    ) -> Result<Vec<Article>, AppError>;
}

pub struct MongoArticleRepository {
    db: Arc<Database>,
}

impl MongoArticleRepository {
    pub const COLLECTION: &'static str = "articles";

    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Article> {
        self.db.get_database().collection::<Article>(Self::COLLECTION)
    }

    /// `tags`, `created_at` 인덱스를 생성합니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let tags_index = IndexModel::builder()
            .keys(doc! { "tags": 1 })
            .options(IndexOptions::builder()
                .name("tags".to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([tags_index, created_at_index])
            .await?;

        Ok(())
    }
}

#[async_trait]
impl ArticleStore for MongoArticleRepository {
    async fn count(&self, criteria: &ArticleCriteria) -> Result<u64, AppError> {
        let count = self.collection()
            .count_documents(criteria.to_filter())
            .await?;
        Ok(count)
    }

    async fn find_page(
        &self,
        criteria: &ArticleCriteria,
        page: u64,
        limit: u64,
    ) -> Result<Vec<Article>, AppError> {
        let limit = i64::try_from(limit)
            .map_err(|_| AppError::ValidationError("페이지 크기가 너무 큽니다".to_string()))?;

        let cursor = self.collection()
            .find(criteria.to_filter())
            .sort(doc! { "created_at": -1 })
            .skip(page_offset(page, limit as u64))
            .limit(limit)
            .await?;

        let articles: Vec<Article> = cursor.try_collect().await?;
        Ok(articles)
    }
}

/// 건너뛸 문서 수. 드라이버는 `i64` 범위의 값만 보낼 수 있습니다.
fn page_offset(page: u64, limit: u64) -> u64 {
    page.saturating_mul(limit).min(i64::MAX as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_criteria() {
        let criteria = ArticleCriteria::Tag("rust".to_string());
        assert_eq!(criteria.to_filter(), doc! { "tags": "rust" });

        let tagged = Article::new("a".to_string(), String::new(), vec!["rust".to_string()]);
        let other = Article::new("b".to_string(), String::new(), vec!["go".to_string()]);
        assert!(criteria.matches(&tagged));
        assert!(!criteria.matches(&other));
    }

    #[test]
    fn test_page_offset_is_clamped_to_i64() {
        assert_eq!(page_offset(0, 30), 0);
        assert_eq!(page_offset(2, 30), 60);
        assert_eq!(page_offset(u64::MAX - 1, 30), i64::MAX as u64);
        assert_eq!(page_offset(400_000_000_000_000_000, 30), i64::MAX as u64);
    }
}
