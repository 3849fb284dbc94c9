//! 태그별 게시글 목록
//!
//! 한 페이지는 30개이며 최신 게시글이 먼저 옵니다. 페이지 번호는 1부터
//! 시작하고, 0 이하이거나 숫자가 아니면 1페이지로 봅니다. 마지막 페이지를
//! 넘어선 요청은 빈 목록을 돌려줍니다.

use std::sync::Arc;
use crate::{
    domain::dto::articles::{ArticleListView, ArticleResponse},
    errors::AppResult,
    repositories::articles::{ArticleCriteria, ArticleStore},
};

pub const TAG_PAGE_SIZE: u64 = 30;

pub struct TagService {
    articles: Arc<dyn ArticleStore>,
}

impl TagService {
    pub fn new(articles: Arc<dyn ArticleStore>) -> Self {
        Self { articles }
    }

    /// 쿼리 문자열의 페이지 값을 1부터 시작하는 페이지 번호로 바꿉니다.
    ///
    /// `u64` 범위를 넘는 양수는 `u64::MAX`로 포화시켜 빈 페이지가 되게 합니다.
    pub fn normalize_page(page: Option<&str>) -> u64 {
        let Some(page) = page.map(str::trim) else {
            return 1;
        };

        match page.parse::<u64>() {
            Ok(0) => 1,
            Ok(page) => page,
            Err(_) if is_positive_integer(page) => u64::MAX,
            Err(_) => 1,
        }
    }

    pub async fn list(&self, tag: &str, page: Option<&str>) -> AppResult<ArticleListView> {
        let page = Self::normalize_page(page);
        let criteria = ArticleCriteria::Tag(tag.to_string());

        let articles = self
            .articles
            .find_page(&criteria, page - 1, TAG_PAGE_SIZE)
            .await?;
        let count = self.articles.count(&criteria).await?;

        Ok(ArticleListView {
            title: format!("Articles tagged {}", tag),
            articles: articles.into_iter().map(ArticleResponse::from).collect(),
            page,
            pages: count.div_ceil(TAG_PAGE_SIZE),
        })
    }
}

fn is_positive_integer(value: &str) -> bool {
    let digits = value.strip_prefix('+').unwrap_or(value);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
