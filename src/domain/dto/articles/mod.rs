pub mod tag_page;

pub use tag_page::{ArticleListView, ArticleResponse, TagPageQuery};
