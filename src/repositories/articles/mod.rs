pub mod article_repo;

pub use article_repo::{ArticleCriteria, ArticleStore, MongoArticleRepository};
