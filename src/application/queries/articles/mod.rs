mod get;
mod list;
mod service;

pub use get::GetArticleQuery;
pub use list::ListArticlesQuery;
pub use service::ArticleQueryService;
