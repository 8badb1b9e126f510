pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Article, ArticleFilter, ArticlePatch, ArticleView, NewArticle};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use value_objects::{ArticleDescription, ArticleId, ArticleImage, ArticleTitle};
