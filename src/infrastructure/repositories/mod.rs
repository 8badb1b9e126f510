// src/infrastructure/repositories/mod.rs
mod error;
mod listing;
mod postgres_article;
mod postgres_category;
mod postgres_comment;
mod postgres_profile;
mod postgres_user;

pub use error::map_sqlx;
pub use postgres_article::{PostgresArticleReadRepository, PostgresArticleWriteRepository};
pub use postgres_category::PostgresCategoryRepository;
pub use postgres_comment::PostgresCommentRepository;
pub use postgres_profile::PostgresProfileRepository;
pub use postgres_user::PostgresUserRepository;
