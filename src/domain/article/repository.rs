use crate::domain::article::entity::{ArticleFilter, ArticlePatch, ArticleView, NewArticle};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use crate::domain::pagination::{PageRequest, Paged};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<ArticleView>;
    async fn update(&self, patch: ArticlePatch) -> DomainResult<ArticleView>;
    async fn soft_delete(&self, id: ArticleId, deleted_at: DateTime<Utc>) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<ArticleView>>;

    /// Detail read: bumps `read_count` by one in the same statement and returns
    /// the view with the incremented value.
    async fn find_and_record_read(&self, id: ArticleId) -> DomainResult<Option<ArticleView>>;

    async fn list_page(
        &self,
        filter: &ArticleFilter,
        page: PageRequest,
    ) -> DomainResult<Paged<ArticleView>>;
}
