use crate::domain::article::ArticleId;
use crate::domain::comment::entity::{Comment, CommentFilter, CommentView, NewComment};
use crate::domain::comment::moderation::{
    CounterReconciliation, ModerationAction, ModerationOutcome,
};
use crate::domain::comment::value_objects::CommentId;
use crate::domain::errors::DomainResult;
use crate::domain::pagination::{PageRequest, Paged};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Plain comment reads and creation. Deliberately has no way to change a
/// comment's status or delete one; see [`CommentModerationRepository`].
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment>;
    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>>;
    async fn list_page(
        &self,
        filter: &CommentFilter,
        page: PageRequest,
    ) -> DomainResult<Paged<CommentView>>;
    async fn count_approved(&self, article_id: ArticleId) -> DomainResult<u64>;
}

#[async_trait]
pub trait CommentModerationRepository: Send + Sync {
    /// Reads the comment's status, writes the planned status/tombstone and
    /// adjusts the owning article's counter as a single atomic unit.
    ///
    /// Returns `NotFound` without mutating anything if the comment has no live
    /// row. Any other failure leaves both rows as they were before the call.
    async fn moderate(
        &self,
        id: CommentId,
        action: ModerationAction,
        at: DateTime<Utc>,
    ) -> DomainResult<ModerationOutcome>;

    /// Rewrites `comment_count` from the live approved rows.
    async fn recount(&self, article_id: ArticleId) -> DomainResult<CounterReconciliation>;

    /// Every article id, tombstoned ones included, for the repair job.
    async fn article_ids(&self) -> DomainResult<Vec<ArticleId>>;
}
