// tests/support/mocks/repos.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use quill_core::domain::{
    article::ArticleId,
    comment::{
        CommentId, CommentModerationRepository, CounterReconciliation, ModerationAction,
        ModerationOutcome,
    },
    errors::{DomainError, DomainResult},
};

/// Moderation port whose storage is permanently unavailable.
#[derive(Clone, Debug, Default)]
pub struct FailingModerationRepo;

#[async_trait]
impl CommentModerationRepository for FailingModerationRepo {
    async fn moderate(
        &self,
        _id: CommentId,
        _action: ModerationAction,
        _at: DateTime<Utc>,
    ) -> DomainResult<ModerationOutcome> {
        Err(DomainError::Persistence("connection reset".into()))
    }

    async fn recount(&self, _article_id: ArticleId) -> DomainResult<CounterReconciliation> {
        Err(DomainError::Persistence("connection reset".into()))
    }

    async fn article_ids(&self) -> DomainResult<Vec<ArticleId>> {
        Err(DomainError::Persistence("connection reset".into()))
    }
}
