use super::CommentCommandService;
use crate::{
    application::{dto::ReconciliationDto, error::ApplicationResult},
    domain::{article::ArticleId, comment::CounterReconciliation},
};

pub struct ReconcileArticleCommand {
    pub article_id: i64,
}

impl CommentCommandService {
    /// Recounts one article's approved comments and rewrites its counter.
    pub async fn reconcile_article(
        &self,
        command: ReconcileArticleCommand,
    ) -> ApplicationResult<ReconciliationDto> {
        let article_id = ArticleId::new(command.article_id)?;
        let result = self.moderation_repo.recount(article_id).await?;
        log_reconciliation(&result);
        Ok(result.into())
    }

    /// Repair job over every article. Returns only the counters that had drifted.
    pub async fn reconcile_all(&self) -> ApplicationResult<Vec<ReconciliationDto>> {
        let ids = self.moderation_repo.article_ids().await?;
        let mut corrected = Vec::new();

        for article_id in ids {
            let result = self.moderation_repo.recount(article_id).await?;
            log_reconciliation(&result);
            if result.drifted() {
                corrected.push(result.into());
            }
        }

        tracing::info!(corrected = corrected.len(), "comment counter reconciliation finished");
        Ok(corrected)
    }
}

fn log_reconciliation(result: &CounterReconciliation) {
    if result.drifted() {
        tracing::warn!(
            article_id = %result.article_id,
            recorded = result.recorded,
            actual = result.actual,
            "comment counter drift corrected"
        );
    }
}
