use super::CommentCommandService;
use crate::{
    application::{
        dto::ModerationResultDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        comment::{CommentId, ModerationAction},
        errors::DomainError,
    },
};

pub struct ApproveCommentCommand {
    pub id: i64,
}

pub struct RevokeCommentCommand {
    pub id: i64,
}

pub struct DeleteCommentCommand {
    pub id: i64,
}

impl CommentCommandService {
    /// Marks the comment approved and, unless it already was, adds one to the
    /// article's counter in the same transaction.
    pub async fn approve_comment(
        &self,
        command: ApproveCommentCommand,
    ) -> ApplicationResult<ModerationResultDto> {
        self.moderate(command.id, ModerationAction::Approve).await
    }

    /// Marks the comment rejected; subtracts one only if it was approved.
    pub async fn revoke_comment(
        &self,
        command: RevokeCommentCommand,
    ) -> ApplicationResult<ModerationResultDto> {
        self.moderate(command.id, ModerationAction::Revoke).await
    }

    /// Soft-deletes the comment; an approved comment stops counting in the
    /// same transaction.
    pub async fn delete_comment(
        &self,
        command: DeleteCommentCommand,
    ) -> ApplicationResult<ModerationResultDto> {
        self.moderate(command.id, ModerationAction::Delete).await
    }

    async fn moderate(
        &self,
        id: i64,
        action: ModerationAction,
    ) -> ApplicationResult<ModerationResultDto> {
        let id = CommentId::new(id)?;

        match self
            .moderation_repo
            .moderate(id, action, self.clock.now())
            .await
        {
            Ok(outcome) => {
                if outcome.plan.is_noop() {
                    tracing::debug!(
                        comment_id = %id,
                        action = %action,
                        status = %outcome.plan.next_status,
                        "moderation left comment unchanged"
                    );
                } else {
                    tracing::info!(
                        comment_id = %id,
                        article_id = %outcome.article_id,
                        action = %action,
                        from = %outcome.plan.previous_status,
                        to = %outcome.plan.next_status,
                        delta = outcome.plan.counter_delta,
                        comment_count = outcome.comment_count,
                        "comment moderated"
                    );
                }
                Ok(outcome.into())
            }
            Err(DomainError::Persistence(msg)) => {
                // Neither write can be trusted; the article needs a recount.
                tracing::error!(
                    comment_id = %id,
                    action = %action,
                    error = %msg,
                    "moderation failed, counter state indeterminate"
                );
                Err(ApplicationError::storage(msg))
            }
            Err(err) => Err(err.into()),
        }
    }
}
