use crate::domain::comment::{
    Comment, CommentStatus, CommentView, CounterReconciliation, ModerationOutcome,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentDto {
    pub id: i64,
    pub user_id: i64,
    pub article_id: i64,
    pub article_title: String,
    pub username: String,
    pub content: String,
    pub status: CommentStatus,
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.into(),
            user_id: comment.user_id.into(),
            article_id: comment.article_id.into(),
            article_title: comment.article_title,
            username: comment.username,
            content: comment.content.into_inner(),
            status: comment.status,
            created_at: comment.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentViewDto {
    pub id: i64,
    pub user_id: i64,
    pub article_id: i64,
    pub article_title: String,
    pub username: String,
    pub content: String,
    pub status: CommentStatus,
    pub created_at: DateTime<Utc>,
}

impl From<CommentView> for CommentViewDto {
    fn from(view: CommentView) -> Self {
        Self {
            id: view.id.into(),
            user_id: view.user_id.into(),
            article_id: view.article_id.into(),
            article_title: view.article_title,
            username: view.username,
            content: view.content.into_inner(),
            status: view.status,
            created_at: view.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModerationResultDto {
    pub comment_id: i64,
    pub article_id: i64,
    pub action: String,
    pub previous_status: CommentStatus,
    pub status: CommentStatus,
    pub deleted: bool,
    pub counter_delta: i64,
    pub comment_count: i64,
}

impl From<ModerationOutcome> for ModerationResultDto {
    fn from(outcome: ModerationOutcome) -> Self {
        Self {
            comment_id: outcome.comment_id.into(),
            article_id: outcome.article_id.into(),
            action: outcome.plan.action.as_str().to_string(),
            previous_status: outcome.plan.previous_status,
            status: outcome.plan.next_status,
            deleted: outcome.plan.tombstone,
            counter_delta: outcome.plan.counter_delta,
            comment_count: outcome.comment_count,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconciliationDto {
    pub article_id: i64,
    pub recorded: i64,
    pub actual: i64,
}

impl From<CounterReconciliation> for ReconciliationDto {
    fn from(value: CounterReconciliation) -> Self {
        Self {
            article_id: value.article_id.into(),
            recorded: value.recorded,
            actual: value.actual,
        }
    }
}
