use crate::domain::article::ArticleId;
use crate::domain::comment::value_objects::{CommentContent, CommentId, CommentStatus};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

/// A stored comment. `article_title` and `username` are snapshots taken when
/// the comment was written and are not kept in sync with later renames.
#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub user_id: UserId,
    pub article_id: ArticleId,
    pub article_title: String,
    pub username: String,
    pub content: CommentContent,
    pub status: CommentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Listing projection: title and username come from the live article and user
/// rows, falling back to the snapshot when the joined row is gone.
#[derive(Debug, Clone)]
pub struct CommentView {
    pub id: CommentId,
    pub user_id: UserId,
    pub article_id: ArticleId,
    pub article_title: String,
    pub username: String,
    pub content: CommentContent,
    pub status: CommentStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub user_id: UserId,
    pub article_id: ArticleId,
    pub article_title: String,
    pub username: String,
    pub content: CommentContent,
    pub status: CommentStatus,
    pub created_at: DateTime<Utc>,
}

impl NewComment {
    /// New comments always enter moderation as [`CommentStatus::Pending`].
    pub fn new(
        user_id: UserId,
        article_id: ArticleId,
        article_title: impl Into<String>,
        username: impl Into<String>,
        content: CommentContent,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id,
            article_id,
            article_title: article_title.into(),
            username: username.into(),
            content,
            status: CommentStatus::Pending,
            created_at,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CommentFilter {
    pub article_id: Option<ArticleId>,
    pub status: Option<CommentStatus>,
}

impl CommentFilter {
    pub fn approved_for(article_id: ArticleId) -> Self {
        Self {
            article_id: Some(article_id),
            status: Some(CommentStatus::Approved),
        }
    }

    pub fn matches(&self, comment: &Comment) -> bool {
        self.article_id.is_none_or(|id| comment.article_id == id)
            && self.status.is_none_or(|status| comment.status == status)
    }
}
