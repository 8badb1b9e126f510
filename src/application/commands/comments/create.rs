use super::CommentCommandService;
use crate::{
    application::{
        dto::CommentDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::ArticleId,
        comment::{CommentContent, NewComment},
        user::UserId,
    },
};

/// Public submission. Carries no status: every new comment waits for moderation.
pub struct CreateCommentCommand {
    pub article_id: i64,
    pub user_id: i64,
    pub content: String,
}

impl CommentCommandService {
    pub async fn create_comment(
        &self,
        command: CreateCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let article_id = ArticleId::new(command.article_id)?;
        let user_id = UserId::new(command.user_id)?;
        let content = CommentContent::new(command.content)?;

        let article = self
            .article_repo
            .find_by_id(article_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        let new_comment = NewComment::new(
            user_id,
            article_id,
            article.article.title.as_str(),
            user.username.as_str(),
            content,
            self.clock.now(),
        );

        let created = self.comment_repo.insert(new_comment).await?;
        Ok(created.into())
    }
}
