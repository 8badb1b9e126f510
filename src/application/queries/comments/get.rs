use super::CommentQueryService;
use crate::{
    application::{
        dto::CommentDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{article::ArticleId, comment::CommentId},
};

pub struct GetCommentQuery {
    pub id: i64,
}

pub struct CountApprovedCommentsQuery {
    pub article_id: i64,
}

impl CommentQueryService {
    pub async fn get_comment(&self, query: GetCommentQuery) -> ApplicationResult<CommentDto> {
        let id = CommentId::new(query.id)?;
        let comment = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("comment not found"))?;
        Ok(comment.into())
    }

    /// Live count of approved, undeleted comments. Independent of the
    /// article's stored `comment_count`.
    pub async fn count_approved(
        &self,
        query: CountApprovedCommentsQuery,
    ) -> ApplicationResult<u64> {
        let article_id = ArticleId::new(query.article_id)?;
        Ok(self.repo.count_approved(article_id).await?)
    }
}
