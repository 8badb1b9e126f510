use super::CommentQueryService;
use crate::{
    application::{
        dto::{CommentViewDto, Page},
        error::ApplicationResult,
        queries::pagination::page_request,
    },
    domain::{
        article::ArticleId,
        comment::{CommentFilter, CommentStatus},
    },
};

/// Moderation listing across all articles.
pub struct ListCommentsQuery {
    pub page_size: u32,
    pub page_num: u32,
    pub article_id: Option<i64>,
    pub status: Option<CommentStatus>,
}

/// Public listing under an article; only approved comments are visible.
pub struct ListArticleCommentsQuery {
    pub article_id: i64,
    pub page_size: u32,
    pub page_num: u32,
}

impl CommentQueryService {
    pub async fn list_comments(
        &self,
        query: ListCommentsQuery,
    ) -> ApplicationResult<Page<CommentViewDto>> {
        let filter = CommentFilter {
            article_id: query.article_id.map(ArticleId::new).transpose()?,
            status: query.status,
        };
        self.list_with_filter(filter, query.page_size, query.page_num)
            .await
    }

    pub async fn list_for_article(
        &self,
        query: ListArticleCommentsQuery,
    ) -> ApplicationResult<Page<CommentViewDto>> {
        let article_id = ArticleId::new(query.article_id)?;
        self.list_with_filter(
            CommentFilter::approved_for(article_id),
            query.page_size,
            query.page_num,
        )
        .await
    }

    async fn list_with_filter(
        &self,
        filter: CommentFilter,
        page_size: u32,
        page_num: u32,
    ) -> ApplicationResult<Page<CommentViewDto>> {
        let page = page_request(page_size, page_num, self.max_page_size)?;
        let paged = self.repo.list_page(&filter, page).await?;
        Ok(Page::from_paged(paged, page))
    }
}
