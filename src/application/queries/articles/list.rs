use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, Page},
        error::ApplicationResult,
        queries::pagination::page_request,
    },
    domain::{article::ArticleFilter, category::CategoryId},
};

pub struct ListArticlesQuery {
    pub page_size: u32,
    pub page_num: u32,
    /// Matches titles starting with this text; blank means no filter.
    pub title_prefix: Option<String>,
    pub category_id: Option<i64>,
}

impl ArticleQueryService {
    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<Page<ArticleDto>> {
        let page = page_request(query.page_size, query.page_num, self.max_page_size)?;
        let filter = ArticleFilter {
            title_prefix: query.title_prefix,
            category_id: query.category_id.map(CategoryId::new).transpose()?,
        };

        let paged = self.read_repo.list_page(&filter, page).await?;
        Ok(Page::from_paged(paged, page))
    }
}
