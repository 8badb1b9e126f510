use std::sync::Arc;

use crate::{
    application::{
        dto::{CategoryDto, Page},
        error::{ApplicationError, ApplicationResult},
        queries::pagination::page_request,
    },
    domain::category::{CategoryId, CategoryRepository},
};

pub struct GetCategoryQuery {
    pub id: i64,
}

pub struct ListCategoriesQuery {
    pub page_size: u32,
    pub page_num: u32,
}

pub struct CategoryQueryService {
    repo: Arc<dyn CategoryRepository>,
    max_page_size: u32,
}

impl CategoryQueryService {
    pub fn new(repo: Arc<dyn CategoryRepository>, max_page_size: u32) -> Self {
        Self {
            repo,
            max_page_size,
        }
    }

    pub async fn get_category(&self, query: GetCategoryQuery) -> ApplicationResult<CategoryDto> {
        let id = CategoryId::new(query.id)?;
        let category = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;
        Ok(category.into())
    }

    pub async fn list_categories(
        &self,
        query: ListCategoriesQuery,
    ) -> ApplicationResult<Page<CategoryDto>> {
        let page = page_request(query.page_size, query.page_num, self.max_page_size)?;
        let paged = self.repo.list_page(page).await?;
        Ok(Page::from_paged(paged, page))
    }
}
