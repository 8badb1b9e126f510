use std::sync::Arc;

use crate::domain::category::repository::CategoryRepository;
use crate::domain::category::value_objects::{CategoryId, CategoryName};
use crate::domain::errors::DomainResult;

pub struct CategoryNameService {
    repo: Arc<dyn CategoryRepository>,
}

impl CategoryNameService {
    pub fn new(repo: Arc<dyn CategoryRepository>) -> Self {
        Self { repo }
    }

    pub async fn is_available(
        &self,
        name: &CategoryName,
        ignore_id: Option<CategoryId>,
    ) -> DomainResult<bool> {
        match self.repo.find_by_name(name).await? {
            Some(existing) => Ok(ignore_id.is_some_and(|id| id == existing.id)),
            None => Ok(true),
        }
    }
}
