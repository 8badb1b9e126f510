use crate::domain::category::entity::{Category, CategoryPatch, NewCategory};
use crate::domain::category::value_objects::{CategoryId, CategoryName};
use crate::domain::errors::DomainResult;
use crate::domain::pagination::{PageRequest, Paged};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category>;
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>>;
    async fn find_by_name(&self, name: &CategoryName) -> DomainResult<Option<Category>>;
    async fn list_page(&self, page: PageRequest) -> DomainResult<Paged<Category>>;
    async fn update(&self, patch: CategoryPatch) -> DomainResult<Category>;
    async fn soft_delete(&self, id: CategoryId, deleted_at: DateTime<Utc>) -> DomainResult<()>;
}
