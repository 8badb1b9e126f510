use crate::domain::errors::DomainResult;
use crate::domain::pagination::{PageRequest, Paged};
use crate::domain::user::entity::{NewUser, User, UserFilter, UserPatch};
use crate::domain::user::value_objects::{UserId, Username};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User>;

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>>;

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;

    async fn update(&self, patch: UserPatch) -> DomainResult<User>;

    async fn soft_delete(&self, id: UserId, deleted_at: DateTime<Utc>) -> DomainResult<()>;

    async fn list_page(&self, filter: &UserFilter, page: PageRequest) -> DomainResult<Paged<User>>;
}
