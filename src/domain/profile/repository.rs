use crate::domain::errors::DomainResult;
use crate::domain::profile::entity::{Profile, ProfileId, ProfilePatch};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn find_by_id(&self, id: ProfileId) -> DomainResult<Option<Profile>>;
    async fn update(
        &self,
        id: ProfileId,
        patch: ProfilePatch,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Profile>;
}
