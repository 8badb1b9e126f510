use std::sync::Arc;

use crate::{
    application::{
        dto::ProfileDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::profile::{ProfileId, ProfileRepository},
};

pub struct GetProfileQuery {
    pub id: i64,
}

pub struct ProfileQueryService {
    repo: Arc<dyn ProfileRepository>,
}

impl ProfileQueryService {
    pub fn new(repo: Arc<dyn ProfileRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_profile(&self, query: GetProfileQuery) -> ApplicationResult<ProfileDto> {
        let id = ProfileId::new(query.id)?;
        let profile = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("profile not found"))?;
        Ok(profile.into())
    }
}
