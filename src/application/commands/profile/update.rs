use super::ProfileCommandService;
use crate::{
    application::{
        dto::ProfileDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::profile::{ProfileId, ProfilePatch},
};

pub struct UpdateProfileCommand {
    pub id: i64,
    pub patch: ProfilePatch,
}

impl ProfileCommandService {
    pub async fn update_profile(
        &self,
        command: UpdateProfileCommand,
    ) -> ApplicationResult<ProfileDto> {
        let id = ProfileId::new(command.id)?;

        if command.patch.is_empty() {
            return Err(ApplicationError::validation(
                "at least one field must be provided",
            ));
        }
        command.patch.validate()?;

        let profile = self
            .repo
            .update(id, command.patch, self.clock.now())
            .await?;
        Ok(profile.into())
    }
}
