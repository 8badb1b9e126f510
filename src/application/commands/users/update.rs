use super::UserCommandService;
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Role, UserId, UserPatch, Username},
};

pub struct EditUserCommand {
    pub id: i64,
    pub username: Option<String>,
    pub role: Option<Role>,
}

impl UserCommandService {
    pub async fn edit_user(&self, command: EditUserCommand) -> ApplicationResult<UserDto> {
        let id = UserId::new(command.id)?;
        let mut patch = UserPatch::new(id, self.clock.now());

        if let Some(username) = command.username {
            let username = Username::new(username)?;
            self.ensure_username_available(&username, Some(id)).await?;
            patch = patch.with_username(username);
        }

        if let Some(role) = command.role {
            patch = patch.with_role(role);
        }

        if patch.is_empty() {
            return Err(ApplicationError::validation(
                "at least one field must be provided",
            ));
        }

        let user = self.user_repo.update(patch).await?;
        Ok(user.into())
    }
}
