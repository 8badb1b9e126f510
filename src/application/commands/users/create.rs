use super::UserCommandService;
use crate::{
    application::{dto::UserDto, error::ApplicationResult},
    domain::user::{NewUser, Role, Username},
};

pub struct CreateUserCommand {
    pub username: String,
    pub password: String,
    /// Accepted for compatibility with older clients and ignored: new accounts
    /// are always created as normal users.
    pub role: Option<Role>,
}

impl UserCommandService {
    pub async fn create_user(&self, command: CreateUserCommand) -> ApplicationResult<UserDto> {
        let username = Username::new(command.username)?;
        self.ensure_username_available(&username, None).await?;

        if command.role == Some(Role::Admin) {
            tracing::debug!(username = %username, "ignoring requested admin role on create");
        }

        let password_hash = self.hash_password(&command.password).await?;
        let new_user = NewUser::new(username, password_hash, self.clock.now());

        let user = self.user_repo.insert(new_user).await?;
        tracing::info!(user_id = %user.id, username = %user.username, "user created");
        Ok(user.into())
    }
}
