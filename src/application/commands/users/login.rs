use super::UserCommandService;
use crate::{
    application::{
        dto::AuthenticatedUserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{User, Username},
};

/// Which login surface is being used. The admin panel only admits admins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginScope {
    Admin,
    Public,
}

pub struct AuthenticateCommand {
    pub username: String,
    pub password: String,
    pub scope: LoginScope,
}

impl UserCommandService {
    pub async fn authenticate(
        &self,
        command: AuthenticateCommand,
    ) -> ApplicationResult<AuthenticatedUserDto> {
        let user = self
            .find_and_verify_user(&command.username, &command.password)
            .await?;

        if command.scope == LoginScope::Admin && !user.role.is_admin() {
            tracing::warn!(user_id = %user.id, "non-admin attempted admin login");
            return Err(ApplicationError::insufficient_role("admin role required"));
        }

        Ok(user.into())
    }

    async fn find_and_verify_user(
        &self,
        username: &str,
        password: &str,
    ) -> ApplicationResult<User> {
        // A name that cannot exist is reported the same way as one that does not.
        let username = Username::new(username)
            .map_err(|_| ApplicationError::not_found("user not found"))?;

        let user = self
            .user_repo
            .find_by_username(&username)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        if !self
            .password_hasher
            .verify(password, user.password_hash.as_str())
            .await?
        {
            return Err(ApplicationError::WrongCredentials);
        }

        Ok(user)
    }
}
