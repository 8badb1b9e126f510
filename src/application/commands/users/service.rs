use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::{security::PasswordHasher, time::Clock},
    },
    domain::user::{PasswordHash, UserId, UserRepository, Username, UsernameAvailabilityService},
};

use super::password::validate_password;

pub struct UserCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) usernames: Arc<UsernameAvailabilityService>,
    pub(super) clock: Arc<dyn Clock>,
}

impl UserCommandService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        usernames: Arc<UsernameAvailabilityService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            user_repo,
            password_hasher,
            usernames,
            clock,
        }
    }

    /// `ignore_id` lets a user keep their own name during an edit.
    pub(super) async fn ensure_username_available(
        &self,
        username: &Username,
        ignore_id: Option<UserId>,
    ) -> ApplicationResult<()> {
        let available = match ignore_id {
            Some(id) => self.usernames.is_available_excluding(id, username).await?,
            None => self.usernames.is_available(username).await?,
        };

        if available {
            Ok(())
        } else {
            Err(ApplicationError::conflict("username already exists"))
        }
    }

    pub(super) async fn hash_password(&self, password: &str) -> ApplicationResult<PasswordHash> {
        validate_password(password)?;
        let hashed = self.password_hasher.hash(password).await?;
        Ok(PasswordHash::new(hashed)?)
    }
}
