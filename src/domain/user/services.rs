// src/domain/user/services.rs
use std::sync::Arc;

use crate::domain::errors::DomainResult;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::value_objects::{UserId, Username};

/// Username uniqueness is a convention enforced here, before writes, rather
/// than by a storage constraint.
pub struct UsernameAvailabilityService {
    repo: Arc<dyn UserRepository>,
}

impl UsernameAvailabilityService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn is_available(&self, username: &Username) -> DomainResult<bool> {
        Ok(self.repo.find_by_username(username).await?.is_none())
    }

    /// Same check for renames: the account's own current name does not collide.
    pub async fn is_available_excluding(
        &self,
        id: UserId,
        username: &Username,
    ) -> DomainResult<bool> {
        match self.repo.find_by_username(username).await? {
            Some(existing) => Ok(existing.id == id),
            None => Ok(true),
        }
    }
}
