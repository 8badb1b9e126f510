use std::sync::Arc;

use crate::domain::user::{UserRepository, UsernameAvailabilityService};

pub struct UserQueryService {
    pub(super) repo: Arc<dyn UserRepository>,
    pub(super) usernames: Arc<UsernameAvailabilityService>,
    pub(super) max_page_size: u32,
}

impl UserQueryService {
    pub fn new(
        repo: Arc<dyn UserRepository>,
        usernames: Arc<UsernameAvailabilityService>,
        max_page_size: u32,
    ) -> Self {
        Self {
            repo,
            usernames,
            max_page_size,
        }
    }
}
