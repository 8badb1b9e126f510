use super::UserQueryService;
use crate::{
    application::error::ApplicationResult,
    domain::user::{UserId, Username},
};

pub struct CheckUsernameQuery {
    pub username: String,
    /// Set when checking a rename, so the account's own name is not a collision.
    pub excluding: Option<i64>,
}

impl UserQueryService {
    pub async fn check_username_available(
        &self,
        query: CheckUsernameQuery,
    ) -> ApplicationResult<bool> {
        let username = Username::new(query.username)?;
        let available = match query.excluding {
            Some(id) => {
                self.usernames
                    .is_available_excluding(UserId::new(id)?, &username)
                    .await?
            }
            None => self.usernames.is_available(&username).await?,
        };
        Ok(available)
    }
}
