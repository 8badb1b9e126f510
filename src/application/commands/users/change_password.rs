use super::UserCommandService;
use crate::{
    application::error::ApplicationResult,
    domain::user::{UserId, UserPatch},
};

pub struct ChangePasswordCommand {
    pub user_id: i64,
    pub new_password: String,
}

impl UserCommandService {
    /// Stores a fresh digest of `new_password`. The plaintext never reaches the
    /// repository.
    pub async fn change_password(&self, command: ChangePasswordCommand) -> ApplicationResult<()> {
        let user_id = UserId::new(command.user_id)?;
        let password_hash = self.hash_password(&command.new_password).await?;

        let patch = UserPatch::new(user_id, self.clock.now()).with_password_hash(password_hash);
        self.user_repo.update(patch).await?;

        tracing::info!(user_id = %user_id, "password changed");
        Ok(())
    }
}
