use super::UserCommandService;
use crate::{application::error::ApplicationResult, domain::user::UserId};

pub struct DeleteUserCommand {
    pub id: i64,
}

impl UserCommandService {
    pub async fn delete_user(&self, command: DeleteUserCommand) -> ApplicationResult<()> {
        let id = UserId::new(command.id)?;
        self.user_repo.soft_delete(id, self.clock.now()).await?;
        Ok(())
    }
}
