use super::CategoryCommandService;
use crate::{
    application::{dto::CategoryDto, error::ApplicationResult},
    domain::category::{CategoryName, NewCategory},
};

pub struct CreateCategoryCommand {
    pub name: String,
}

impl CategoryCommandService {
    pub async fn create_category(
        &self,
        command: CreateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        let name = CategoryName::new(command.name)?;
        self.ensure_name_available(&name, None).await?;

        let category = self
            .repo
            .insert(NewCategory {
                name,
                created_at: self.clock.now(),
            })
            .await?;
        Ok(category.into())
    }
}
