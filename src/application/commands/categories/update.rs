use super::CategoryCommandService;
use crate::{
    application::{
        dto::CategoryDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::category::{CategoryId, CategoryName, CategoryPatch},
};

pub struct EditCategoryCommand {
    pub id: i64,
    pub name: Option<String>,
}

impl CategoryCommandService {
    pub async fn edit_category(
        &self,
        command: EditCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        let id = CategoryId::new(command.id)?;
        let mut patch = CategoryPatch::new(id, self.clock.now());

        if let Some(name) = command.name {
            let name = CategoryName::new(name)?;
            self.ensure_name_available(&name, Some(id)).await?;
            patch = patch.with_name(name);
        }

        if patch.is_empty() {
            return Err(ApplicationError::validation(
                "at least one field must be provided",
            ));
        }

        let category = self.repo.update(patch).await?;
        Ok(category.into())
    }
}
