use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::category::{CategoryId, CategoryName, CategoryNameService, CategoryRepository},
};

pub struct CategoryCommandService {
    pub(super) repo: Arc<dyn CategoryRepository>,
    pub(super) names: Arc<CategoryNameService>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CategoryCommandService {
    pub fn new(
        repo: Arc<dyn CategoryRepository>,
        names: Arc<CategoryNameService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { repo, names, clock }
    }

    pub(super) async fn ensure_name_available(
        &self,
        name: &CategoryName,
        ignore_id: Option<CategoryId>,
    ) -> ApplicationResult<()> {
        if self.names.is_available(name, ignore_id).await? {
            Ok(())
        } else {
            Err(ApplicationError::conflict("category name already exists"))
        }
    }
}
