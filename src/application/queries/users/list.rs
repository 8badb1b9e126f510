use super::UserQueryService;
use crate::{
    application::{
        dto::{Page, UserDto},
        error::{ApplicationError, ApplicationResult},
        queries::pagination::page_request,
    },
    domain::user::{UserFilter, UserId},
};

pub struct GetUserQuery {
    pub id: i64,
}

pub struct ListUsersQuery {
    pub page_size: u32,
    pub page_num: u32,
    pub username_prefix: Option<String>,
}

impl UserQueryService {
    pub async fn get_user(&self, query: GetUserQuery) -> ApplicationResult<UserDto> {
        let id = UserId::new(query.id)?;
        let user = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;
        Ok(user.into())
    }

    pub async fn list_users(&self, query: ListUsersQuery) -> ApplicationResult<Page<UserDto>> {
        let page = page_request(query.page_size, query.page_num, self.max_page_size)?;
        let filter = UserFilter {
            username_prefix: query.username_prefix,
        };
        let paged = self.repo.list_page(&filter, page).await?;
        Ok(Page::from_paged(paged, page))
    }
}
