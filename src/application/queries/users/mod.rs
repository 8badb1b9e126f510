mod availability;
mod list;
mod service;

pub use availability::CheckUsernameQuery;
pub use list::{GetUserQuery, ListUsersQuery};
pub use service::UserQueryService;
