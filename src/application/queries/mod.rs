pub mod articles;
pub mod categories;
pub mod comments;
mod pagination;
pub mod profile;
pub mod users;
