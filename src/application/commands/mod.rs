pub mod articles;
pub mod categories;
pub mod comments;
pub mod profile;
pub mod users;
