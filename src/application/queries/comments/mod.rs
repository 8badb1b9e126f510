mod get;
mod list;
mod service;

pub use get::{CountApprovedCommentsQuery, GetCommentQuery};
pub use list::{ListArticleCommentsQuery, ListCommentsQuery};
pub use service::CommentQueryService;
