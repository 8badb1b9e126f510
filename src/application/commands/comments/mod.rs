mod create;
mod moderate;
mod reconcile;
mod service;

pub use create::CreateCommentCommand;
pub use moderate::{ApproveCommentCommand, DeleteCommentCommand, RevokeCommentCommand};
pub use reconcile::ReconcileArticleCommand;
pub use service::CommentCommandService;
