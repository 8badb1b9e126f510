pub mod entity;
pub mod moderation;
pub mod repository;
pub mod value_objects;

pub use entity::{Comment, CommentFilter, CommentView, NewComment};
pub use moderation::{CounterReconciliation, ModerationAction, ModerationOutcome, ModerationPlan};
pub use repository::{CommentModerationRepository, CommentRepository};
pub use value_objects::{CommentContent, CommentId, CommentStatus};
