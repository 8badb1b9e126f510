pub mod articles;
pub mod categories;
pub mod comments;
pub mod pagination;
pub mod profile;
pub mod users;

pub use articles::ArticleDto;
pub use categories::CategoryDto;
pub use comments::{CommentDto, CommentViewDto, ModerationResultDto, ReconciliationDto};
pub use pagination::Page;
pub use profile::ProfileDto;
pub use users::{AuthenticatedUserDto, UserDto};
