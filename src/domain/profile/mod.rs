pub mod entity;
pub mod repository;

pub use entity::{Profile, ProfileFields, ProfileId, ProfilePatch, SITE_PROFILE_ID};
pub use repository::ProfileRepository;
