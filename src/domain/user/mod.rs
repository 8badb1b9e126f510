// src/domain/user/mod.rs
pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{NewUser, User, UserFilter, UserPatch};
pub use repository::UserRepository;
pub use services::UsernameAvailabilityService;
pub use value_objects::{PasswordHash, Role, UserId, Username};
