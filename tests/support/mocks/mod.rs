// tests/support/mocks/mod.rs
pub mod repos;
pub mod security;
pub mod store;
pub mod time;

pub use repos::FailingModerationRepo;
pub use security::DummyPasswordHasher;
pub use store::InMemoryBlogStore;
pub use time::{SteppingClock, fixed_now};
