// src/application/ports/security.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> ApplicationResult<String>;

    /// `Ok(false)` for a mismatch; `Err` only when the digest itself is unusable.
    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<bool>;
}
