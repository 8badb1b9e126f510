// tests/support/mocks/security.rs
use async_trait::async_trait;
use quill_core::application::{ApplicationResult, ports::security::PasswordHasher};

/// Deterministic stand-in for argon2: the digest is the password behind a prefix.
#[derive(Clone, Debug, Default)]
pub struct DummyPasswordHasher;

pub const HASH_PREFIX: &str = "hashed:";

#[async_trait]
impl PasswordHasher for DummyPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("{HASH_PREFIX}{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<bool> {
        Ok(expected_hash
            .strip_prefix(HASH_PREFIX)
            .is_some_and(|stored| stored == password))
    }
}
