use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::validation::{ensure_char_len, ensure_positive_id};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const CONTENT_MAX: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommentId(pub i64);

impl CommentId {
    pub fn new(id: i64) -> DomainResult<Self> {
        ensure_positive_id("comment id", id)?;
        Ok(Self(id))
    }
}

impl From<CommentId> for i64 {
    fn from(value: CommentId) -> Self {
        value.0
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentContent(String);

impl CommentContent {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        ensure_char_len("comment content", &value, 1, CONTENT_MAX)?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Moderation state of a comment.
///
/// Persisted as `0` (rejected), `1` (approved) and `2` (pending). Any other
/// stored value is refused on decode rather than surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CommentStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl CommentStatus {
    pub fn code(self) -> i16 {
        match self {
            CommentStatus::Rejected => 0,
            CommentStatus::Approved => 1,
            CommentStatus::Pending => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CommentStatus::Pending => "pending",
            CommentStatus::Approved => "approved",
            CommentStatus::Rejected => "rejected",
        }
    }

    /// Whether a live comment in this state contributes to `Article::comment_count`.
    pub fn is_counted(self) -> bool {
        matches!(self, CommentStatus::Approved)
    }
}

impl TryFrom<i16> for CommentStatus {
    type Error = DomainError;

    fn try_from(code: i16) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(CommentStatus::Rejected),
            1 => Ok(CommentStatus::Approved),
            2 => Ok(CommentStatus::Pending),
            other => Err(DomainError::Validation(format!(
                "unknown comment status code {other}"
            ))),
        }
    }
}

impl fmt::Display for CommentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
