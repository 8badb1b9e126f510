//! Moderation transition table.
//!
//! `approve`, `revoke` and `delete` are the only operations allowed to change
//! whether a comment counts toward its article's `comment_count`. Each one is
//! planned here as a pure function of the comment's current status, and the
//! storage layer applies the resulting plan (status write, tombstone, counter
//! delta) as one transaction.

use crate::domain::article::ArticleId;
use crate::domain::comment::value_objects::{CommentId, CommentStatus};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModerationAction {
    Approve,
    /// Also used for rejecting a comment that was never approved.
    Revoke,
    Delete,
}

impl ModerationAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModerationAction::Approve => "approve",
            ModerationAction::Revoke => "revoke",
            ModerationAction::Delete => "delete",
        }
    }

    pub fn plan(self, current: CommentStatus) -> ModerationPlan {
        let counted_before = current.is_counted();
        let (next_status, tombstone) = match self {
            ModerationAction::Approve => (CommentStatus::Approved, false),
            ModerationAction::Revoke => (CommentStatus::Rejected, false),
            ModerationAction::Delete => (current, true),
        };
        let counted_after = !tombstone && next_status.is_counted();

        let counter_delta = match (counted_before, counted_after) {
            (false, true) => 1,
            (true, false) => -1,
            _ => 0,
        };

        ModerationPlan {
            action: self,
            previous_status: current,
            next_status,
            tombstone,
            counter_delta,
        }
    }
}

impl fmt::Display for ModerationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModerationPlan {
    pub action: ModerationAction,
    pub previous_status: CommentStatus,
    pub next_status: CommentStatus,
    pub tombstone: bool,
    /// Always one of `-1`, `0`, `1`.
    pub counter_delta: i64,
}

impl ModerationPlan {
    pub fn changes_status(&self) -> bool {
        self.previous_status != self.next_status
    }

    pub fn is_noop(&self) -> bool {
        !self.changes_status() && !self.tombstone && self.counter_delta == 0
    }
}

/// What a committed moderation call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModerationOutcome {
    pub comment_id: CommentId,
    pub article_id: ArticleId,
    pub plan: ModerationPlan,
    /// The article's counter as committed by the same transaction.
    pub comment_count: i64,
}

/// Result of recounting one article's approved comments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterReconciliation {
    pub article_id: ArticleId,
    pub recorded: i64,
    pub actual: i64,
}

impl CounterReconciliation {
    pub fn drifted(&self) -> bool {
        self.recorded != self.actual
    }
}
