//! Entity models shared across services.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// A blog post. Created once, never mutated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Post identifier.
    pub id: Uuid,
    /// Post title.
    pub title: String,
    /// Creation timestamp, assigned by the store.
    pub created_at: DateTime<Utc>,
}

/// Moderation status of a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentStatus {
    /// Newly created, awaiting moderation.
    Pending,
    /// Approved by moderation.
    Approved,
    /// Rejected by moderation.
    Rejected,
}

impl CommentStatus {
    /// Returns the lowercase wire/storage representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for CommentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommentStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            other => Err(DomainError::Store(format!(
                "unknown comment status: {other}"
            ))),
        }
    }
}

/// A comment on a post. Created `pending`; status and content are later
/// rewritten by a moderation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Comment identifier.
    pub id: Uuid,
    /// The post this comment belongs to.
    pub post_id: Uuid,
    /// Comment body.
    pub content: String,
    /// Moderation status.
    pub status: CommentStatus,
    /// Creation timestamp, assigned by the store.
    pub created_at: DateTime<Utc>,
}
