//! Local store abstractions, one trait per service.
//!
//! Every mutation is either insert-if-absent or a single-row unconditional
//! update, so the traits need no application-level locking on top of the
//! store's own per-row atomicity.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::DomainError;
use crate::model::{Comment, CommentStatus, Post};

/// The posts service's private store.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Inserts a new post. Duplicate IDs are an error here; only derived
    /// views tolerate re-insertion.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Store` if the insert fails.
    async fn insert_post(&self, id: Uuid, title: &str) -> Result<(), DomainError>;
}

/// The comments service's private store.
#[async_trait]
pub trait CommentStore: Send + Sync {
    /// Inserts a new comment.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Store` if the insert fails.
    async fn insert_comment(
        &self,
        id: Uuid,
        post_id: Uuid,
        content: &str,
        status: CommentStatus,
    ) -> Result<(), DomainError>;

    /// Lists the comments on one post, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Store` if the read fails.
    async fn comments_for_post(&self, post_id: Uuid) -> Result<Vec<Comment>, DomainError>;

    /// Applies a moderation decision: unconditionally sets status and
    /// content for the matching `(id, post_id)`. Matching no row is a safe
    /// no-op, not an error — the moderation event outran creation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Store` if the update itself fails.
    async fn set_moderation(
        &self,
        id: Uuid,
        post_id: Uuid,
        status: CommentStatus,
        content: &str,
    ) -> Result<(), DomainError>;
}

/// The query service's derived view store.
///
/// The view is never authoritative: it must always be reconstructible from
/// the event log alone, which is why every write here is idempotent.
#[async_trait]
pub trait ViewStore: Send + Sync {
    /// Inserts a post row unless one with the same ID already exists.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Store` if the insert fails.
    async fn insert_post_if_absent(&self, id: Uuid, title: &str) -> Result<(), DomainError>;

    /// Inserts a comment row unless one with the same ID already exists.
    /// The referenced post need not be present.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Store` if the insert fails.
    async fn insert_comment_if_absent(
        &self,
        id: Uuid,
        post_id: Uuid,
        content: &str,
        status: CommentStatus,
    ) -> Result<(), DomainError>;

    /// Unconditionally sets content and status for the matching
    /// `(id, post_id)` comment; matching no row is a safe no-op.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Store` if the update itself fails.
    async fn update_comment(
        &self,
        id: Uuid,
        post_id: Uuid,
        content: &str,
        status: CommentStatus,
    ) -> Result<(), DomainError>;

    /// All posts in the view, newest first.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Store` if the read fails.
    async fn posts(&self) -> Result<Vec<Post>, DomainError>;

    /// All comments in the view, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Store` if the read fails.
    async fn comments(&self) -> Result<Vec<Comment>, DomainError>;
}
