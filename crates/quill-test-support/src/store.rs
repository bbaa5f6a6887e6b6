//! Mock store implementations for tests.
//!
//! The in-memory stores mirror the Postgres semantics the services rely on:
//! insert-if-absent keyed by ID for view writes, unconditional single-row
//! updates that no-op when the row is missing, and insertion-ordered reads.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use quill_core::error::DomainError;
use quill_core::model::{Comment, CommentStatus, Post};
use quill_core::store::{CommentStore, PostStore, ViewStore};
use uuid::Uuid;

fn store_error() -> DomainError {
    DomainError::Store("connection refused".into())
}

/// An in-memory `PostStore` recording inserts in order.
#[derive(Debug, Default)]
pub struct InMemoryPostStore {
    posts: Mutex<Vec<Post>>,
}

impl InMemoryPostStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all posts, in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn posts(&self) -> Vec<Post> {
        self.posts.lock().unwrap().clone()
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn insert_post(&self, id: Uuid, title: &str) -> Result<(), DomainError> {
        let mut posts = self.posts.lock().unwrap();
        if posts.iter().any(|p| p.id == id) {
            return Err(DomainError::Store(format!("duplicate post id {id}")));
        }
        posts.push(Post {
            id,
            title: title.to_owned(),
            created_at: Utc::now(),
        });
        Ok(())
    }
}

/// A `PostStore` that fails every call.
#[derive(Debug, Default)]
pub struct FailingPostStore;

#[async_trait]
impl PostStore for FailingPostStore {
    async fn insert_post(&self, _id: Uuid, _title: &str) -> Result<(), DomainError> {
        Err(store_error())
    }
}

/// An in-memory `CommentStore` recording inserts in order.
#[derive(Debug, Default)]
pub struct InMemoryCommentStore {
    comments: Mutex<Vec<Comment>>,
}

impl InMemoryCommentStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all comments, in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn comments(&self) -> Vec<Comment> {
        self.comments.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommentStore for InMemoryCommentStore {
    async fn insert_comment(
        &self,
        id: Uuid,
        post_id: Uuid,
        content: &str,
        status: CommentStatus,
    ) -> Result<(), DomainError> {
        let mut comments = self.comments.lock().unwrap();
        if comments.iter().any(|c| c.id == id) {
            return Err(DomainError::Store(format!("duplicate comment id {id}")));
        }
        comments.push(Comment {
            id,
            post_id,
            content: content.to_owned(),
            status,
            created_at: Utc::now(),
        });
        Ok(())
    }

    async fn comments_for_post(&self, post_id: Uuid) -> Result<Vec<Comment>, DomainError> {
        Ok(self
            .comments
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect())
    }

    async fn set_moderation(
        &self,
        id: Uuid,
        post_id: Uuid,
        status: CommentStatus,
        content: &str,
    ) -> Result<(), DomainError> {
        let mut comments = self.comments.lock().unwrap();
        if let Some(comment) = comments.iter_mut().find(|c| c.id == id && c.post_id == post_id) {
            comment.status = status;
            comment.content = content.to_owned();
        }
        Ok(())
    }
}

/// A `CommentStore` that fails every call.
#[derive(Debug, Default)]
pub struct FailingCommentStore;

#[async_trait]
impl CommentStore for FailingCommentStore {
    async fn insert_comment(
        &self,
        _id: Uuid,
        _post_id: Uuid,
        _content: &str,
        _status: CommentStatus,
    ) -> Result<(), DomainError> {
        Err(store_error())
    }

    async fn comments_for_post(&self, _post_id: Uuid) -> Result<Vec<Comment>, DomainError> {
        Err(store_error())
    }

    async fn set_moderation(
        &self,
        _id: Uuid,
        _post_id: Uuid,
        _status: CommentStatus,
        _content: &str,
    ) -> Result<(), DomainError> {
        Err(store_error())
    }
}

/// An in-memory `ViewStore` with the idempotent write semantics the query
/// projector depends on.
#[derive(Debug, Default)]
pub struct InMemoryViewStore {
    posts: Mutex<Vec<Post>>,
    comments: Mutex<Vec<Comment>>,
}

impl InMemoryViewStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `(id, title)` for every post, in insertion order. Timestamps
    /// are excluded so states built at different times compare equal.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn post_rows(&self) -> Vec<(Uuid, String)> {
        self.posts
            .lock()
            .unwrap()
            .iter()
            .map(|p| (p.id, p.title.clone()))
            .collect()
    }

    /// Returns `(id, post_id, content, status)` for every comment, in
    /// insertion order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn comment_rows(&self) -> Vec<(Uuid, Uuid, String, CommentStatus)> {
        self.comments
            .lock()
            .unwrap()
            .iter()
            .map(|c| (c.id, c.post_id, c.content.clone(), c.status))
            .collect()
    }
}

#[async_trait]
impl ViewStore for InMemoryViewStore {
    async fn insert_post_if_absent(&self, id: Uuid, title: &str) -> Result<(), DomainError> {
        let mut posts = self.posts.lock().unwrap();
        if !posts.iter().any(|p| p.id == id) {
            posts.push(Post {
                id,
                title: title.to_owned(),
                created_at: Utc::now(),
            });
        }
        Ok(())
    }

    async fn insert_comment_if_absent(
        &self,
        id: Uuid,
        post_id: Uuid,
        content: &str,
        status: CommentStatus,
    ) -> Result<(), DomainError> {
        let mut comments = self.comments.lock().unwrap();
        if !comments.iter().any(|c| c.id == id) {
            comments.push(Comment {
                id,
                post_id,
                content: content.to_owned(),
                status,
                created_at: Utc::now(),
            });
        }
        Ok(())
    }

    async fn update_comment(
        &self,
        id: Uuid,
        post_id: Uuid,
        content: &str,
        status: CommentStatus,
    ) -> Result<(), DomainError> {
        let mut comments = self.comments.lock().unwrap();
        if let Some(comment) = comments.iter_mut().find(|c| c.id == id && c.post_id == post_id) {
            comment.content = content.to_owned();
            comment.status = status;
        }
        Ok(())
    }

    async fn posts(&self) -> Result<Vec<Post>, DomainError> {
        let mut posts = self.posts.lock().unwrap().clone();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }

    async fn comments(&self) -> Result<Vec<Comment>, DomainError> {
        let mut comments = self.comments.lock().unwrap().clone();
        comments.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(comments)
    }
}

/// A `ViewStore` that fails every call.
#[derive(Debug, Default)]
pub struct FailingViewStore;

#[async_trait]
impl ViewStore for FailingViewStore {
    async fn insert_post_if_absent(&self, _id: Uuid, _title: &str) -> Result<(), DomainError> {
        Err(store_error())
    }

    async fn insert_comment_if_absent(
        &self,
        _id: Uuid,
        _post_id: Uuid,
        _content: &str,
        _status: CommentStatus,
    ) -> Result<(), DomainError> {
        Err(store_error())
    }

    async fn update_comment(
        &self,
        _id: Uuid,
        _post_id: Uuid,
        _content: &str,
        _status: CommentStatus,
    ) -> Result<(), DomainError> {
        Err(store_error())
    }

    async fn posts(&self) -> Result<Vec<Post>, DomainError> {
        Err(store_error())
    }

    async fn comments(&self) -> Result<Vec<Comment>, DomainError> {
        Err(store_error())
    }
}
