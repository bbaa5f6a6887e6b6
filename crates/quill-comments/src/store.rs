//! PostgreSQL implementation of the `CommentStore` trait.

use async_trait::async_trait;
use quill_core::error::DomainError;
use quill_core::model::{Comment, CommentStatus};
use quill_core::store::CommentStore;
use sqlx::{PgPool, Row};
use uuid::Uuid;

fn store_err(e: sqlx::Error) -> DomainError {
    DomainError::Store(e.to_string())
}

fn comment_from_row(row: &sqlx::postgres::PgRow) -> Result<Comment, DomainError> {
    let status: String = row.try_get("status").map_err(store_err)?;
    Ok(Comment {
        id: row.try_get("id").map_err(store_err)?,
        post_id: row.try_get("post_id").map_err(store_err)?,
        content: row.try_get("content").map_err(store_err)?,
        status: status.parse()?,
        created_at: row.try_get("created_at").map_err(store_err)?,
    })
}

/// PostgreSQL-backed comment store.
#[derive(Debug, Clone)]
pub struct PgCommentStore {
    pool: PgPool,
}

impl PgCommentStore {
    /// Creates a new `PgCommentStore`.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentStore for PgCommentStore {
    async fn insert_comment(
        &self,
        id: Uuid,
        post_id: Uuid,
        content: &str,
        status: CommentStatus,
    ) -> Result<(), DomainError> {
        sqlx::query("INSERT INTO comments (id, content, post_id, status) VALUES ($1, $2, $3, $4)")
            .bind(id)
            .bind(content)
            .bind(post_id)
            .bind(status.as_str())
            .execute(&self.pool)
            .await
            .map_err(store_err)?;
        Ok(())
    }

    async fn comments_for_post(&self, post_id: Uuid) -> Result<Vec<Comment>, DomainError> {
        let rows = sqlx::query(
            "SELECT id, post_id, content, status, created_at FROM comments \
             WHERE post_id = $1 ORDER BY created_at ASC",
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await
        .map_err(store_err)?;

        rows.iter().map(comment_from_row).collect()
    }

    async fn set_moderation(
        &self,
        id: Uuid,
        post_id: Uuid,
        status: CommentStatus,
        content: &str,
    ) -> Result<(), DomainError> {
        // Matching zero rows is fine: the moderation event outran creation.
        sqlx::query("UPDATE comments SET status = $1, content = $2 WHERE id = $3 AND post_id = $4")
            .bind(status.as_str())
            .bind(content)
            .bind(id)
            .bind(post_id)
            .execute(&self.pool)
            .await
            .map_err(store_err)?;
        Ok(())
    }
}
