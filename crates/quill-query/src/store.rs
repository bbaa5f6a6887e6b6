//! PostgreSQL implementation of the `ViewStore` trait.

use async_trait::async_trait;
use quill_core::error::DomainError;
use quill_core::model::{Comment, CommentStatus, Post};
use quill_core::store::ViewStore;
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

/// PostgreSQL-backed view store.
#[derive(Debug, Clone)]
pub struct PgViewStore {
    pool: PgPool,
}

impl PgViewStore {
    /// Creates a new `PgViewStore`.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ViewStore for PgViewStore {
    async fn insert_post_if_absent(&self, id: Uuid, title: &str) -> Result<(), DomainError> {
        sqlx::query("INSERT INTO posts (id, title) VALUES ($1, $2) ON CONFLICT (id) DO NOTHING")
            .bind(id)
            .bind(title)
            .execute(&self.pool)
            .await
            .map_err(store_err)?;
        Ok(())
    }

    async fn insert_comment_if_absent(
        &self,
        id: Uuid,
        post_id: Uuid,
        content: &str,
        status: CommentStatus,
    ) -> Result<(), DomainError> {
        sqlx::query(
            "INSERT INTO comments (id, content, post_id, status) VALUES ($1, $2, $3, $4) \
             ON CONFLICT (id) DO NOTHING",
        )
        .bind(id)
        .bind(content)
        .bind(post_id)
        .bind(status.as_str())
        .execute(&self.pool)
        .await
        .map_err(store_err)?;
        Ok(())
    }

    async fn update_comment(
        &self,
        id: Uuid,
        post_id: Uuid,
        content: &str,
        status: CommentStatus,
    ) -> Result<(), DomainError> {
        sqlx::query("UPDATE comments SET content = $1, status = $2 WHERE id = $3 AND post_id = $4")
            .bind(content)
            .bind(status.as_str())
            .bind(id)
            .bind(post_id)
            .execute(&self.pool)
            .await
            .map_err(store_err)?;
        Ok(())
    }

    async fn posts(&self) -> Result<Vec<Post>, DomainError> {
        let rows = sqlx::query("SELECT id, title, created_at FROM posts ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(store_err)?;

        rows.iter()
            .map(|row| {
                Ok(Post {
                    id: row.try_get("id").map_err(store_err)?,
                    title: row.try_get("title").map_err(store_err)?,
                    created_at: row.try_get("created_at").map_err(store_err)?,
                })
            })
            .collect()
    }

    async fn comments(&self) -> Result<Vec<Comment>, DomainError> {
        let rows = sqlx::query(
            "SELECT id, post_id, content, status, created_at FROM comments \
             ORDER BY created_at ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(store_err)?;

        rows.iter().map(comment_from_row).collect()
    }
}
