//! PostgreSQL implementation of the `PostStore` trait.

use async_trait::async_trait;
use quill_core::error::DomainError;
use quill_core::store::PostStore;
use sqlx::PgPool;
use uuid::Uuid;

fn store_err(e: sqlx::Error) -> DomainError {
    DomainError::Store(e.to_string())
}

/// PostgreSQL-backed post store.
#[derive(Debug, Clone)]
pub struct PgPostStore {
    pool: PgPool,
}

impl PgPostStore {
    /// Creates a new `PgPostStore`.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostStore for PgPostStore {
    async fn insert_post(&self, id: Uuid, title: &str) -> Result<(), DomainError> {
        sqlx::query("INSERT INTO posts (id, title) VALUES ($1, $2)")
            .bind(id)
            .bind(title)
            .execute(&self.pool)
            .await
            .map_err(store_err)?;
        Ok(())
    }
}
