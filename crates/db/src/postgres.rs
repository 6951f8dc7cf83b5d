//! Relational adapter backed by PostgreSQL through sqlx.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::StorageError;
use crate::models::practice::{NewPractice, Practice};
use crate::repositories::PracticeRepo;
use crate::store::PracticeStore;
use crate::DbPool;

/// [`PracticeStore`] over a pooled PostgreSQL connection.
#[derive(Clone)]
pub struct PgPracticeStore {
    pool: DbPool,
}

impl PgPracticeStore {
    /// Wrap an existing pool. Migrations are assumed to be applied.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Connect, check the database and apply pending migrations.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StorageError> {
        let pool = crate::create_pool(database_url, max_connections).await?;
        tracing::info!(max_connections, "Database connection pool created");

        crate::health_check(&pool).await?;
        tracing::info!("Database health check passed");

        crate::run_migrations(&pool).await?;
        tracing::info!("Database migrations applied");

        Ok(Self::new(pool))
    }
}

/// Parse a client-supplied id. Anything that is not a UUID cannot exist.
fn parse_id(id: &str) -> Option<Uuid> {
    Uuid::parse_str(id).ok()
}

#[async_trait]
impl PracticeStore for PgPracticeStore {
    fn backend_name(&self) -> &'static str {
        "postgres"
    }

    async fn health_check(&self) -> Result<(), StorageError> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }

    async fn insert(&self, input: &NewPractice) -> Result<Practice, StorageError> {
        Ok(PracticeRepo::create(&self.pool, input).await?)
    }

    async fn list_recent(&self) -> Result<Vec<Practice>, StorageError> {
        Ok(PracticeRepo::list(&self.pool).await?)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Practice>, StorageError> {
        let Some(id) = parse_id(id) else {
            return Ok(None);
        };
        Ok(PracticeRepo::find_by_id(&self.pool, id).await?)
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, StorageError> {
        let Some(id) = parse_id(id) else {
            return Ok(false);
        };
        Ok(PracticeRepo::delete(&self.pool, id).await?)
    }

    async fn search(&self, term: &str) -> Result<Vec<Practice>, StorageError> {
        Ok(PracticeRepo::search(&self.pool, term).await?)
    }

    async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Database connection pool closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_ids_parse() {
        assert!(parse_id("0190c3a4-5b6e-7c8d-9e0f-1a2b3c4d5e6f").is_some());
    }

    #[test]
    fn malformed_ids_do_not_parse() {
        assert!(parse_id("").is_none());
        assert!(parse_id("42").is_none());
        assert!(parse_id("65a1f0c2e4b0a1b2c3d4e5f6").is_none());
    }
}
