//! Persistence for practice records.
//!
//! [`PracticeStore`] is the seam between the HTTP layer and storage. The
//! relational adapter is always built; the document-store adapter is behind
//! the `mongodb` feature; the in-memory adapter serves development and tests.

use sqlx::postgres::PgPoolOptions;

pub mod error;
pub mod memory;
pub mod models;
#[cfg(feature = "mongodb")]
pub mod mongo;
pub mod postgres;
pub mod repositories;
pub mod store;

pub use error::StorageError;
pub use store::{open_store, PracticeStore, StoreConfig};

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
