//! Storage adapter abstraction.
//!
//! Handlers only ever see [`PracticeStore`]. The concrete adapter is chosen
//! once at startup from a [`StoreConfig`] and shared as an
//! `Arc<dyn PracticeStore>`.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::StorageError;
use crate::memory::InMemoryPracticeStore;
use crate::models::practice::{NewPractice, Practice};
use crate::postgres::PgPracticeStore;

/// Persistence operations for practice records.
///
/// Implementations must be safe for concurrent use by many in-flight
/// requests. Identifiers that cannot be parsed into the backend's native id
/// format behave exactly like ids that do not exist.
#[async_trait]
pub trait PracticeStore: Send + Sync {
    /// Short label for this backend (`"postgres"`, `"mongodb"`, `"memory"`).
    fn backend_name(&self) -> &'static str;

    /// Cheap round-trip to verify the backend is reachable.
    async fn health_check(&self) -> Result<(), StorageError>;

    /// Persist a new record, returning it with its id and timestamps.
    async fn insert(&self, input: &NewPractice) -> Result<Practice, StorageError>;

    /// All records, most recently created first.
    async fn list_recent(&self) -> Result<Vec<Practice>, StorageError>;

    /// Fetch one record. `None` if absent or if `id` is malformed.
    async fn find_by_id(&self, id: &str) -> Result<Option<Practice>, StorageError>;

    /// Remove one record. Returns `true` if a record was removed.
    async fn delete_by_id(&self, id: &str) -> Result<bool, StorageError>;

    /// Records whose `practice`, `name` or `management` contains `term`,
    /// case-insensitively, most recently created first.
    ///
    /// The term is matched literally; an empty term matches every record.
    async fn search(&self, term: &str) -> Result<Vec<Practice>, StorageError>;

    /// Release the underlying connection or session. Called once at shutdown.
    async fn close(&self);
}

/// Which adapter to open, with its connection settings.
#[derive(Debug, Clone)]
pub enum StoreConfig {
    Postgres {
        database_url: String,
        max_connections: u32,
    },
    MongoDb {
        uri: String,
        database: String,
    },
    Memory,
}

impl StoreConfig {
    pub fn backend_name(&self) -> &'static str {
        match self {
            StoreConfig::Postgres { .. } => "postgres",
            StoreConfig::MongoDb { .. } => "mongodb",
            StoreConfig::Memory => "memory",
        }
    }
}

/// Open the configured adapter and verify it is reachable.
///
/// For PostgreSQL this also applies pending migrations.
pub async fn open_store(config: &StoreConfig) -> Result<Arc<dyn PracticeStore>, StorageError> {
    let store: Arc<dyn PracticeStore> = match config {
        StoreConfig::Postgres {
            database_url,
            max_connections,
        } => Arc::new(PgPracticeStore::connect(database_url, *max_connections).await?),
        StoreConfig::MongoDb { uri, database } => open_mongo(uri, database).await?,
        StoreConfig::Memory => Arc::new(InMemoryPracticeStore::new()),
    };

    store.health_check().await?;
    tracing::info!(backend = store.backend_name(), "Storage backend ready");
    Ok(store)
}

#[cfg(feature = "mongodb")]
async fn open_mongo(uri: &str, database: &str) -> Result<Arc<dyn PracticeStore>, StorageError> {
    let store = crate::mongo::MongoPracticeStore::connect(uri, database).await?;
    Ok(Arc::new(store))
}

#[cfg(not(feature = "mongodb"))]
async fn open_mongo(_uri: &str, _database: &str) -> Result<Arc<dyn PracticeStore>, StorageError> {
    Err(StorageError::Unavailable {
        backend: "mongodb",
        reason: "rebuild with the `mongodb` cargo feature".to_string(),
    })
}
