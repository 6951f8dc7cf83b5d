/// Failure reported by a storage adapter.
///
/// The `Display` text is the backend's own message; the HTTP layer passes it
/// through to clients unchanged.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[cfg(feature = "mongodb")]
    #[error(transparent)]
    Mongo(#[from] mongodb::error::Error),

    /// The configured backend was not compiled into this binary.
    #[error("{backend} storage backend is not available: {reason}")]
    Unavailable {
        backend: &'static str,
        reason: String,
    },

    #[error("{0}")]
    Backend(String),
}
