use thiserror::Error;

/// Errors from the climate store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to open the database.
    #[error("database connection failed: {0}")]
    Connect(#[source] sqlx::Error),

    /// A read query failed.
    #[error("query failed: {0}")]
    Query(#[from] sqlx::Error),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
