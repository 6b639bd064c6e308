//! Error types for the product transform
//!
//! "No author link" is not an error: it is `Ok(None)` from the resolver.
//! Everything in here aborts the whole batch.

use thiserror::Error;

/// Result type alias for transform operations
pub type Result<T> = std::result::Result<T, ExportError>;

/// Store-level failure, split by whether the store could be reached at all
#[derive(Error, Debug)]
pub enum StoreError {
    /// The database could not be reached or the connection dropped
    #[error("Database connection failed. Check DB_HOST/DB_PORT and that the server is reachable")]
    Connectivity(#[source] sqlx::Error),

    /// The query was rejected or its rows did not match the expected shape
    #[error("Database query failed")]
    Query(#[source] sqlx::Error),
}

impl StoreError {
    pub fn is_connectivity(&self) -> bool {
        matches!(self, StoreError::Connectivity(_))
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => StoreError::Connectivity(err),
            _ => StoreError::Query(err),
        }
    }
}

/// Pipeline error surfaced to the caller
#[derive(Error, Debug)]
pub enum ExportError {
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A link row points at a character that does not exist
    #[error("Data integrity violation: product {product_id} links to missing character {character_id}")]
    DataIntegrity { product_id: i32, character_id: i32 },

    #[error("Batch limit must be positive, got {0}")]
    InvalidBatchLimit(i64),
}
