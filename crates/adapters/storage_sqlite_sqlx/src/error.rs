//! Storage-specific error type wrapping sqlx errors.

use itech_domain::error::ItechError;

/// Errors originating from the `SQLite` storage layer.
///
/// The display text is the engine's own message (e.g. `no such table:
/// products`) so it can be surfaced to clients verbatim.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query or connection failed.
    #[error("{}", engine_message(.0))]
    Database(#[from] sqlx::Error),
}

fn engine_message(err: &sqlx::Error) -> String {
    match err {
        sqlx::Error::Database(db_err) => db_err.message().to_string(),
        other => other.to_string(),
    }
}

impl From<StorageError> for ItechError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
