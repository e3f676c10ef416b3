/// Storage-specific errors
use roster_core::{IdentificationNumber, RosterError};
use thiserror::Error;

/// Result type alias using `StorageError`
pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// Unique constraint on the identification number was hit
    #[error("Identification number {0} is already taken")]
    DuplicateKey(IdentificationNumber),

    /// No row matched the id and state predicate
    #[error("User not found: {0}")]
    NotFound(IdentificationNumber),

    /// Migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Stored value could not be turned back into a domain value
    #[error("Corrupt row: {0}")]
    CorruptRow(String),

    /// Database error from `SQLx`
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl From<StorageError> for RosterError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::DuplicateKey(id) => RosterError::DuplicateKey(id),
            StorageError::NotFound(id) => RosterError::NotFound(id),
            StorageError::Database(e) => RosterError::Database(e.to_string()),
            other => RosterError::storage(other.to_string()),
        }
    }
}
