/// Core error types for Roster
use crate::types::IdentificationNumber;
use thiserror::Error;

/// Result type alias using `RosterError`
pub type Result<T> = std::result::Result<T, RosterError>;

/// Core error type for Roster
#[derive(Error, Debug)]
pub enum RosterError {
    /// A record with this identification number already exists, deleted or not
    #[error("Identification number {0} is already taken")]
    DuplicateKey(IdentificationNumber),

    /// No record in the state the operation requires
    #[error("User not found: {0}")]
    NotFound(IdentificationNumber),

    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Database errors (for storage implementations)
    #[error("Database error: {0}")]
    Database(String),
}

impl RosterError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Whether this error means the target record was not in the required state
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

#[cfg(feature = "sqlx-support")]
impl From<sqlx::Error> for RosterError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_key_message() {
        let err = RosterError::DuplicateKey(IdentificationNumber::new("0001"));
        assert_eq!(err.to_string(), "Identification number 0001 is already taken");
    }

    #[test]
    fn test_is_not_found() {
        assert!(RosterError::NotFound(IdentificationNumber::new("x")).is_not_found());
        assert!(!RosterError::storage("disk full").is_not_found());
    }
}
