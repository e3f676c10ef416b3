/// User record domain types
use super::IdentificationNumber;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Soft-delete state of a record.
///
/// `Active` is the initial state. The only transitions are
/// `Active -> Deleted` (soft delete) and `Deleted -> Active` (restore).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordState {
    Active,
    Deleted,
}

impl RecordState {
    /// Convert to string representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Deleted => "deleted",
        }
    }

    /// Derive the state from the persisted `deleted` flag
    #[must_use]
    pub fn from_deleted_flag(deleted: bool) -> Self {
        if deleted {
            Self::Deleted
        } else {
            Self::Active
        }
    }
}

impl std::fmt::Display for RecordState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A persisted user record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Natural key, immutable after creation
    pub identification_number: IdentificationNumber,

    pub first_name: String,

    pub last_name: String,

    /// Free-form notes
    pub history: Option<String>,

    /// Set once at creation
    pub date_created: DateTime<Utc>,

    /// Set at creation, refreshed on every accepted update
    pub date_updated: DateTime<Utc>,

    pub deleted: bool,

    /// Set on soft delete, cleared on restore
    pub date_deleted: Option<DateTime<Utc>>,
}

impl User {
    /// Current soft-delete state
    #[must_use]
    pub fn state(&self) -> RecordState {
        RecordState::from_deleted_flag(self.deleted)
    }
}

/// Normalized payload for creating a record.
///
/// Produced by a validation front-end. It has no `deleted` or date fields, so
/// callers cannot influence them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub identification_number: IdentificationNumber,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub history: Option<String>,
}

impl NewUser {
    pub fn new(
        identification_number: impl Into<IdentificationNumber>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            identification_number: identification_number.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            history: None,
        }
    }

    #[must_use]
    pub fn with_history(mut self, history: impl Into<String>) -> Self {
        self.history = Some(history.into());
        self
    }
}

/// Normalized partial update.
///
/// Only the mutable fields exist here; `None` leaves the stored value as is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserChanges {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub history: Option<String>,
}

impl UserChanges {
    #[must_use]
    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    #[must_use]
    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    #[must_use]
    pub fn with_history(mut self, history: impl Into<String>) -> Self {
        self.history = Some(history.into());
        self
    }

    /// True when no field would change. Applying it still refreshes
    /// `date_updated`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none() && self.history.is_none()
    }
}
