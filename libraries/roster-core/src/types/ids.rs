/// Identifier types for Roster entities
use serde::{Deserialize, Serialize};
use std::fmt;

#[cfg(feature = "sqlx-support")]
use sqlx::{
    encode::IsNull,
    error::BoxDynError,
    sqlite::{SqliteArgumentValue, SqliteTypeInfo, SqliteValueRef},
    Decode, Encode, Sqlite, Type,
};

/// Caller-assigned identification number of a user record.
///
/// This is the natural key of the roster: unique across every record ever
/// created, including soft-deleted ones, and immutable once assigned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdentificationNumber(String);

impl IdentificationNumber {
    /// Create a new identification number
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IdentificationNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for IdentificationNumber {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for IdentificationNumber {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(feature = "sqlx-support")]
impl Type<Sqlite> for IdentificationNumber {
    fn type_info() -> SqliteTypeInfo {
        <String as Type<Sqlite>>::type_info()
    }
}

#[cfg(feature = "sqlx-support")]
impl<'q> Encode<'q, Sqlite> for IdentificationNumber {
    fn encode_by_ref(
        &self,
        args: &mut Vec<SqliteArgumentValue<'q>>,
    ) -> Result<IsNull, BoxDynError> {
        <String as Encode<Sqlite>>::encode_by_ref(&self.0, args)
    }
}

#[cfg(feature = "sqlx-support")]
impl<'r> Decode<'r, Sqlite> for IdentificationNumber {
    fn decode(value: SqliteValueRef<'r>) -> Result<Self, BoxDynError> {
        let s = <String as Decode<Sqlite>>::decode(value)?;
        Ok(IdentificationNumber(s))
    }
}
