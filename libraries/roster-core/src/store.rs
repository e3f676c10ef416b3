//! Record store contract

use crate::error::Result;
use crate::types::{IdentificationNumber, NewUser, User, UserChanges};
use async_trait::async_trait;

/// Persistent store of user records with soft-delete semantics.
///
/// Every method is one atomic conditional operation against the backing
/// store. Visibility rules:
///
/// - `get_active`, `update` and `soft_delete` only see active records
/// - `restore` only sees deleted records
/// - `create` sees every record when checking uniqueness
///
/// A record outside the required state is reported as
/// [`RosterError::NotFound`](crate::RosterError::NotFound), indistinguishable
/// from one that never existed.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new active record.
    ///
    /// Fails with `DuplicateKey` if the identification number is taken by
    /// any record, deleted ones included.
    async fn create(&self, new_user: NewUser) -> Result<User>;

    /// All active records in insertion order
    async fn list_active(&self) -> Result<Vec<User>>;

    /// The active record with this identification number
    async fn get_active(&self, id: &IdentificationNumber) -> Result<User>;

    /// Apply `changes` to an active record and refresh `date_updated`
    async fn update(&self, id: &IdentificationNumber, changes: UserChanges) -> Result<User>;

    /// Mark an active record deleted and stamp `date_deleted`
    async fn soft_delete(&self, id: &IdentificationNumber) -> Result<()>;

    /// Bring a deleted record back and clear `date_deleted`
    async fn restore(&self, id: &IdentificationNumber) -> Result<User>;
}
