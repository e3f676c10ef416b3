//! Roster Core
//!
//! Domain types, the record store contract, and error handling shared by the
//! storage layer and the HTTP server.
//!
//! # Architecture
//!
//! - **Domain Types**: `User`, `NewUser`, `UserChanges`, `IdentificationNumber`
//! - **Store Contract**: `UserStore`, implemented by `roster-storage`
//! - **Error Handling**: unified `RosterError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use roster_core::types::{IdentificationNumber, NewUser, UserChanges};
//!
//! let new_user = NewUser::new("0001", "Ada", "Lovelace");
//! assert_eq!(new_user.identification_number, IdentificationNumber::new("0001"));
//!
//! let changes = UserChanges::default().with_first_name("Augusta");
//! assert!(!changes.is_empty());
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod store;
pub mod types;

pub use error::{Result, RosterError};
pub use store::UserStore;
pub use types::{IdentificationNumber, NewUser, RecordState, User, UserChanges};
