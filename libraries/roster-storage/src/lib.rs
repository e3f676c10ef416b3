//! Roster Storage
//!
//! `SQLite` persistence for user records.
//!
//! # Architecture
//!
//! - **Single statement per operation**: every store operation is one
//!   conditional `INSERT`/`UPDATE ... RETURNING`, so state checks and writes
//!   never race
//! - **Soft delete**: rows are never removed; the `deleted` flag drives
//!   visibility
//! - **Vertical slicing**: the `users` module owns its queries
//!
//! # Example
//!
//! ```rust,no_run
//! use roster_core::{NewUser, UserStore};
//! use roster_storage::SqliteUserStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = SqliteUserStore::connect("sqlite://roster.db", 5).await?;
//!
//! let user = store.create(NewUser::new("0001", "Ada", "Lovelace")).await?;
//! assert!(!user.deleted);
//! # Ok(())
//! # }
//! ```

mod context;
mod error;

pub mod users;

pub use context::SqliteUserStore;
pub use error::{Result, StorageError};

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// Call once at startup, before the pool is handed to a store.
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    MIGRATOR.run(pool).await?;
    tracing::debug!("Database migrations applied");
    Ok(())
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `sqlite://roster.db`)
/// * `max_connections` - Upper bound on pooled connections
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!(database_url, "Creating SQLite pool");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    tracing::debug!(max_connections, "SQLite pool created");

    Ok(pool)
}
