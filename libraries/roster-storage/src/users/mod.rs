//! User record queries
//!
//! Each function is a single SQL statement whose `WHERE` clause carries the
//! state predicate, so the existence check and the write cannot race.

use crate::{Result, StorageError};
use chrono::{DateTime, Utc};
use roster_core::types::{IdentificationNumber, NewUser, User, UserChanges};
use sqlx::SqlitePool;

const USER_COLUMNS: &str = "identification_number, first_name, last_name, history, \
     date_created, date_updated, deleted, date_deleted";

#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    identification_number: IdentificationNumber,
    first_name: String,
    last_name: String,
    history: Option<String>,
    date_created: i64,
    date_updated: i64,
    deleted: bool,
    date_deleted: Option<i64>,
}

impl TryFrom<UserRow> for User {
    type Error = StorageError;

    fn try_from(row: UserRow) -> Result<Self> {
        Ok(User {
            date_created: from_micros(row.date_created)?,
            date_updated: from_micros(row.date_updated)?,
            date_deleted: row.date_deleted.map(from_micros).transpose()?,
            identification_number: row.identification_number,
            first_name: row.first_name,
            last_name: row.last_name,
            history: row.history,
            deleted: row.deleted,
        })
    }
}

fn now_micros() -> i64 {
    Utc::now().timestamp_micros()
}

fn from_micros(micros: i64) -> Result<DateTime<Utc>> {
    let secs = micros.div_euclid(1_000_000);
    let nanos = (micros.rem_euclid(1_000_000) * 1_000) as u32;
    DateTime::from_timestamp(secs, nanos)
        .ok_or_else(|| StorageError::CorruptRow(format!("timestamp out of range: {micros}")))
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_unique_violation())
}

/// Insert a new active record
///
/// Uniqueness is enforced by the `UNIQUE` constraint, which covers deleted
/// rows as well.
pub async fn create(pool: &SqlitePool, new_user: NewUser) -> Result<User> {
    let now = now_micros();
    let sql = format!(
        "INSERT INTO users
             (identification_number, first_name, last_name, history,
              date_created, date_updated, deleted, date_deleted)
         VALUES (?, ?, ?, ?, ?, ?, 0, NULL)
         RETURNING {USER_COLUMNS}"
    );

    let row = sqlx::query_as::<_, UserRow>(&sql)
        .bind(&new_user.identification_number)
        .bind(&new_user.first_name)
        .bind(&new_user.last_name)
        .bind(&new_user.history)
        .bind(now)
        .bind(now)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                StorageError::DuplicateKey(new_user.identification_number.clone())
            } else {
                StorageError::Database(e)
            }
        })?;

    row.try_into()
}

/// Get all active records in insertion order
pub async fn get_active(pool: &SqlitePool) -> Result<Vec<User>> {
    let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE deleted = 0 ORDER BY id");

    let rows = sqlx::query_as::<_, UserRow>(&sql).fetch_all(pool).await?;

    rows.into_iter().map(User::try_from).collect()
}

/// Get an active record by identification number
pub async fn get_active_by_id(pool: &SqlitePool, id: &IdentificationNumber) -> Result<User> {
    let sql = format!(
        "SELECT {USER_COLUMNS} FROM users WHERE identification_number = ? AND deleted = 0"
    );

    sqlx::query_as::<_, UserRow>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| StorageError::NotFound(id.clone()))?
        .try_into()
}

/// Apply changes to an active record
///
/// `date_updated` moves to now, or one microsecond past its previous value if
/// the clock has not advanced, so it strictly increases.
pub async fn update(
    pool: &SqlitePool,
    id: &IdentificationNumber,
    changes: UserChanges,
) -> Result<User> {
    let sql = format!(
        "UPDATE users
         SET first_name = COALESCE(?, first_name),
             last_name = COALESCE(?, last_name),
             history = COALESCE(?, history),
             date_updated = MAX(?, date_updated + 1)
         WHERE identification_number = ? AND deleted = 0
         RETURNING {USER_COLUMNS}"
    );

    sqlx::query_as::<_, UserRow>(&sql)
        .bind(changes.first_name)
        .bind(changes.last_name)
        .bind(changes.history)
        .bind(now_micros())
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| StorageError::NotFound(id.clone()))?
        .try_into()
}

/// Mark an active record deleted
pub async fn soft_delete(pool: &SqlitePool, id: &IdentificationNumber) -> Result<()> {
    let result = sqlx::query(
        "UPDATE users SET deleted = 1, date_deleted = ?
         WHERE identification_number = ? AND deleted = 0",
    )
    .bind(now_micros())
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(StorageError::NotFound(id.clone()));
    }

    Ok(())
}

/// Restore a deleted record
pub async fn restore(pool: &SqlitePool, id: &IdentificationNumber) -> Result<User> {
    let sql = format!(
        "UPDATE users SET deleted = 0, date_deleted = NULL
         WHERE identification_number = ? AND deleted = 1
         RETURNING {USER_COLUMNS}"
    );

    sqlx::query_as::<_, UserRow>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| StorageError::NotFound(id.clone()))?
        .try_into()
}

/// Count records regardless of state
pub async fn count_all(pool: &SqlitePool) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;

    Ok(count)
}
