use crate::{create_pool, run_migrations, users};
use async_trait::async_trait;
use roster_core::{
    error::Result,
    store::UserStore,
    types::{IdentificationNumber, NewUser, User, UserChanges},
};
use sqlx::SqlitePool;

/// `SQLite`-backed user store
///
/// Holds nothing but the pool handle; all state lives in the database.
#[derive(Debug, Clone)]
pub struct SqliteUserStore {
    pool: SqlitePool,
}

impl SqliteUserStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open the database at `database_url`, apply migrations and wrap the pool
    pub async fn connect(database_url: &str, max_connections: u32) -> crate::Result<Self> {
        let pool = create_pool(database_url, max_connections).await?;
        run_migrations(&pool).await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl UserStore for SqliteUserStore {
    async fn create(&self, new_user: NewUser) -> Result<User> {
        let id = new_user.identification_number.clone();
        let user = users::create(&self.pool, new_user).await?;
        tracing::debug!(identification_number = %id, "User created");
        Ok(user)
    }

    async fn list_active(&self) -> Result<Vec<User>> {
        Ok(users::get_active(&self.pool).await?)
    }

    async fn get_active(&self, id: &IdentificationNumber) -> Result<User> {
        Ok(users::get_active_by_id(&self.pool, id).await?)
    }

    async fn update(&self, id: &IdentificationNumber, changes: UserChanges) -> Result<User> {
        let user = users::update(&self.pool, id, changes).await?;
        tracing::debug!(identification_number = %id, "User updated");
        Ok(user)
    }

    async fn soft_delete(&self, id: &IdentificationNumber) -> Result<()> {
        users::soft_delete(&self.pool, id).await?;
        tracing::info!(identification_number = %id, "User soft-deleted");
        Ok(())
    }

    async fn restore(&self, id: &IdentificationNumber) -> Result<User> {
        let user = users::restore(&self.pool, id).await?;
        tracing::info!(identification_number = %id, "User restored");
        Ok(user)
    }
}
