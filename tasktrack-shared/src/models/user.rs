/// User model and database operations
///
/// Users own tasks. There is no update operation and no authentication:
/// the password is stored exactly as submitted.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE users (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     username TEXT NOT NULL,
///     password TEXT NOT NULL
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use tasktrack_shared::models::user::{CreateUser, UserRecord};
/// use tasktrack_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let user_id = UserRecord::create(&pool, CreateUser {
///     username: "alice".to_string(),
///     password: "secret".to_string(),
/// }).await?;
///
/// let users = UserRecord::list(&pool).await?;
/// assert!(users.iter().any(|u| u.id == user_id));
/// # Ok(())
/// # }
/// ```

use crate::schema::User;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use tracing::debug;

/// Persisted user row
///
/// Plain-text password, never hashed. Only the transport [`User`] leaves
/// the data layer through `list`.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    pub id: i64,
    pub username: String,
    pub password: String,
}

/// Input for creating a new user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub password: String,
}

impl UserRecord {
    /// Creates a new user and returns its storage-assigned ID
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or the insert fails
    pub async fn create(pool: &SqlitePool, data: CreateUser) -> Result<i64, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let result = sqlx::query("INSERT INTO users (username, password) VALUES (?, ?)")
            .bind(data.username)
            .bind(data.password)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        let id = result.last_insert_rowid();
        debug!(user_id = id, "User created");
        Ok(id)
    }

    /// Finds a user by ID
    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, UserRecord>(
            "SELECT id, username, password FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Lists every user, oldest first
    pub async fn list(pool: &SqlitePool) -> Result<Vec<User>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let users = sqlx::query_as::<_, UserRecord>(
            "SELECT id, username, password FROM users ORDER BY id",
        )
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(users.into_iter().map(User::from).collect())
    }

    /// Deletes a user by ID
    ///
    /// The user's tasks go with it (`ON DELETE CASCADE`).
    ///
    /// # Returns
    ///
    /// True if the user was deleted, false if no such user existed
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            debug!(user_id = id, "User not found for delete");
            return Ok(false);
        }

        tx.commit().await?;
        debug!(user_id = id, "User deleted");
        Ok(true)
    }
}
