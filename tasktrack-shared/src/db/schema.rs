/// Table definitions and storage reset
///
/// There is no versioned migration history. Tables are created with
/// `IF NOT EXISTS`, and [`reset_tables`] drops and recreates everything.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE users (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     username TEXT NOT NULL,
///     password TEXT NOT NULL
/// );
///
/// CREATE TABLE categories (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     name TEXT NOT NULL
/// );
///
/// CREATE TABLE tasks (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     title TEXT NOT NULL,
///     description TEXT,
///     user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
///     category_id INTEGER REFERENCES categories(id) ON DELETE SET NULL
/// );
/// ```

use sqlx::SqlitePool;
use tracing::{debug, info, warn};

/// Table names in dependency order (referenced tables first)
pub const TABLES: [&str; 3] = ["users", "categories", "tasks"];

const CREATE_STATEMENTS: [&str; 4] = [
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        username TEXT NOT NULL,
        password TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS categories (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS tasks (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        description TEXT,
        user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
        category_id INTEGER REFERENCES categories(id) ON DELETE SET NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_tasks_category_id ON tasks(category_id)",
];

/// Creates all tables that do not exist yet
///
/// Safe to call on every startup; existing rows are left alone.
pub async fn create_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    for statement in CREATE_STATEMENTS {
        sqlx::query(statement).execute(&mut *tx).await?;
    }

    tx.commit().await?;
    info!("Database tables ready");
    Ok(())
}

/// Drops every table, dependents first
pub async fn drop_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    for table in TABLES.iter().rev() {
        debug!(table = %table, "Dropping table");
        sqlx::query(&format!("DROP TABLE IF EXISTS {}", table))
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;
    info!("Database tables dropped");
    Ok(())
}

/// Drops and recreates all tables (DESTROYS ALL DATA)
///
/// Only meant for development and demos where state across restarts is not
/// wanted.
pub async fn reset_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    warn!("Resetting database, all existing rows will be discarded");
    drop_tables(pool).await?;
    create_tables(pool).await
}

/// Returns true if every application table exists
pub async fn tables_exist(pool: &SqlitePool) -> Result<bool, sqlx::Error> {
    let (count,): (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name IN ('users', 'categories', 'tasks')",
    )
    .fetch_one(pool)
    .await?;

    Ok(count as usize == TABLES.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_in_dependency_order() {
        assert_eq!(TABLES.last(), Some(&"tasks"));
    }

    #[test]
    fn test_tasks_table_declares_delete_policies() {
        let tasks_ddl = CREATE_STATEMENTS[2];
        assert!(tasks_ddl.contains("REFERENCES users(id) ON DELETE CASCADE"));
        assert!(tasks_ddl.contains("REFERENCES categories(id) ON DELETE SET NULL"));
    }
}
