/// Category model and database operations
///
/// A category optionally classifies tasks. Deleting a category leaves its
/// tasks in place with `category_id` cleared (`ON DELETE SET NULL`).
///
/// # Schema
///
/// ```sql
/// CREATE TABLE categories (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     name TEXT NOT NULL
/// );
/// ```

use crate::schema::Category;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use tracing::debug;

/// Persisted category row
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CategoryRecord {
    pub id: i64,
    pub name: String,
}

/// Input for creating a new category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCategory {
    pub name: String,
}

impl CategoryRecord {
    /// Creates a new category and returns its storage-assigned ID
    pub async fn create(pool: &SqlitePool, data: CreateCategory) -> Result<i64, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let result = sqlx::query("INSERT INTO categories (name) VALUES (?)")
            .bind(data.name)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        let id = result.last_insert_rowid();
        debug!(category_id = id, "Category created");
        Ok(id)
    }

    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, CategoryRecord>("SELECT id, name FROM categories WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Lists every category, oldest first
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Category>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let categories =
            sqlx::query_as::<_, CategoryRecord>("SELECT id, name FROM categories ORDER BY id")
                .fetch_all(&mut *tx)
                .await?;

        tx.commit().await?;

        Ok(categories.into_iter().map(Category::from).collect())
    }

    /// Deletes a category by ID
    ///
    /// # Returns
    ///
    /// True if the category was deleted, false if no such category existed
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let result = sqlx::query("DELETE FROM categories WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            debug!(category_id = id, "Category not found for delete");
            return Ok(false);
        }

        tx.commit().await?;
        debug!(category_id = id, "Category deleted");
        Ok(true)
    }
}
