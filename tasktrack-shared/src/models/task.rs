/// Task model and database operations
///
/// Tasks are the core entity of Tasktrack. Every task belongs to exactly one
/// user and to at most one category.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE tasks (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     title TEXT NOT NULL,
///     description TEXT,
///     user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
///     category_id INTEGER REFERENCES categories(id) ON DELETE SET NULL
/// );
/// CREATE INDEX idx_tasks_category_id ON tasks(category_id);
/// ```
///
/// # Example
///
/// ```no_run
/// use tasktrack_shared::models::task::{CreateTask, TaskRecord, UpdateTask};
/// use tasktrack_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example(user_id: i64, category_id: i64) -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let task_id = TaskRecord::create(&pool, CreateTask {
///     title: "write spec".to_string(),
///     description: None,
///     user_id,
///     category_id: Some(category_id),
/// }).await?;
///
/// // Only tasks in the given categories
/// let work = TaskRecord::list(&pool, Some(&[category_id])).await?;
///
/// // Rename, keep everything else
/// TaskRecord::update(&pool, task_id, UpdateTask {
///     title: Some("write spec v2".to_string()),
///     ..Default::default()
/// }).await?;
/// # Ok(())
/// # }
/// ```

use super::empty_string_as_none;
use crate::schema::Task;
use serde::{Deserialize, Serialize};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use tracing::debug;

const TASK_COLUMNS: &str = "id, title, description, user_id, category_id";

/// Persisted task row
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct TaskRecord {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub user_id: i64,
    pub category_id: Option<i64>,
}

/// Input for creating a new task
///
/// `user_id` must name an existing user and `category_id`, when given, an
/// existing category. Otherwise the insert fails on the foreign key.
///
/// Blank optional fields (`description=`) decode as `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTask {
    pub title: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub description: Option<String>,
    pub user_id: i64,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub category_id: Option<i64>,
}

/// Input for a partial task update
///
/// Only `Some` fields are written. A field cannot be cleared back to NULL
/// through this type: a blank value decodes as `None` and leaves the stored
/// value alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTask {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub category_id: Option<i64>,
}

impl UpdateTask {
    /// True if no field was supplied
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.category_id.is_none()
    }

    /// Writes the supplied fields over `record`, leaving the rest untouched
    pub fn apply_to(self, record: &mut TaskRecord) {
        if let Some(title) = self.title {
            record.title = title;
        }
        if let Some(description) = self.description {
            record.description = Some(description);
        }
        if let Some(category_id) = self.category_id {
            record.category_id = Some(category_id);
        }
    }
}

impl TaskRecord {
    /// Creates a new task and returns its storage-assigned ID
    ///
    /// # Errors
    ///
    /// Returns a database error if `user_id` or `category_id` does not
    /// reference an existing row
    pub async fn create(pool: &SqlitePool, data: CreateTask) -> Result<i64, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let result = sqlx::query(
            r#"
            INSERT INTO tasks (title, description, user_id, category_id)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(data.title)
        .bind(data.description)
        .bind(data.user_id)
        .bind(data.category_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        let id = result.last_insert_rowid();
        debug!(task_id = id, user_id = data.user_id, "Task created");
        Ok(id)
    }

    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, TaskRecord>(&format!(
            "SELECT {} FROM tasks WHERE id = ?",
            TASK_COLUMNS
        ))
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Lists tasks, oldest first
    ///
    /// With a non-empty `category_ids`, only tasks whose category is in the
    /// set are returned. `None` or an empty slice returns every task,
    /// including uncategorized ones.
    pub async fn list(
        pool: &SqlitePool,
        category_ids: Option<&[i64]>,
    ) -> Result<Vec<Task>, sqlx::Error> {
        let mut query = QueryBuilder::<Sqlite>::new(format!("SELECT {} FROM tasks", TASK_COLUMNS));

        if let Some(ids) = category_ids.filter(|ids| !ids.is_empty()) {
            debug!(category_ids = ?ids, "Filtering tasks by category");
            query.push(" WHERE category_id IN (");
            let mut separated = query.separated(", ");
            for id in ids {
                separated.push_bind(*id);
            }
            separated.push_unseparated(")");
        }

        query.push(" ORDER BY id");

        let mut tx = pool.begin().await?;
        let tasks = query
            .build_query_as::<TaskRecord>()
            .fetch_all(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(tasks.into_iter().map(Task::from).collect())
    }

    /// Applies a partial update to a task
    ///
    /// The current row is read and written back inside one transaction, so
    /// fields absent from `data` keep their stored values.
    ///
    /// # Returns
    ///
    /// True if the task was updated, false if no such task existed
    ///
    /// # Errors
    ///
    /// Returns a database error if the new `category_id` does not reference
    /// an existing category
    pub async fn update(pool: &SqlitePool, id: i64, data: UpdateTask) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let current = sqlx::query_as::<_, TaskRecord>(&format!(
            "SELECT {} FROM tasks WHERE id = ?",
            TASK_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(mut task) = current else {
            debug!(task_id = id, "Task not found for update");
            return Ok(false);
        };

        if data.is_empty() {
            tx.commit().await?;
            return Ok(true);
        }

        data.apply_to(&mut task);

        sqlx::query(
            r#"
            UPDATE tasks
            SET title = ?, description = ?, category_id = ?
            WHERE id = ?
            "#,
        )
        .bind(task.title)
        .bind(task.description)
        .bind(task.category_id)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        debug!(task_id = id, "Task updated");
        Ok(true)
    }

    /// Deletes a task by ID
    ///
    /// # Returns
    ///
    /// True if the task was deleted, false if no such task existed
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            debug!(task_id = id, "Task not found for delete");
            return Ok(false);
        }

        tx.commit().await?;
        debug!(task_id = id, "Task deleted");
        Ok(true)
    }
}
