/// Transport schemas
///
/// These are the JSON shapes returned over HTTP. They deliberately differ
/// from the persisted records in `models`: a [`User`] never carries the
/// password column.

use crate::models::{category::CategoryRecord, task::TaskRecord, user::UserRecord};
use serde::{Deserialize, Serialize};

/// Public view of a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id,
            username: record.username,
        }
    }
}

/// Public view of a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

impl From<CategoryRecord> for Category {
    fn from(record: CategoryRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
        }
    }
}

/// Public view of a task
///
/// `description` and `category_id` serialize as `null` when unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub user_id: i64,
    pub category_id: Option<i64>,
}

impl From<TaskRecord> for Task {
    fn from(record: TaskRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            description: record.description,
            user_id: record.user_id,
            category_id: record.category_id,
        }
    }
}
