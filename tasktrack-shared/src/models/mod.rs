/// Database models for Tasktrack
///
/// This module contains the persisted records and their CRUD operations.
/// Every operation is its own unit of work: it borrows one pooled
/// connection, runs inside a transaction and commits before returning. An
/// early return or error drops the transaction, which rolls it back and
/// releases the connection.
///
/// # Models
///
/// - `user`: Task owners (plain-text credentials, no auth)
/// - `category`: Optional task classification
/// - `task`: Tasks, filterable by category and partially updatable
///
/// # Example
///
/// ```no_run
/// use tasktrack_shared::models::category::{CategoryRecord, CreateCategory};
/// use tasktrack_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let category_id = CategoryRecord::create(&pool, CreateCategory {
///     name: "work".to_string(),
/// }).await?;
/// # Ok(())
/// # }
/// ```

pub mod category;
pub mod task;
pub mod user;

use serde::{de, Deserialize, Deserializer};
use std::{fmt, str::FromStr};

/// Decodes an optional form field, treating a blank value as absent
///
/// HTML forms submit unfilled inputs as `field=`, which would otherwise fail
/// to parse as a number or be stored as an empty string.
pub(crate) fn empty_string_as_none<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw = Option::<String>::deserialize(de)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(value) => value.parse::<T>().map(Some).map_err(de::Error::custom),
    }
}
