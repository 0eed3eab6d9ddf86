/// Database layer for Tasktrack
///
/// This module provides database connection pooling and table management.
///
/// # Modules
///
/// - `pool`: SQLite connection pool management with health checks
/// - `schema`: Table definitions and the startup reset
/// - Models are in the `models` module at crate root level
///
/// # Example
///
/// ```no_run
/// use tasktrack_shared::db::{pool::{create_pool, DatabaseConfig}, schema};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let pool = create_pool(DatabaseConfig::default()).await?;
///     schema::create_tables(&pool).await?;
///     Ok(())
/// }
/// ```

pub mod pool;
pub mod schema;
