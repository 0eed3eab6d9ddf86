/// Integration tests for the database connection pool
///
/// These run against SQLite, either in memory or in a scratch file under the
/// system temp directory, so no database server is required.

use tasktrack_shared::db::pool::{close_pool, create_pool, get_pool_stats, health_check, DatabaseConfig};

#[tokio::test]
async fn test_create_in_memory_pool() {
    let pool = create_pool(DatabaseConfig::in_memory())
        .await
        .expect("Failed to create pool");

    let stats = get_pool_stats(&pool);
    assert_eq!(stats.total_connections, 1);
    assert_eq!(stats.idle_connections + stats.active_connections, 1);

    close_pool(pool).await;
}

#[tokio::test]
async fn test_create_pool_with_unreachable_path() {
    let config = DatabaseConfig {
        url: "sqlite:///nonexistent-tasktrack-dir/nested/tasks.db".to_string(),
        ..DatabaseConfig::in_memory()
    };

    let result = create_pool(config).await;
    assert!(result.is_err(), "Should fail when the file cannot be created");
}

#[tokio::test]
async fn test_create_pool_creates_missing_file() {
    let path = std::env::temp_dir().join(format!("tasktrack-pool-{}.db", std::process::id()));
    let _ = std::fs::remove_file(&path);

    let config = DatabaseConfig {
        url: format!("sqlite://{}", path.display()),
        max_connections: 2,
        ..Default::default()
    };

    let pool = create_pool(config).await.expect("Failed to create pool");
    assert!(path.exists(), "Database file should be created");

    close_pool(pool).await;
    let _ = std::fs::remove_file(&path);
}

#[tokio::test]
async fn test_health_check_success() {
    let pool = create_pool(DatabaseConfig::in_memory()).await.unwrap();

    assert!(health_check(&pool).await.is_ok(), "Health check should succeed");

    close_pool(pool).await;
}

#[tokio::test]
async fn test_foreign_keys_enabled() {
    let pool = create_pool(DatabaseConfig::in_memory()).await.unwrap();

    let (enabled,): (i64,) = sqlx::query_as("PRAGMA foreign_keys")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(enabled, 1);

    close_pool(pool).await;
}

#[tokio::test]
async fn test_close_pool_rejects_new_queries() {
    let pool = create_pool(DatabaseConfig::in_memory()).await.unwrap();
    let handle = pool.clone();

    close_pool(pool).await;

    assert!(handle.is_closed());
    assert!(health_check(&handle).await.is_err());
}
