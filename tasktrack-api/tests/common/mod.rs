/// Common test utilities for API tests
///
/// This module provides shared infrastructure for the API tests:
/// - A fresh in-memory database per test, reset the same way startup does
/// - The full router, driven as a tower `Service`
/// - Request helpers that decode JSON responses

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use sqlx::SqlitePool;
use tasktrack_api::app::{build_router, AppState};
use tasktrack_api::config::{ApiConfig, Config, DatabaseConfig, LogFormat};
use tasktrack_shared::db::{pool, schema};
use tower::Service as _;

/// Test context containing all necessary resources
pub struct TestContext {
    pub db: SqlitePool,
    pub app: axum::Router,
}

impl TestContext {
    /// Creates a new test context backed by an empty in-memory database
    pub async fn new() -> anyhow::Result<Self> {
        let config = test_config();

        let db = pool::create_pool(config.database.pool_config()).await?;
        schema::reset_tables(&db).await?;

        let app = build_router(AppState::new(db.clone(), config));

        Ok(TestContext { db, app })
    }

    /// Sends a request and returns the status and decoded JSON body
    pub async fn request(&self, method: &str, uri: &str, form: Option<&str>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);

        let request = match form {
            Some(body) => builder
                .header("content-type", "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        let response = self.app.clone().call(request).await.unwrap();
        let status = response.status();

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body).unwrap_or_else(|_| {
                panic!("Non-JSON body for {} {}: {}", method, uri, String::from_utf8_lossy(&body))
            })
        };

        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request("GET", uri, None).await
    }

    pub async fn post_form(&self, uri: &str, form: &str) -> (StatusCode, Value) {
        self.request("POST", uri, Some(form)).await
    }

    pub async fn put_form(&self, uri: &str, form: &str) -> (StatusCode, Value) {
        self.request("PUT", uri, Some(form)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.request("DELETE", uri, None).await
    }

    /// Creates a user via the API and returns its ID
    pub async fn create_user(&self, username: &str, password: &str) -> i64 {
        let (status, body) = self
            .post_form("/api/users/", &format!("username={}&password={}", username, password))
            .await;
        assert_eq!(status, StatusCode::OK, "create user failed: {}", body);
        body["user_id"].as_i64().unwrap()
    }

    /// Creates a category via the API and returns its ID
    pub async fn create_category(&self, name: &str) -> i64 {
        let (status, body) = self
            .post_form("/api/categories/", &format!("name={}", name))
            .await;
        assert_eq!(status, StatusCode::OK, "create category failed: {}", body);
        body["category_id"].as_i64().unwrap()
    }

    /// Creates a task via the API from a raw form body and returns its ID
    pub async fn create_task(&self, form: &str) -> i64 {
        let (status, body) = self.post_form("/api/tasks/", form).await;
        assert_eq!(status, StatusCode::OK, "create task failed: {}", body);
        body["task_id"].as_i64().unwrap()
    }
}

fn test_config() -> Config {
    Config {
        api: ApiConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            cors_origins: vec!["*".to_string()],
            log_format: LogFormat::Pretty,
        },
        database: DatabaseConfig {
            url: pool::IN_MEMORY_URL.to_string(),
            max_connections: 1,
            reset_on_startup: true,
        },
    }
}

/// IDs of every element in a JSON array of entities
pub fn ids(list: &Value) -> Vec<i64> {
    list.as_array()
        .expect("expected a JSON array")
        .iter()
        .map(|item| item["id"].as_i64().unwrap())
        .collect()
}
