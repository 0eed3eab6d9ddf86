/// `GET /health`: database reachability and pool usage
///
/// Always answers 200. An unreachable database shows up as
/// `"status": "degraded"`.

use crate::{app::AppState, error::ApiResult};
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tasktrack_shared::db::pool;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// "healthy" or "degraded"
    pub status: String,
    pub version: String,
    /// "connected" or "disconnected"
    pub database: String,
    pub pool: PoolUsage,
}

/// Connection counts at the time of the check
#[derive(Debug, Serialize, Deserialize)]
pub struct PoolUsage {
    pub total: usize,
    pub idle: usize,
    pub active: usize,
}

impl From<pool::PoolStats> for PoolUsage {
    fn from(stats: pool::PoolStats) -> Self {
        Self {
            total: stats.total_connections,
            idle: stats.idle_connections,
            active: stats.active_connections,
        }
    }
}

pub async fn health_check(State(state): State<AppState>) -> ApiResult<Json<HealthResponse>> {
    let connected = pool::health_check(&state.db).await.is_ok();
    let usage = PoolUsage::from(pool::get_pool_stats(&state.db));

    if !connected {
        tracing::warn!(?usage, "Health check could not reach the database");
    }

    Ok(Json(HealthResponse {
        status: if connected { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: if connected { "connected" } else { "disconnected" }.to_string(),
        pool: usage,
    }))
}
