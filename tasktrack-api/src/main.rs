//! # Tasktrack API Server
//!
//! HTTP service for users, categories and tasks.
//!
//! ## Startup
//!
//! 1. Load configuration from the environment
//! 2. Initialize tracing
//! 3. Open the SQLite pool
//! 4. Reset (drop + recreate) or create the tables, per `DATABASE_RESET_ON_STARTUP`
//! 5. Serve until ctrl-c, then close the pool
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p tasktrack-api
//! ```

use tasktrack_api::{
    app::{build_router, AppState},
    config::{Config, LogFormat},
};
use tasktrack_shared::db::{pool, schema};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    init_tracing(config.api.log_format);

    tracing::info!(
        "Tasktrack API Server v{} starting...",
        env!("CARGO_PKG_VERSION")
    );

    let db = pool::create_pool(config.database.pool_config()).await?;

    if config.database.reset_on_startup {
        schema::reset_tables(&db).await?;
        tracing::info!("Database cleared");
    } else {
        if schema::tables_exist(&db).await? {
            tracing::info!("Keeping existing tables");
        }
        schema::create_tables(&db).await?;
    }
    tracing::info!("Database ready");

    let bind_address = config.bind_address();
    let app = build_router(AppState::new(db.clone(), config));

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    tracing::info!("Server listening on http://{}", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutting down");
    pool::close_pool(db).await;

    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        "tasktrack_api=debug,tasktrack_shared=debug,tower_http=debug".into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
