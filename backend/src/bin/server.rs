//! FFCS planner HTTP server.
//!
//! Builds the repository, sets up the HTTP router and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! # In-memory registry (default)
//! cargo run --bin ffcs-server
//!
//! # Registry persisted to a JSON file
//! FFCS_DATA_FILE=./ffcs-data.json cargo run --bin ffcs-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `REPOSITORY_TYPE`: `local` or `json` (overrides the data file heuristic)
//! - `FFCS_DATA_FILE`: JSON store path, selects the json backend when set
//! - `RUST_LOG`: Log level (default: info)
//!
//! A `repository.toml` in the working directory, `backend/` or the parent
//! directory takes precedence over the repository variables.

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use ffcs_planner::db::{FullRepository, RepositoryConfig, RepositoryFactory};
use ffcs_planner::http::{create_router, AppState};

async fn build_repository() -> anyhow::Result<Arc<dyn FullRepository>> {
    match RepositoryConfig::from_default_location() {
        Ok(config) => {
            info!(
                "Using repository.toml (type = {})",
                config.repository.repo_type
            );
            Ok(RepositoryFactory::from_repository_config(&config).await?)
        }
        Err(e) => {
            warn!("{}; falling back to environment", e);
            Ok(RepositoryFactory::from_env().await?)
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting FFCS planner HTTP server");

    let repository = build_repository().await?;
    info!("Repository initialized successfully");

    let state = AppState::new(repository);
    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
