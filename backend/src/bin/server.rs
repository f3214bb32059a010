//! Designer catalog HTTP server binary.
//!
//! Loads configuration and the catalog, builds the router and serves it.
//!
//! # Usage
//!
//! ```bash
//! # Bundled seed catalog on 0.0.0.0:5000
//! cargo run --bin catalog-server
//!
//! # Custom catalog and port
//! CATALOG_PATH=data/designers.json PORT=8080 cargo run --bin catalog-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 5000)
//! - `CATALOG_PATH`: JSON catalog file (default: bundled seed data)
//! - `CATALOG_CONFIG`: TOML config file (default: `catalog.toml` if present)
//! - `RUST_LOG`: Log filter (default: info)

use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use designer_catalog::config::ServerConfig;
use designer_catalog::db::Catalog;
use designer_catalog::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting designer catalog server");

    let config = ServerConfig::load().context("Failed to load server configuration")?;

    let catalog = match config.catalog_path {
        Some(ref path) => Catalog::from_file(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display()))?,
        None => Catalog::seed().context("Bundled seed catalog is invalid")?,
    };
    info!(
        designers = catalog.len(),
        active = catalog.active().len(),
        "Catalog loaded"
    );

    let state = AppState::new(Arc::new(catalog));
    let app = create_router(state, &config);

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", config.host, config.port))?;
    info!("Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
