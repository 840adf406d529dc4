//! Dashboard API server.
//!
//! Serves the aggregated emission data the dashboard pages render:
//! choropleth feeds, per-state time series, the full state × year
//! panel, and raster overlay images.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use dashboard_api::config::DashboardConfig;
use dashboard_api::handlers;
use dashboard_api::state::AppState;

/// Dashboard API server
#[derive(Parser, Debug)]
#[command(name = "dashboard-api")]
#[command(about = "HTTP API backing the CO2 emission dashboard")]
struct Args {
    /// Listen address
    #[arg(short, long, default_value = "0.0.0.0:8080", env = "ATLAS_LISTEN_ADDR")]
    listen: String,

    /// Log level
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Raster data directory (overrides ATLAS_DATA_DIR)
    #[arg(long)]
    data_dir: Option<String>,

    /// State boundary GeoJSON file (overrides ATLAS_BOUNDARIES_FILE)
    #[arg(long)]
    boundaries: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    fmt().with_env_filter(filter).with_target(true).init();

    info!("Starting dashboard API server");

    let mut config = DashboardConfig::from_env();
    if let Some(dir) = args.data_dir {
        config.data_dir = dir;
    }
    if let Some(path) = args.boundaries {
        config.boundaries_file = path;
    }

    let state = Arc::new(AppState::new(config)?);
    let app = handlers::router(state);

    let listener = tokio::net::TcpListener::bind(&args.listen).await?;
    info!(listen = %args.listen, "dashboard API listening");
    axum::serve(listener, app).await?;

    Ok(())
}
