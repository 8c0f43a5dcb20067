//! AdLens — ads dashboard backend.
//!
//! Main entry point: loads configuration, seeds the dashboard store from
//! the entity catalog, and starts the HTTP server.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use adlens_catalog::MockCatalog;
use adlens_core::config::AppConfig;
use adlens_management::{auth, dashboard_router, DashboardStore};
use axum::routing::get;
use axum::Json;
use clap::Parser;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "adlens-server")]
#[command(about = "Ads dashboard backend")]
#[command(version)]
struct Cli {
    /// HTTP port (overrides config)
    #[arg(long, env = "ADLENS__API__HTTP_PORT")]
    http_port: Option<u16>,

    /// Simulated catalog latency in milliseconds (overrides config)
    #[arg(long, env = "ADLENS__CATALOG__LATENCY_MS")]
    catalog_latency_ms: Option<u64>,

    /// Start with an empty store instead of the demo catalog
    #[arg(long, default_value_t = false)]
    no_seed: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "adlens_server=info,adlens_management=info,tower_http=info".into()),
        )
        .json()
        .init();

    let cli = Cli::parse();

    info!("AdLens starting up");

    // Load configuration
    let mut config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to load config, using defaults");
        AppConfig::default()
    });

    // Apply CLI overrides
    if let Some(port) = cli.http_port {
        config.api.http_port = port;
    }
    if let Some(latency) = cli.catalog_latency_ms {
        config.catalog.latency_ms = latency;
    }
    if cli.no_seed {
        config.catalog.seed_demo = false;
    }

    info!(
        http_port = config.api.http_port,
        metrics_port = config.metrics.port,
        seed_demo = config.catalog.seed_demo,
        "Configuration loaded"
    );

    // Build the store, hydrating from the mock catalog unless disabled.
    let store = if config.catalog.seed_demo {
        let source = MockCatalog::new(Duration::from_millis(config.catalog.latency_ms));
        Arc::new(DashboardStore::hydrate(&source).await?)
    } else {
        Arc::new(DashboardStore::new())
    };

    // Metrics exporter on its own port.
    let exporter = metrics_exporter_prometheus::PrometheusBuilder::new();
    let handle = exporter
        .with_http_listener(SocketAddr::new(
            config.api.host.parse()?,
            config.metrics.port,
        ))
        .install_recorder()?;
    info!(port = config.metrics.port, "Metrics exporter started");
    std::mem::forget(handle);

    let app = dashboard_router(store)
        // Operational endpoints
        .route("/health", get(health))
        .route("/ready", get(health))
        .route("/live", get(health))
        // Middleware
        .layer(axum::middleware::from_fn(auth::auth_middleware))
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::new(config.api.host.parse()?, config.api.http_port);
    info!(addr = %addr, "Starting HTTP server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}
