use std::path::PathBuf;
use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusBuilder;

use fra_engine::config;
use fra_engine::routes::{self, AppState};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("FRA Atlas engine starting");

    // Load configuration. Fail loudly on misconfiguration.
    let config_dir = std::env::var("FRA_ATLAS_CONFIG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config"));

    let atlas_config = match config::load_config(&config_dir) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load configuration, refusing to start");
            std::process::exit(1);
        }
    };

    let metrics_handle = match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => handle,
        Err(e) => {
            tracing::error!(error = %e, "Failed to install Prometheus metrics recorder");
            std::process::exit(1);
        }
    };

    let port = atlas_config.service.port;
    let state = Arc::new(AppState::new(atlas_config, Some(metrics_handle)));
    let app = routes::router(state);

    let listener = match tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, port, "Failed to bind TCP listener");
            std::process::exit(1);
        }
    };

    tracing::info!(port = port, "FRA Atlas engine listening");

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "HTTP server error");
        std::process::exit(1);
    }
}
