//! MPS Site API Server
//!
//! Run with: cargo run --bin mps-site
//!
//! # Configuration
//!
//! Read from `config.toml` (see `mps-cli generate-config`), with environment
//! overrides:
//! - `MPS_DATA_DIR`: Data directory
//! - `MPS_API_HOST`: Host to bind to (default: 0.0.0.0)
//! - `MPS_API_PORT`: Port to listen on (default: 8090)
//! - `MPS_NOTIFY_ENDPOINT`: Form-service URL for lead notifications (enables the webhook sink)
//! - `MPS_NOTIFY_ENABLED`: Force notifications on or off
//! - `MPS_LOG_LEVEL`, `MPS_LOG_FORMAT`: Logging (`RUST_LOG` takes precedence)

use mps_site::api::{serve, AppState};
use mps_site::config::Config;
use mps_site::logging;
use mps_site::storage::ContentStore;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_default();
    logging::init(&config.logging);

    tracing::info!("Starting MPS site API server v{}", env!("CARGO_PKG_VERSION"));

    let store_config = config.storage.to_store_config();
    tracing::info!("Data directory: {:?}", store_config.data_dir);

    let store = Arc::new(ContentStore::open(&store_config)?);
    store.initialize()?;
    tracing::info!("Content store ready: {}", store.stats());

    let sink = config.notify.build_sink();
    tracing::info!("Lead notifications via {} sink", sink.name());

    let api_config = config.api.to_api_config();
    let state = AppState::new(store, sink, api_config.clone());

    tracing::info!("Starting server on {}", api_config.addr());
    serve(state, &api_config).await?;

    tracing::info!("MPS site API server stopped");
    Ok(())
}
