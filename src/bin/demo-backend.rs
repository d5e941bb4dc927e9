//! Demo monitor backend
//!
//! Serves synthetic `/api/snapshot` and `/api/signals` responses so the
//! dashboard can be run without the trading engine.

use dotenvy::dotenv;
use std::sync::Arc;
use tokio::signal;
use trade_monitor::config::DemoBackendConfig;
use trade_monitor::logging;
use trade_monitor::services::demo::{demo_router, DemoEngine};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let config = DemoBackendConfig::from_env()?;
    info!(
        port = config.port,
        symbols = ?config.symbols,
        "Starting demo backend on port {}",
        config.port
    );

    let app = demo_router(Arc::new(DemoEngine::new(config.symbols)));
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;

    let server_handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            error!(error = %e, "Demo backend error");
        }
    });

    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down demo backend...");
        }
        _ = server_handle => {
            error!("Demo backend stopped");
        }
    }

    Ok(())
}
