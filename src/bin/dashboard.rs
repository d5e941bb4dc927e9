//! Trade Monitor Dashboard
//!
//! Polls the engine's monitor API and prints the live view to stdout.
//! Set VIEW_PORT to also serve the view over HTTP.

use dotenvy::dotenv;
use std::io::IsTerminal;
use std::sync::Arc;
use tokio::signal;
use trade_monitor::config::{get_environment, DashboardConfig};
use trade_monitor::core::http::{start_server, AppState};
use trade_monitor::core::runtime::DashboardRuntime;
use trade_monitor::logging;
use trade_monitor::metrics::Metrics;
use trade_monitor::render::render_text;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging();

    let config = DashboardConfig::from_env()?;
    let env = get_environment();
    info!("Starting Trade Monitor Dashboard");
    info!(environment = %env, "Environment");
    info!(backend = %config.backend_url, "Backend: {}", config.backend_url);
    info!(
        poll_interval_ms = config.poll_interval.as_millis() as u64,
        "Polling every {}ms",
        config.poll_interval.as_millis()
    );

    let metrics = Arc::new(Metrics::new()?);
    let runtime = DashboardRuntime::from_config(config.clone(), metrics.clone())
        .map_err(|e| format!("Failed to build dashboard: {}", e))?;
    let state = runtime.state();

    // Redraw on every view change
    let mut views = state.subscribe();
    let clear_screen = std::io::stdout().is_terminal();
    let display_handle = tokio::spawn(async move {
        loop {
            let text = render_text(&views.borrow_and_update());
            if clear_screen {
                print!("\x1B[2J\x1B[H");
            }
            println!("{}\n", text);
            if views.changed().await.is_err() {
                break;
            }
        }
    });

    let server_handle = config.view_port.map(|port| {
        let app_state = AppState::new(state.clone(), metrics.clone());
        info!(port = port, "View server: http://0.0.0.0:{}", port);
        tokio::spawn(async move {
            if let Err(e) = start_server(port, app_state).await {
                error!(error = %e, "View server error");
            }
        })
    });

    runtime
        .start()
        .await
        .map_err(|e| format!("Failed to start scheduler: {}", e))?;

    info!("Dashboard started, waiting for shutdown signal...");
    match server_handle {
        Some(handle) => {
            tokio::select! {
                _ = signal::ctrl_c() => {
                    info!("Shutting down dashboard...");
                }
                _ = handle => {
                    error!("View server stopped");
                }
            }
        }
        None => {
            signal::ctrl_c().await?;
            info!("Shutting down dashboard...");
        }
    }

    runtime.stop().await;
    display_handle.abort();
    info!("Dashboard stopped");

    Ok(())
}
