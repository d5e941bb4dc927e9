//! Logging for the dashboard and demo backend binaries
//!
//! The dashboard owns stdout for its live view, so every log line goes to
//! stderr. `APP_ENV=production` (or `prod`) switches to JSON lines for log
//! shippers; anything else gets colored output. There is no trace
//! exporter. Fetch failures and skipped ticks surface as log events here
//! and as counters on `/metrics`.

use crate::config::get_environment;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber; `RUST_LOG` overrides the `info` default.
///
/// Call once per process, before the runtime starts polling.
pub fn init_logging() {
    let env = get_environment();
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if is_production(&env) {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_ansi(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

/// Environment names that select JSON output
pub fn is_production(env: &str) -> bool {
    matches!(env, "production" | "prod")
}
