//! Environment-driven configuration

use crate::error::ConfigError;
use std::env;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8080";
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 2000;
pub const DEFAULT_SIGNAL_LIMIT: usize = 10;
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 5000;
pub const DEFAULT_DEMO_PORT: u16 = 8080;
pub const DEFAULT_DEMO_SYMBOLS: [&str; 3] = ["SPY", "QQQ", "AAPL"];

/// Deployment environment name (`APP_ENV`), defaults to `sandbox`
pub fn get_environment() -> String {
    env::var("APP_ENV").unwrap_or_else(|_| "sandbox".to_string())
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub backend_url: String,
    pub poll_interval: Duration,
    /// Advisory cap sent to the backend with every signal-history request
    pub signal_limit: usize,
    pub request_timeout: Duration,
    /// Port for the HTTP view server, `None` keeps it disabled
    pub view_port: Option<u16>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            signal_limit: DEFAULT_SIGNAL_LIMIT,
            request_timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
            view_port: None,
        }
    }
}

impl DashboardConfig {
    /// Load from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load through an arbitrary variable lookup
    ///
    /// Missing variables fall back to defaults; present but unparseable
    /// values are rejected instead of silently ignored.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let backend_url = lookup("MONITOR_BACKEND_URL")
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or(defaults.backend_url);

        let poll_interval_ms: u64 =
            parse_var(&lookup, "POLL_INTERVAL_MS")?.unwrap_or(DEFAULT_POLL_INTERVAL_MS);
        if poll_interval_ms == 0 {
            return Err(ConfigError::Zero("POLL_INTERVAL_MS"));
        }

        let signal_limit: usize =
            parse_var(&lookup, "SIGNAL_HISTORY_LIMIT")?.unwrap_or(DEFAULT_SIGNAL_LIMIT);
        if signal_limit == 0 {
            return Err(ConfigError::Zero("SIGNAL_HISTORY_LIMIT"));
        }

        let request_timeout_ms: u64 =
            parse_var(&lookup, "REQUEST_TIMEOUT_MS")?.unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS);
        if request_timeout_ms == 0 {
            return Err(ConfigError::Zero("REQUEST_TIMEOUT_MS"));
        }

        let view_port: Option<u16> = parse_var(&lookup, "VIEW_PORT")?;

        Ok(Self {
            backend_url,
            poll_interval: Duration::from_millis(poll_interval_ms),
            signal_limit,
            request_timeout: Duration::from_millis(request_timeout_ms),
            view_port,
        })
    }
}

/// Settings for the `demo-backend` binary
#[derive(Debug, Clone, PartialEq)]
pub struct DemoBackendConfig {
    pub port: u16,
    pub symbols: Vec<String>,
}

impl Default for DemoBackendConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_DEMO_PORT,
            symbols: DEFAULT_DEMO_SYMBOLS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl DemoBackendConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// `DEMO_BACKEND_PORT` and a comma-separated `SYMBOLS` list
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = parse_var(&lookup, "DEMO_BACKEND_PORT")?.unwrap_or(defaults.port);
        if port == 0 {
            return Err(ConfigError::Zero("DEMO_BACKEND_PORT"));
        }

        let symbols: Vec<String> = lookup("SYMBOLS")
            .map(|raw| {
                raw.split(',')
                    .map(|s| s.trim().to_uppercase())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            port,
            symbols: if symbols.is_empty() {
                defaults.symbols
            } else {
                symbols
            },
        })
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue {
                key: key.to_string(),
                value: raw,
            }),
    }
}
