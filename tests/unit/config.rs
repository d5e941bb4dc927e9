//! Unit tests for configuration loading

use std::collections::HashMap;
use std::time::Duration;
use trade_monitor::config::{DashboardConfig, DemoBackendConfig, DEFAULT_BACKEND_URL};
use trade_monitor::error::ConfigError;

fn load(vars: &[(&str, &str)]) -> Result<DashboardConfig, ConfigError> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    DashboardConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn test_defaults_when_nothing_is_set() {
    let config = load(&[]).unwrap();
    assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
    assert_eq!(config.poll_interval, Duration::from_millis(2000));
    assert_eq!(config.signal_limit, 10);
    assert_eq!(config.request_timeout, Duration::from_millis(5000));
    assert_eq!(config.view_port, None);
    assert_eq!(config, DashboardConfig::default());
}

#[test]
fn test_overrides_are_applied() {
    let config = load(&[
        ("MONITOR_BACKEND_URL", " http://engine:9000 "),
        ("POLL_INTERVAL_MS", "500"),
        ("SIGNAL_HISTORY_LIMIT", "25"),
        ("REQUEST_TIMEOUT_MS", "750"),
        ("VIEW_PORT", "3000"),
    ])
    .unwrap();

    assert_eq!(config.backend_url, "http://engine:9000");
    assert_eq!(config.poll_interval, Duration::from_millis(500));
    assert_eq!(config.signal_limit, 25);
    assert_eq!(config.request_timeout, Duration::from_millis(750));
    assert_eq!(config.view_port, Some(3000));
}

#[test]
fn test_blank_values_fall_back_to_defaults() {
    let config = load(&[("MONITOR_BACKEND_URL", "  "), ("VIEW_PORT", "")]).unwrap();
    assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
    assert_eq!(config.view_port, None);
}

#[test]
fn test_unparseable_value_is_rejected() {
    let err = load(&[("POLL_INTERVAL_MS", "fast")]).unwrap_err();
    assert_eq!(
        err,
        ConfigError::InvalidValue {
            key: "POLL_INTERVAL_MS".to_string(),
            value: "fast".to_string(),
        }
    );
}

#[test]
fn test_zero_poll_interval_is_rejected() {
    let err = load(&[("POLL_INTERVAL_MS", "0")]).unwrap_err();
    assert_eq!(err, ConfigError::Zero("POLL_INTERVAL_MS"));
}

#[test]
fn test_out_of_range_port_is_rejected() {
    assert!(load(&[("VIEW_PORT", "70000")]).is_err());
}

fn load_demo(vars: &[(&str, &str)]) -> Result<DemoBackendConfig, ConfigError> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    DemoBackendConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn test_demo_backend_defaults() {
    let config = load_demo(&[]).unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.symbols, vec!["SPY", "QQQ", "AAPL"]);

    let blank_symbols = load_demo(&[("SYMBOLS", " , ")]).unwrap();
    assert_eq!(blank_symbols, DemoBackendConfig::default());
}

#[test]
fn test_demo_backend_overrides() {
    let config = load_demo(&[("DEMO_BACKEND_PORT", "9090"), ("SYMBOLS", "tsla, nvda,,")]).unwrap();
    assert_eq!(config.port, 9090);
    assert_eq!(config.symbols, vec!["TSLA", "NVDA"]);
}

#[test]
fn test_demo_backend_rejects_bad_port() {
    assert_eq!(
        load_demo(&[("DEMO_BACKEND_PORT", "http")]),
        Err(ConfigError::InvalidValue {
            key: "DEMO_BACKEND_PORT".to_string(),
            value: "http".to_string(),
        })
    );
    assert_eq!(
        load_demo(&[("DEMO_BACKEND_PORT", "0")]),
        Err(ConfigError::Zero("DEMO_BACKEND_PORT"))
    );
}
