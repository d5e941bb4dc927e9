//! Mocked engine API for integration tests
#![allow(dead_code)]

use serde_json::{json, Value};
use std::time::Duration;
use trade_monitor::services::HttpMonitorBackend;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub fn snapshot_body() -> Value {
    json!({
        "timestamp": "2024-03-15T14:30:05.123456",
        "system_status": "Running",
        "total_signals": 3,
        "active_positions": 1,
        "daily_pnl": -12.5,
        "data_feed_connected": true,
        "trading_api_connected": true,
        "cpu_usage": 17.25,
        "memory_usage": 52.0,
        "uptime_seconds": 7260,
        "symbols": {
            "SPY": {
                "symbol": "SPY",
                "current_price": 152.484,
                "price_change_pct": 1.5,
                "trend": "UPTREND"
            }
        }
    })
}

pub fn signals_body(count: usize) -> Value {
    let signals: Vec<Value> = (0..count)
        .map(|i| {
            json!({
                "timestamp": format!("2024-03-15T10:{:02}:00", 59 - i),
                "symbol": format!("SYM{}", i),
                "signal_type": if i % 2 == 0 { "BUY" } else { "SELL" },
                "price": 100.0 + i as f64,
                "confidence": 0.7,
                "reason": format!("reason {}", i),
                "executed": false
            })
        })
        .collect();
    Value::Array(signals)
}

pub async fn mock_snapshot(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/api/snapshot"))
        .respond_with(response)
        .mount(server)
        .await;
}

pub async fn mock_signals(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/api/signals"))
        .respond_with(response)
        .mount(server)
        .await;
}

pub fn backend_for(server: &MockServer) -> HttpMonitorBackend {
    HttpMonitorBackend::new(&server.uri(), Duration::from_secs(2)).expect("backend")
}
