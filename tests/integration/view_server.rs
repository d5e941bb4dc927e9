//! Integration tests for the dashboard's HTTP view server

use crate::test_utils::snapshot_body;
use axum_test::TestServer;
use serde_json::Value;
use std::sync::Arc;
use trade_monitor::core::http::{create_router, AppState};
use trade_monitor::core::DashboardState;
use trade_monitor::metrics::Metrics;
use trade_monitor::models::Snapshot;
use trade_monitor::render::NO_DATA_PLACEHOLDER;

struct TestViewServer {
    server: TestServer,
    dashboard: Arc<DashboardState>,
}

impl TestViewServer {
    fn new() -> Self {
        let dashboard = Arc::new(DashboardState::new());
        let metrics = Arc::new(Metrics::new().expect("metrics initialization"));
        let router = create_router(AppState::new(dashboard.clone(), metrics));
        let server = TestServer::new(router).expect("start test server");
        Self { server, dashboard }
    }

    async fn load_snapshot(&self) {
        let snapshot: Snapshot = serde_json::from_value(snapshot_body()).unwrap();
        self.dashboard.apply_snapshot(snapshot).await;
    }
}

#[tokio::test]
async fn test_health_endpoint_reports_status() {
    let app = TestViewServer::new();
    let response = app.server.get("/health").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["has_data"], false);
    assert!(body["uptime_seconds"].as_u64().is_some());
    assert_eq!(body["service"], "trade-monitor-dashboard");
}

#[tokio::test]
async fn test_view_endpoint_before_and_after_data() {
    let app = TestViewServer::new();

    let body: Value = app.server.get("/api/view").await.json();
    assert_eq!(body["phase"], "no_data");
    assert!(body["snapshot"].is_null());

    app.load_snapshot().await;

    let body: Value = app.server.get("/api/view").await.json();
    assert_eq!(body["phase"], "showing_data");
    assert_eq!(body["snapshot"]["daily_pnl"]["text"], "$-12.50");
    assert_eq!(body["snapshot"]["daily_pnl"]["tone"], "negative");
    assert_eq!(body["snapshot"]["status"]["class"], "running");
    assert_eq!(body["snapshot"]["symbols"]["state"], "symbols");
}

#[tokio::test]
async fn test_text_view_is_served_at_root() {
    let app = TestViewServer::new();
    assert!(app.server.get("/").await.text().contains(NO_DATA_PLACEHOLDER));

    app.load_snapshot().await;
    let text = app.server.get("/").await.text();
    assert!(text.contains("Daily PnL: $-12.50"));
    assert!(!text.contains(NO_DATA_PLACEHOLDER));
}

#[tokio::test]
async fn test_metrics_endpoint_exposes_prometheus_metrics() {
    let app = TestViewServer::new();
    app.server.get("/health").await;

    let response = app.server.get("/metrics").await;
    assert_eq!(response.status_code(), 200);

    let body = response.text();
    assert!(body.contains("http_requests_total"));
    assert!(body.contains("monitor_cycles_total"));
    assert!(body.contains("monitor_ticks_skipped_total"));
}
