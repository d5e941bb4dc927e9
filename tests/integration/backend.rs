//! Integration tests for the HTTP monitor backend

use crate::test_utils::{backend_for, mock_signals, mock_snapshot, signals_body, snapshot_body};
use std::time::Duration;
use tokio_test::{assert_err, assert_ok};
use trade_monitor::error::FetchError;
use trade_monitor::services::{HttpMonitorBackend, MonitorBackend};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_fetches_and_decodes_snapshot() {
    let server = MockServer::start().await;
    mock_snapshot(&server, ResponseTemplate::new(200).set_body_json(snapshot_body())).await;

    let snapshot = assert_ok!(backend_for(&server).fetch_snapshot().await);
    assert_eq!(snapshot.system_status, "Running");
    assert_eq!(snapshot.daily_pnl, -12.5);
    assert_eq!(snapshot.symbols["SPY"].current_price, Some(152.484));
}

#[tokio::test]
async fn test_signal_request_carries_limit() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/signals"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(signals_body(4)))
        .expect(1)
        .mount(&server)
        .await;

    let signals = assert_ok!(backend_for(&server).fetch_signals(10).await);
    assert_eq!(signals.len(), 4);
    assert_eq!(signals[0].symbol, "SYM0");
    assert_eq!(signals[3].symbol, "SYM3");
}

#[tokio::test]
async fn test_non_success_status_is_reported() {
    let server = MockServer::start().await;
    mock_snapshot(&server, ResponseTemplate::new(500)).await;

    let err = assert_err!(backend_for(&server).fetch_snapshot().await);
    match err {
        FetchError::Status { endpoint, status } => {
            assert_eq!(endpoint, "/api/snapshot");
            assert_eq!(status.as_u16(), 500);
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body_is_reported() {
    let server = MockServer::start().await;
    mock_signals(&server, ResponseTemplate::new(200).set_body_string("<html>oops</html>")).await;

    let err = assert_err!(backend_for(&server).fetch_signals(10).await);
    assert_eq!(err.kind(), "decode");
}

#[tokio::test]
async fn test_wrong_shape_is_reported_as_decode_error() {
    let server = MockServer::start().await;
    mock_snapshot(&server, ResponseTemplate::new(200).set_body_json(signals_body(1))).await;

    let err = assert_err!(backend_for(&server).fetch_snapshot().await);
    assert_eq!(err.kind(), "decode");
}

#[tokio::test]
async fn test_slow_backend_times_out() {
    let server = MockServer::start().await;
    mock_snapshot(
        &server,
        ResponseTemplate::new(200)
            .set_body_json(snapshot_body())
            .set_delay(Duration::from_secs(5)),
    )
    .await;

    let backend = HttpMonitorBackend::new(&server.uri(), Duration::from_millis(100)).unwrap();
    let err = assert_err!(backend.fetch_snapshot().await);
    assert_eq!(err.kind(), "transport");
}

#[tokio::test]
async fn test_unreachable_backend_is_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let backend =
        HttpMonitorBackend::new(&format!("http://127.0.0.1:{}", port), Duration::from_secs(1))
            .unwrap();
    let err = assert_err!(backend.fetch_signals(10).await);
    assert_eq!(err.kind(), "transport");
}

#[test]
fn test_endpoint_urls_keep_base_path() {
    let backend =
        HttpMonitorBackend::with_client("http://engine.local/monitor", reqwest::Client::new())
            .unwrap();
    assert_eq!(
        backend.snapshot_url().unwrap().as_str(),
        "http://engine.local/monitor/api/snapshot"
    );
    assert_eq!(
        backend.signals_url(25).unwrap().as_str(),
        "http://engine.local/monitor/api/signals?limit=25"
    );
}

#[test]
fn test_invalid_base_url_is_rejected() {
    let result = HttpMonitorBackend::with_client("not a url", reqwest::Client::new());
    assert!(matches!(result, Err(FetchError::Url(_))));
}
