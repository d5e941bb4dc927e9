//! Unit tests for the dashboard runtime lifecycle

use crate::fixtures::{signals, snapshot, ScriptedBackend};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use trade_monitor::config::DashboardConfig;
use trade_monitor::core::DashboardRuntime;
use trade_monitor::metrics::Metrics;
use trade_monitor::render::ViewPhase;

fn config() -> DashboardConfig {
    DashboardConfig {
        poll_interval: Duration::from_millis(100),
        ..DashboardConfig::default()
    }
}

#[tokio::test(start_paused = true)]
async fn test_runtime_polls_into_state() {
    let backend = Arc::new(ScriptedBackend::new(Some(snapshot()), Some(signals(12))));
    let metrics = Arc::new(Metrics::new().unwrap());
    let runtime = DashboardRuntime::new(config(), backend.clone(), metrics.clone()).unwrap();

    assert_eq!(runtime.state().view().phase, ViewPhase::NoData);
    runtime.start().await.unwrap();
    assert!(runtime.is_running().await);
    sleep(Duration::from_millis(250)).await;

    let view = runtime.state().view();
    assert_eq!(view.phase, ViewPhase::ShowingData);
    assert_eq!(view.signals.len(), 10);
    assert_eq!(metrics.cycles_total.get(), 3);
    assert!(backend.requested_limits.lock().unwrap().iter().all(|l| *l == 10));

    runtime.stop().await;
}

#[tokio::test(start_paused = true)]
async fn test_stop_freezes_view() {
    let backend = Arc::new(ScriptedBackend::new(Some(snapshot()), Some(signals(1))));
    let metrics = Arc::new(Metrics::new().unwrap());
    let runtime = DashboardRuntime::new(config(), backend, metrics.clone()).unwrap();

    runtime.start().await.unwrap();
    sleep(Duration::from_millis(50)).await;
    runtime.stop().await;

    assert!(!runtime.is_running().await);
    assert!(runtime.state().is_closed());
    let cycles = metrics.cycles_total.get();
    sleep(Duration::from_secs(2)).await;
    assert_eq!(metrics.cycles_total.get(), cycles);
    assert!(runtime.state().view().has_data());
}

#[test]
fn test_zero_period_config_is_rejected() {
    let backend = Arc::new(ScriptedBackend::new(None, None));
    let config = DashboardConfig {
        poll_interval: Duration::ZERO,
        ..DashboardConfig::default()
    };
    assert!(DashboardRuntime::new(config, backend, Arc::new(Metrics::new().unwrap())).is_err());
}
