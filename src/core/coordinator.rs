//! Fetch coordinator: one update cycle against the backend

use crate::core::scheduler::CycleRunner;
use crate::core::state::DashboardState;
use crate::error::FetchError;
use crate::metrics::Metrics;
use crate::services::backend::MonitorBackend;
use async_trait::async_trait;
use futures_util::future::join;
use std::sync::Arc;
use tracing::{debug, warn};

/// Which halves of the view were refreshed by a cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CycleOutcome {
    pub snapshot_updated: bool,
    pub signals_updated: bool,
}

pub struct FetchCoordinator {
    backend: Arc<dyn MonitorBackend>,
    state: Arc<DashboardState>,
    signal_limit: usize,
    metrics: Option<Arc<Metrics>>,
}

impl FetchCoordinator {
    pub fn new(
        backend: Arc<dyn MonitorBackend>,
        state: Arc<DashboardState>,
        signal_limit: usize,
        metrics: Option<Arc<Metrics>>,
    ) -> Self {
        Self {
            backend,
            state,
            signal_limit,
            metrics,
        }
    }

    /// Fetch snapshot and signal history concurrently.
    ///
    /// Each result is applied as soon as it arrives; a failure on one side
    /// neither cancels nor delays the other. Resolves once both requests
    /// have finished, whatever their outcome.
    pub async fn refresh(&self) -> CycleOutcome {
        let snapshot = async {
            match self.backend.fetch_snapshot().await {
                Ok(snapshot) => {
                    let applied = self.state.apply_snapshot(snapshot).await;
                    if applied {
                        if let Some(m) = &self.metrics {
                            m.snapshot_updates_total.inc();
                        }
                    }
                    applied
                }
                Err(e) => {
                    self.record_failure("snapshot", &e);
                    false
                }
            }
        };

        let signals = async {
            match self.backend.fetch_signals(self.signal_limit).await {
                Ok(signals) => {
                    let count = signals.len();
                    let applied = self.state.apply_signals(signals).await;
                    if applied {
                        debug!(count = count, "FetchCoordinator: applied {} signals", count);
                        if let Some(m) = &self.metrics {
                            m.signal_updates_total.inc();
                        }
                    }
                    applied
                }
                Err(e) => {
                    self.record_failure("signals", &e);
                    false
                }
            }
        };

        let (snapshot_updated, signals_updated) = join(snapshot, signals).await;
        CycleOutcome {
            snapshot_updated,
            signals_updated,
        }
    }

    fn record_failure(&self, endpoint: &str, error: &FetchError) {
        warn!(
            endpoint = endpoint,
            kind = error.kind(),
            error = %error,
            "FetchCoordinator: {} fetch failed, keeping previous view",
            endpoint
        );
        if let Some(m) = &self.metrics {
            m.fetch_failures_total
                .with_label_values(&[endpoint, error.kind()])
                .inc();
        }
    }
}

#[async_trait]
impl CycleRunner for FetchCoordinator {
    async fn run_cycle(&self) {
        let outcome = self.refresh().await;
        debug!(
            snapshot_updated = outcome.snapshot_updated,
            signals_updated = outcome.signals_updated,
            "FetchCoordinator: cycle complete"
        );
    }
}
