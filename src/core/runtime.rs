//! Dashboard lifecycle: construct, start, stop

use crate::config::DashboardConfig;
use crate::core::coordinator::FetchCoordinator;
use crate::core::scheduler::PollScheduler;
use crate::core::state::DashboardState;
use crate::error::SchedulerError;
use crate::metrics::Metrics;
use crate::services::backend::MonitorBackend;
use crate::services::http_backend::HttpMonitorBackend;
use std::sync::Arc;
use tracing::info;

/// Owns the view state and the scheduler polling into it
pub struct DashboardRuntime {
    config: DashboardConfig,
    state: Arc<DashboardState>,
    scheduler: PollScheduler,
    metrics: Arc<Metrics>,
}

impl DashboardRuntime {
    pub fn new(
        config: DashboardConfig,
        backend: Arc<dyn MonitorBackend>,
        metrics: Arc<Metrics>,
    ) -> Result<Self, SchedulerError> {
        let state = Arc::new(DashboardState::new());
        let coordinator = Arc::new(FetchCoordinator::new(
            backend,
            state.clone(),
            config.signal_limit,
            Some(metrics.clone()),
        ));
        let scheduler = PollScheduler::new(config.poll_interval, coordinator, Some(metrics.clone()))?;

        Ok(Self {
            config,
            state,
            scheduler,
            metrics,
        })
    }

    /// Build a runtime that polls the HTTP backend named in the config
    pub fn from_config(
        config: DashboardConfig,
        metrics: Arc<Metrics>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let backend = HttpMonitorBackend::new(&config.backend_url, config.request_timeout)?;
        Ok(Self::new(config, Arc::new(backend), metrics)?)
    }

    pub async fn start(&self) -> Result<(), SchedulerError> {
        info!(
            backend = %self.config.backend_url,
            poll_interval_ms = self.config.poll_interval.as_millis() as u64,
            signal_limit = self.config.signal_limit,
            "DashboardRuntime: starting"
        );
        self.scheduler.start().await
    }

    /// Stop polling and freeze the view.
    ///
    /// Fetches already in flight may still complete; their results are
    /// discarded.
    pub async fn stop(&self) {
        self.scheduler.stop().await;
        self.state.close().await;
        info!("DashboardRuntime: stopped");
    }

    pub fn state(&self) -> Arc<DashboardState> {
        self.state.clone()
    }

    pub fn metrics(&self) -> Arc<Metrics> {
        self.metrics.clone()
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub async fn is_running(&self) -> bool {
        self.scheduler.is_running().await
    }
}
