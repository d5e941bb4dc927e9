//! Fixed-period scheduler driving the update cycle

use crate::core::guard::CycleGuard;
use crate::error::SchedulerError;
use crate::metrics::Metrics;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

/// One unit of work triggered per accepted tick
#[async_trait]
pub trait CycleRunner: Send + Sync + 'static {
    async fn run_cycle(&self);
}

/// Scheduler that runs a cycle immediately and then once per period.
///
/// A tick that arrives while the previous cycle is still running is
/// dropped, not queued, so a slow backend lowers the effective poll rate
/// instead of building a backlog.
pub struct PollScheduler {
    period: Duration,
    runner: Arc<dyn CycleRunner>,
    guard: CycleGuard,
    metrics: Option<Arc<Metrics>>,
    handle: Arc<RwLock<Option<tokio::task::JoinHandle<()>>>>,
}

impl PollScheduler {
    /// Create a new scheduler
    ///
    /// # Arguments
    /// * `period` - Time between ticks (must be non-zero)
    /// * `runner` - Work executed on every accepted tick
    /// * `metrics` - Optional cycle and skip counters
    pub fn new(
        period: Duration,
        runner: Arc<dyn CycleRunner>,
        metrics: Option<Arc<Metrics>>,
    ) -> Result<Self, SchedulerError> {
        if period.is_zero() {
            return Err(SchedulerError::ZeroPeriod);
        }

        info!(
            period_ms = period.as_millis() as u64,
            "PollScheduler: created with period {}ms",
            period.as_millis()
        );

        Ok(Self {
            period,
            runner,
            guard: CycleGuard::new(),
            metrics,
            handle: Arc::new(RwLock::new(None)),
        })
    }

    /// Start ticking; the first cycle fires immediately
    pub async fn start(&self) -> Result<(), SchedulerError> {
        let mut slot = self.handle.write().await;
        if slot.is_some() {
            return Err(SchedulerError::AlreadyRunning);
        }

        let period = self.period;
        let runner = self.runner.clone();
        let guard = self.guard.clone();
        let metrics = self.metrics.clone();

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                ticker.tick().await;

                let Some(permit) = guard.try_acquire() else {
                    debug!("PollScheduler: previous cycle still in flight, skipping tick");
                    if let Some(m) = &metrics {
                        m.ticks_skipped_total.inc();
                    }
                    continue;
                };

                if let Some(m) = &metrics {
                    m.cycles_total.inc();
                }

                let runner = runner.clone();
                let metrics = metrics.clone();
                tokio::spawn(async move {
                    let _permit = permit;
                    let started = Instant::now();
                    debug!("PollScheduler: cycle started");

                    runner.run_cycle().await;

                    let elapsed = started.elapsed();
                    if let Some(m) = &metrics {
                        m.cycle_duration_seconds.observe(elapsed.as_secs_f64());
                    }
                    debug!(
                        elapsed_ms = elapsed.as_millis() as u64,
                        "PollScheduler: cycle finished in {}ms",
                        elapsed.as_millis()
                    );
                });
            }
        });

        *slot = Some(handle);
        info!("PollScheduler: started");
        Ok(())
    }

    /// Stop the timer
    ///
    /// Returns once the timer task has terminated, so no tick fires after
    /// this call. A cycle that is already running is left to finish.
    pub async fn stop(&self) {
        let mut handle = self.handle.write().await;
        if let Some(h) = handle.take() {
            h.abort();
            let _ = h.await;
            info!("PollScheduler: stopped");
        }
    }

    /// Check if the scheduler is running
    pub async fn is_running(&self) -> bool {
        let handle = self.handle.read().await;
        handle.is_some()
    }

    /// True while an update cycle is in flight
    pub fn cycle_in_flight(&self) -> bool {
        self.guard.is_held()
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}
