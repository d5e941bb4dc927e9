//! Prometheus metrics for the polling engine and the view server

use prometheus::{
    Encoder, Histogram, HistogramOpts, IntCounter, IntCounterVec, IntGauge, Opts, Registry,
    TextEncoder,
};

/// Metric handles backed by a private registry.
///
/// Each instance owns its registry, so tests can build as many as they
/// like without colliding on metric names.
pub struct Metrics {
    registry: Registry,
    pub cycles_total: IntCounter,
    pub ticks_skipped_total: IntCounter,
    pub fetch_failures_total: IntCounterVec,
    pub snapshot_updates_total: IntCounter,
    pub signal_updates_total: IntCounter,
    pub cycle_duration_seconds: Histogram,
    pub http_requests_total: IntCounter,
    pub http_requests_in_flight: IntGauge,
    pub http_request_duration_seconds: Histogram,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let cycles_total = IntCounter::new(
            "monitor_cycles_total",
            "Update cycles started by the scheduler",
        )?;
        let ticks_skipped_total = IntCounter::new(
            "monitor_ticks_skipped_total",
            "Timer ticks skipped because a cycle was still in flight",
        )?;
        let fetch_failures_total = IntCounterVec::new(
            Opts::new(
                "monitor_fetch_failures_total",
                "Failed backend requests by endpoint and failure kind",
            ),
            &["endpoint", "kind"],
        )?;
        let snapshot_updates_total = IntCounter::new(
            "monitor_snapshot_updates_total",
            "Snapshots applied to the dashboard view",
        )?;
        let signal_updates_total = IntCounter::new(
            "monitor_signal_updates_total",
            "Signal histories applied to the dashboard view",
        )?;
        let cycle_duration_seconds = Histogram::with_opts(HistogramOpts::new(
            "monitor_cycle_duration_seconds",
            "Wall time of a full update cycle",
        ))?;
        let http_requests_total =
            IntCounter::new("http_requests_total", "HTTP requests served by the view server")?;
        let http_requests_in_flight = IntGauge::new(
            "http_requests_in_flight",
            "HTTP requests currently being served",
        )?;
        let http_request_duration_seconds = Histogram::with_opts(HistogramOpts::new(
            "http_request_duration_seconds",
            "HTTP request latency",
        ))?;

        registry.register(Box::new(cycles_total.clone()))?;
        registry.register(Box::new(ticks_skipped_total.clone()))?;
        registry.register(Box::new(fetch_failures_total.clone()))?;
        registry.register(Box::new(snapshot_updates_total.clone()))?;
        registry.register(Box::new(signal_updates_total.clone()))?;
        registry.register(Box::new(cycle_duration_seconds.clone()))?;
        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(http_requests_in_flight.clone()))?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;

        Ok(Self {
            registry,
            cycles_total,
            ticks_skipped_total,
            fetch_failures_total,
            snapshot_updates_total,
            signal_updates_total,
            cycle_duration_seconds,
            http_requests_total,
            http_requests_in_flight,
            http_request_duration_seconds,
        })
    }

    /// Render all metrics in the Prometheus text exposition format
    pub fn export(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}
