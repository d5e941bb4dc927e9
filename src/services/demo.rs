//! Synthetic monitor API for running the dashboard without the engine

use crate::models::{ActiveStock, MostActives, Signal, Snapshot, SymbolState};
use axum::{
    extract::{Query, State},
    response::Json,
    routing::get,
    Router,
};
use chrono::{Duration as ChronoDuration, Utc};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::CorsLayer;

/// Default history length when the request carries no `limit`
pub const DEFAULT_SIGNAL_LIMIT: usize = 50;

/// Seconds between two synthetic signals
const SIGNAL_EVERY_SECS: u64 = 45;

/// Deterministic data source: every value is a function of the time
/// elapsed since construction.
pub struct DemoEngine {
    started: Instant,
    symbols: Vec<String>,
}

impl DemoEngine {
    pub fn new(symbols: Vec<String>) -> Self {
        Self {
            started: Instant::now(),
            symbols,
        }
    }

    fn elapsed_secs(&self) -> u64 {
        self.started.elapsed().as_secs()
    }

    pub fn snapshot(&self) -> Snapshot {
        let elapsed = self.elapsed_secs();
        let now = Utc::now();
        let phase = elapsed as f64 / 30.0;
        let last_signal = self.signals(1).into_iter().next();

        let symbols: BTreeMap<String, SymbolState> = self
            .symbols
            .iter()
            .enumerate()
            .map(|(i, symbol)| {
                let wave = (phase + i as f64).sin();
                let base = 100.0 + 50.0 * i as f64;
                let state = SymbolState {
                    symbol: symbol.clone(),
                    trend: Some(if wave >= 0.0 { "UPTREND" } else { "DOWNTREND" }.to_string()),
                    current_price: Some(round2(base + wave * 2.0)),
                    price_change: Some(round2(wave * 2.0)),
                    price_change_pct: Some(round2(wave * 2.0 / base * 100.0)),
                    volatility: Some(0.012),
                    volume_profile: Some("NORMAL".to_string()),
                    position_size: Some(if i % 2 == 0 { 10.0 } else { 0.0 }),
                    unrealized_pnl: Some(round2(wave * 15.0)),
                    bars_received_today: Some(elapsed / 60),
                    last_bar_time: (elapsed >= 60)
                        .then(|| now - ChronoDuration::seconds((elapsed % 60) as i64)),
                    ..SymbolState::default()
                };
                let state = match &last_signal {
                    Some(signal) if &signal.symbol == symbol => SymbolState {
                        last_signal_type: Some(signal.signal_type.clone()),
                        last_signal_time: Some(signal.timestamp),
                        last_signal_price: Some(signal.price),
                        last_signal_confidence: signal.confidence,
                        ..state
                    },
                    _ => state,
                };
                (symbol.clone(), state)
            })
            .collect();

        let daily_pnl = round2(symbols.values().filter_map(|s| s.unrealized_pnl).sum());
        let active_positions = symbols
            .values()
            .filter(|s| s.position_size.unwrap_or_default() != 0.0)
            .count() as u64;

        let most_actives = MostActives {
            last_updated: now,
            stocks: symbols
                .values()
                .map(|s| ActiveStock {
                    symbol: s.symbol.clone(),
                    volume: Some(1_000_000.0 + (elapsed * 1_500) as f64),
                    trade_count: Some((elapsed * 12) as f64),
                    change_percent: s.price_change_pct,
                })
                .collect(),
        };

        Snapshot {
            timestamp: now,
            system_status: "Running".to_string(),
            total_signals: elapsed / SIGNAL_EVERY_SECS,
            active_positions,
            daily_pnl,
            data_feed_connected: true,
            trading_api_connected: elapsed % 600 < 570,
            cpu_usage: round2(20.0 + 10.0 * phase.cos().abs()),
            memory_usage: 41.5,
            uptime_seconds: elapsed,
            symbols,
            most_actives: Some(most_actives),
        }
    }

    /// Most recent signals first
    pub fn signals(&self, limit: usize) -> Vec<Signal> {
        if self.symbols.is_empty() {
            return Vec::new();
        }

        let elapsed = self.elapsed_secs();
        let now = Utc::now();
        let count = elapsed / SIGNAL_EVERY_SECS;

        (1..=count)
            .rev()
            .take(limit)
            .map(|k| {
                let symbol = &self.symbols[(k as usize) % self.symbols.len()];
                let age = elapsed - k * SIGNAL_EVERY_SECS;
                let buy = k % 2 == 0;
                Signal {
                    signal_type: if buy { "BUY" } else { "SELL" }.to_string(),
                    symbol: symbol.clone(),
                    price: round2(100.0 + (k as f64).sin() * 5.0),
                    timestamp: now - ChronoDuration::seconds(age as i64),
                    reason: if buy { "pullback entry" } else { "failed breakout" }.to_string(),
                    confidence: Some(0.6 + (k % 4) as f64 * 0.1),
                    executed: k % 3 == 0,
                }
            })
            .collect()
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[derive(Debug, Deserialize)]
struct SignalsQuery {
    limit: Option<usize>,
}

async fn snapshot_handler(State(engine): State<Arc<DemoEngine>>) -> Json<Snapshot> {
    Json(engine.snapshot())
}

async fn signals_handler(
    State(engine): State<Arc<DemoEngine>>,
    Query(params): Query<SignalsQuery>,
) -> Json<Vec<Signal>> {
    Json(engine.signals(params.limit.unwrap_or(DEFAULT_SIGNAL_LIMIT)))
}

pub fn demo_router(engine: Arc<DemoEngine>) -> Router {
    Router::new()
        .route("/api/snapshot", get(snapshot_handler))
        .route("/api/signals", get(signals_handler))
        .layer(CorsLayer::permissive())
        .with_state(engine)
}
