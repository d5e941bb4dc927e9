use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Point-in-time capture of the engine's system, account, connection and
/// resource state. Each successful fetch replaces the previous one whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(with = "super::timestamp")]
    pub timestamp: DateTime<Utc>,
    /// Open-ended status label, e.g. "Running" or "Warning"
    pub system_status: String,
    pub total_signals: u64,
    pub active_positions: u64,
    pub daily_pnl: f64,
    pub data_feed_connected: bool,
    pub trading_api_connected: bool,
    /// Percent, not range-checked
    pub cpu_usage: f64,
    /// Percent, not range-checked
    pub memory_usage: f64,
    pub uptime_seconds: u64,
    /// Keyed by symbol; sorted so rendering order is stable
    #[serde(default)]
    pub symbols: BTreeMap<String, SymbolState>,
    /// Market-wide most active stocks, only sent when the engine has them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub most_actives: Option<MostActives>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SymbolState {
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub trend: Option<String>,
    #[serde(default)]
    pub current_price: Option<f64>,
    #[serde(default)]
    pub price_change: Option<f64>,
    #[serde(default)]
    pub price_change_pct: Option<f64>,
    #[serde(default)]
    pub volatility: Option<f64>,
    #[serde(default)]
    pub volume_profile: Option<String>,
    #[serde(default)]
    pub last_signal_type: Option<String>,
    #[serde(default, with = "super::timestamp::option")]
    pub last_signal_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_signal_price: Option<f64>,
    #[serde(default)]
    pub last_signal_confidence: Option<f64>,
    #[serde(default)]
    pub position_size: Option<f64>,
    #[serde(default)]
    pub unrealized_pnl: Option<f64>,
    #[serde(default)]
    pub bars_received_today: Option<u64>,
    #[serde(default, with = "super::timestamp::option")]
    pub last_bar_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MostActives {
    #[serde(with = "super::timestamp")]
    pub last_updated: DateTime<Utc>,
    #[serde(default)]
    pub stocks: Vec<ActiveStock>,
}

/// Volume and trade count arrive as floats from some market data feeds
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ActiveStock {
    pub symbol: String,
    #[serde(default)]
    pub volume: Option<f64>,
    #[serde(default)]
    pub trade_count: Option<f64>,
    #[serde(default)]
    pub change_percent: Option<f64>,
}
