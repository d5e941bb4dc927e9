use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A trading decision event reported by the engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    /// Free-form label such as "BUY" or "SELL"
    pub signal_type: String,
    pub symbol: String,
    pub price: f64,
    #[serde(with = "super::timestamp")]
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub executed: bool,
}
