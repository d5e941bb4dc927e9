//! Display formatting and classification rules

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Shown where an optional value is missing
pub const MISSING_VALUE: &str = "--";

pub const UNKNOWN_TREND: &str = "UNKNOWN";

/// Color coding for signed values and trends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Positive,
    Negative,
    Neutral,
}

/// Coarse classification of the engine's free-form status label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusLevel {
    Running,
    Starting,
    Warning,
    Stopped,
    Error,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalSide {
    Buy,
    Sell,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionState {
    Connected,
    Disconnected,
}

impl ConnectionState {
    pub fn from_flag(connected: bool) -> Self {
        if connected {
            ConnectionState::Connected
        } else {
            ConnectionState::Disconnected
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConnectionState::Connected => "Connected",
            ConnectionState::Disconnected => "Disconnected",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            ConnectionState::Connected => "connected",
            ConnectionState::Disconnected => "disconnected",
        }
    }
}

/// Lower-case the label and drop everything that is not an ASCII letter.
///
/// `"Partially-Degraded!!"` becomes `"partiallydegraded"`. Labels made only
/// of non-ASCII text collapse to an empty key, which carries no styling.
pub fn style_key(label: &str) -> String {
    label
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .collect()
}

/// Classify a status label by case-insensitive substring match
pub fn status_level(status: &str) -> StatusLevel {
    let status = status.to_lowercase();
    let has = |needles: &[&str]| needles.iter().any(|n| status.contains(n));

    if has(&["error", "fail", "错误"]) {
        StatusLevel::Error
    } else if has(&["warn", "degraded"]) {
        StatusLevel::Warning
    } else if has(&["stop", "停止"]) {
        StatusLevel::Stopped
    } else if has(&["start", "启动"]) {
        StatusLevel::Starting
    } else if has(&["run", "运行"]) {
        StatusLevel::Running
    } else {
        StatusLevel::Neutral
    }
}

pub fn signal_side(signal_type: &str) -> SignalSide {
    let signal_type = signal_type.to_lowercase();
    if signal_type.contains("buy") || signal_type.contains("long") {
        SignalSide::Buy
    } else if signal_type.contains("sell") || signal_type.contains("short") {
        SignalSide::Sell
    } else {
        SignalSide::Other
    }
}

pub fn trend_tone(trend: &str) -> Tone {
    let trend = trend.to_lowercase();
    if trend.contains("up") || trend.contains("bull") {
        Tone::Positive
    } else if trend.contains("down") || trend.contains("bear") {
        Tone::Negative
    } else {
        Tone::Neutral
    }
}

/// Zero counts as positive
pub fn sign_tone(value: f64) -> Tone {
    if value >= 0.0 {
        Tone::Positive
    } else {
        Tone::Negative
    }
}

/// `-12.5` renders as `$-12.50`
pub fn format_money(value: f64) -> String {
    format!("${:.2}", value)
}

/// Optional price; absent, zero and NaN all render as the placeholder
pub fn format_price(value: Option<f64>) -> String {
    match value {
        Some(price) if is_present(price) => format_money(price),
        _ => MISSING_VALUE.to_string(),
    }
}

/// Verbatim percentage, no range check
pub fn format_percent(value: f64) -> String {
    format!("{}%", value)
}

/// Signed change percentage, `None` when absent or zero
pub fn format_change_pct(value: Option<f64>) -> Option<String> {
    match value {
        Some(pct) if is_present(pct) => Some(format!("{:+.2}%", pct)),
        _ => None,
    }
}

/// Signed absolute change, `None` when absent or zero
pub fn format_change(value: Option<f64>) -> Option<String> {
    match value {
        Some(change) if is_present(change) => Some(format!("{:+.2}", change)),
        _ => None,
    }
}

/// A fraction such as volatility shown as a percentage, `0.0123` is `1.23%`
pub fn format_ratio(value: Option<f64>) -> String {
    match value {
        Some(ratio) if !ratio.is_nan() => format!("{:.2}%", ratio * 100.0),
        _ => MISSING_VALUE.to_string(),
    }
}

/// Model confidence in `[0, 1]` as a whole percentage
pub fn format_confidence(value: f64) -> String {
    format!("{:.0}%", value * 100.0)
}

/// Whole-number quantity that may arrive as a float
pub fn format_quantity(value: Option<f64>) -> String {
    match value {
        Some(quantity) if !quantity.is_nan() => format!("{:.0}", quantity),
        _ => MISSING_VALUE.to_string(),
    }
}

/// Split seconds into whole hours and the remaining whole minutes
pub fn uptime_parts(seconds: u64) -> (u64, u64) {
    (seconds / 3600, (seconds % 3600) / 60)
}

pub fn format_uptime(seconds: u64) -> String {
    let (hours, minutes) = uptime_parts(seconds);
    format!("{}h {}m", hours, minutes)
}

pub fn format_clock(ts: &DateTime<Utc>) -> String {
    ts.format("%H:%M:%S").to_string()
}

fn is_present(value: f64) -> bool {
    value != 0.0 && !value.is_nan()
}
