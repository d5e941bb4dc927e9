//! View model derived from the latest snapshot and signal history

use crate::models::{ActiveStock, MostActives, Signal, Snapshot, SymbolState};
use crate::render::format::{
    format_change, format_change_pct, format_clock, format_confidence, format_money,
    format_percent, format_price, format_quantity, format_ratio, format_uptime, sign_tone,
    signal_side, status_level, style_key, trend_tone, ConnectionState, SignalSide, StatusLevel,
    Tone, MISSING_VALUE, UNKNOWN_TREND,
};
use serde::Serialize;

/// Display cap for the signal list, applied on top of whatever limit the
/// backend was asked for
pub const MAX_DISPLAYED_SIGNALS: usize = 10;

pub const NO_SYMBOLS_PLACEHOLDER: &str = "No symbols being monitored";
pub const NO_SIGNALS_PLACEHOLDER: &str = "No signals yet";
pub const NO_DATA_PLACEHOLDER: &str = "Waiting for data...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewPhase {
    NoData,
    ShowingData,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusView {
    pub text: String,
    pub class: String,
    pub level: StatusLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToneText {
    pub text: String,
    pub tone: Tone,
}

impl ToneText {
    /// Signed value colored by sign; absent values are neutral placeholders
    fn signed(value: Option<f64>, format: impl Fn(f64) -> String) -> Self {
        match value {
            Some(v) if !v.is_nan() => Self {
                text: format(v),
                tone: sign_tone(v),
            },
            _ => Self {
                text: MISSING_VALUE.to_string(),
                tone: Tone::Neutral,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConnectionView {
    pub state: ConnectionState,
    pub text: String,
    pub class: String,
}

impl ConnectionView {
    fn from_flag(connected: bool) -> Self {
        let state = ConnectionState::from_flag(connected);
        Self {
            state,
            text: state.label().to_string(),
            class: state.class().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SymbolView {
    pub symbol: String,
    pub trend: String,
    pub trend_class: String,
    pub trend_tone: Tone,
    pub price: String,
    /// Omitted entirely when the change is absent or zero
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_pct: Option<ToneText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_change: Option<ToneText>,
    pub volatility: String,
    pub volume_profile: String,
    pub position_size: ToneText,
    pub unrealized_pnl: ToneText,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_signal: Option<LastSignalView>,
    pub bars_today: String,
    pub last_bar: String,
}

impl SymbolView {
    /// True when any per-symbol trading detail beyond price and trend is known
    pub fn has_details(&self) -> bool {
        self.last_signal.is_some()
            || [
                &self.position_size.text,
                &self.unrealized_pnl.text,
                &self.volatility,
                &self.bars_today,
            ]
            .iter()
            .any(|text| text.as_str() != MISSING_VALUE)
    }
}

/// Most recent signal the engine recorded for one symbol
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LastSignalView {
    pub signal_type: String,
    pub badge_class: String,
    pub side: SignalSide,
    pub price: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActiveStockView {
    pub symbol: String,
    pub volume: String,
    pub trade_count: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_pct: Option<ToneText>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MostActivesView {
    pub last_updated: String,
    pub rows: Vec<ActiveStockView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SymbolPanel {
    Empty { placeholder: String },
    Symbols { rows: Vec<SymbolView> },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnapshotView {
    pub last_update: String,
    pub status: StatusView,
    pub total_signals: String,
    pub active_positions: String,
    pub daily_pnl: ToneText,
    pub data_feed: ConnectionView,
    pub trading_api: ConnectionView,
    pub cpu_usage: String,
    pub memory_usage: String,
    pub uptime: String,
    pub symbols: SymbolPanel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub most_actives: Option<MostActivesView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignalView {
    pub signal_type: String,
    pub badge_class: String,
    pub side: SignalSide,
    pub symbol: String,
    pub price: String,
    pub time: String,
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<String>,
    pub executed: bool,
}

/// Everything the display surface shows.
///
/// The snapshot half and the signal half update independently; either
/// may be stale relative to the other.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub phase: ViewPhase,
    pub snapshot: Option<SnapshotView>,
    pub signals: Vec<SignalView>,
}

impl Default for DashboardView {
    fn default() -> Self {
        Self {
            phase: ViewPhase::NoData,
            snapshot: None,
            signals: Vec::new(),
        }
    }
}

impl DashboardView {
    pub fn has_data(&self) -> bool {
        self.phase == ViewPhase::ShowingData
    }
}

pub fn render_snapshot(snapshot: &Snapshot) -> SnapshotView {
    let symbols = if snapshot.symbols.is_empty() {
        SymbolPanel::Empty {
            placeholder: NO_SYMBOLS_PLACEHOLDER.to_string(),
        }
    } else {
        SymbolPanel::Symbols {
            rows: snapshot
                .symbols
                .iter()
                .map(|(key, state)| render_symbol(key, state))
                .collect(),
        }
    };

    SnapshotView {
        last_update: format_clock(&snapshot.timestamp),
        status: StatusView {
            text: snapshot.system_status.clone(),
            class: style_key(&snapshot.system_status),
            level: status_level(&snapshot.system_status),
        },
        total_signals: snapshot.total_signals.to_string(),
        active_positions: snapshot.active_positions.to_string(),
        daily_pnl: ToneText {
            text: format_money(snapshot.daily_pnl),
            tone: sign_tone(snapshot.daily_pnl),
        },
        data_feed: ConnectionView::from_flag(snapshot.data_feed_connected),
        trading_api: ConnectionView::from_flag(snapshot.trading_api_connected),
        cpu_usage: format_percent(snapshot.cpu_usage),
        memory_usage: format_percent(snapshot.memory_usage),
        uptime: format_uptime(snapshot.uptime_seconds),
        symbols,
        most_actives: snapshot.most_actives.as_ref().map(render_most_actives),
    }
}

/// `key` is the map key the state was filed under; it stands in for a
/// missing `symbol` field.
pub fn render_symbol(key: &str, state: &SymbolState) -> SymbolView {
    let symbol = if state.symbol.is_empty() {
        key.to_string()
    } else {
        state.symbol.clone()
    };
    let trend = state
        .trend
        .as_deref()
        .filter(|t| !t.is_empty())
        .unwrap_or(UNKNOWN_TREND)
        .to_string();
    let change_pct = format_change_pct(state.price_change_pct).map(|text| ToneText {
        text,
        tone: sign_tone(state.price_change_pct.unwrap_or_default()),
    });
    let price_change = format_change(state.price_change).map(|text| ToneText {
        text,
        tone: sign_tone(state.price_change.unwrap_or_default()),
    });

    SymbolView {
        trend_class: style_key(&trend),
        trend_tone: trend_tone(&trend),
        trend,
        symbol,
        price: format_price(state.current_price),
        change_pct,
        price_change,
        volatility: format_ratio(state.volatility),
        volume_profile: non_empty(state.volume_profile.as_deref()),
        position_size: ToneText::signed(state.position_size, |v| v.to_string()),
        unrealized_pnl: ToneText::signed(state.unrealized_pnl, format_money),
        last_signal: render_last_signal(state),
        bars_today: state
            .bars_received_today
            .map(|n| n.to_string())
            .unwrap_or_else(|| MISSING_VALUE.to_string()),
        last_bar: state
            .last_bar_time
            .as_ref()
            .map(format_clock)
            .unwrap_or_else(|| MISSING_VALUE.to_string()),
    }
}

fn render_last_signal(state: &SymbolState) -> Option<LastSignalView> {
    let signal_type = state.last_signal_type.as_deref().filter(|t| !t.is_empty())?;
    Some(LastSignalView {
        signal_type: signal_type.to_string(),
        badge_class: style_key(signal_type),
        side: signal_side(signal_type),
        price: format_price(state.last_signal_price),
        time: state.last_signal_time.as_ref().map(format_clock),
        confidence: state.last_signal_confidence.map(format_confidence),
    })
}

pub fn render_most_actives(most_actives: &MostActives) -> MostActivesView {
    MostActivesView {
        last_updated: format_clock(&most_actives.last_updated),
        rows: most_actives.stocks.iter().map(render_active_stock).collect(),
    }
}

fn render_active_stock(stock: &ActiveStock) -> ActiveStockView {
    ActiveStockView {
        symbol: stock.symbol.clone(),
        volume: format_quantity(stock.volume),
        trade_count: format_quantity(stock.trade_count),
        change_pct: format_change_pct(stock.change_percent).map(|text| ToneText {
            text,
            tone: sign_tone(stock.change_percent.unwrap_or_default()),
        }),
    }
}

fn non_empty(value: Option<&str>) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or(MISSING_VALUE)
        .to_string()
}

/// Render at most [`MAX_DISPLAYED_SIGNALS`] entries, in the order given
pub fn render_signals(signals: &[Signal]) -> Vec<SignalView> {
    signals
        .iter()
        .take(MAX_DISPLAYED_SIGNALS)
        .map(render_signal)
        .collect()
}

pub fn render_signal(signal: &Signal) -> SignalView {
    SignalView {
        signal_type: signal.signal_type.clone(),
        badge_class: style_key(&signal.signal_type),
        side: signal_side(&signal.signal_type),
        symbol: signal.symbol.clone(),
        price: format_money(signal.price),
        time: format_clock(&signal.timestamp),
        reason: signal.reason.clone(),
        confidence: signal.confidence.map(format_confidence),
        executed: signal.executed,
    }
}
