//! Plain-text display surface for terminals

use crate::render::view::{
    DashboardView, MostActivesView, SignalView, SnapshotView, SymbolPanel, SymbolView,
    NO_DATA_PLACEHOLDER, NO_SIGNALS_PLACEHOLDER,
};

pub fn render_text(view: &DashboardView) -> String {
    let mut lines = vec!["=== Trading Monitor ===".to_string()];

    match &view.snapshot {
        Some(snapshot) => push_snapshot(&mut lines, snapshot),
        None => lines.push(NO_DATA_PLACEHOLDER.to_string()),
    }

    lines.push(String::new());
    lines.push("Recent signals".to_string());
    if view.signals.is_empty() {
        lines.push(format!("  {}", NO_SIGNALS_PLACEHOLDER));
    } else {
        lines.extend(view.signals.iter().map(signal_line));
    }

    lines.join("\n")
}

fn push_snapshot(lines: &mut Vec<String>, snapshot: &SnapshotView) {
    lines.push(format!(
        "Status: {} [{}]    Last update: {}",
        snapshot.status.text, snapshot.status.class, snapshot.last_update
    ));
    lines.push(format!(
        "Signals today: {}    Active positions: {}    Daily PnL: {}",
        snapshot.total_signals, snapshot.active_positions, snapshot.daily_pnl.text
    ));
    lines.push(format!(
        "Data feed: {}    Trading API: {}",
        snapshot.data_feed.text, snapshot.trading_api.text
    ));
    lines.push(format!(
        "CPU: {}    Memory: {}    Uptime: {}",
        snapshot.cpu_usage, snapshot.memory_usage, snapshot.uptime
    ));

    lines.push(String::new());
    lines.push("Symbols".to_string());
    match &snapshot.symbols {
        SymbolPanel::Empty { placeholder } => lines.push(format!("  {}", placeholder)),
        SymbolPanel::Symbols { rows } => {
            for row in rows {
                let mut line = format!("  {:<8} {:<10} {}", row.symbol, row.trend, row.price);
                if let Some(change) = &row.change_pct {
                    line.push(' ');
                    line.push_str(&change.text);
                }
                lines.push(line);
                if row.has_details() {
                    lines.push(detail_line(row));
                }
            }
        }
    }

    if let Some(most_actives) = &snapshot.most_actives {
        push_most_actives(lines, most_actives);
    }
}

fn detail_line(row: &SymbolView) -> String {
    let mut line = format!(
        "           pos {}  uPnL {}  vol {}  bars {}",
        row.position_size.text, row.unrealized_pnl.text, row.volatility, row.bars_today
    );
    if let Some(last) = &row.last_signal {
        line.push_str(&format!("  last {} {}", last.signal_type, last.price));
        if let Some(time) = &last.time {
            line.push_str(&format!(" @ {}", time));
        }
        if let Some(confidence) = &last.confidence {
            line.push_str(&format!(" ({})", confidence));
        }
    }
    line
}

fn push_most_actives(lines: &mut Vec<String>, most_actives: &MostActivesView) {
    lines.push(String::new());
    lines.push(format!("Most actives (as of {})", most_actives.last_updated));
    for row in &most_actives.rows {
        let mut line = format!(
            "  {:<8} vol {:<12} trades {}",
            row.symbol, row.volume, row.trade_count
        );
        if let Some(change) = &row.change_pct {
            line.push(' ');
            line.push_str(&change.text);
        }
        lines.push(line);
    }
}

fn signal_line(signal: &SignalView) -> String {
    let mut line = format!(
        "  {} {:<6} {:<8} {}",
        signal.time, signal.signal_type, signal.symbol, signal.price
    );
    if let Some(confidence) = &signal.confidence {
        line.push_str(&format!(" ({})", confidence));
    }
    if signal.executed {
        line.push_str(" *");
    }
    if !signal.reason.is_empty() {
        line.push_str(" - ");
        line.push_str(&signal.reason);
    }
    line
}
