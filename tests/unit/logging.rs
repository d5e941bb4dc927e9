//! Unit tests for log format selection

use trade_monitor::logging::is_production;

#[test]
fn test_production_names_select_json() {
    assert!(is_production("production"));
    assert!(is_production("prod"));
}

#[test]
fn test_other_environments_use_colored_output() {
    assert!(!is_production("sandbox"));
    assert!(!is_production("staging"));
    assert!(!is_production("Production"));
    assert!(!is_production(""));
}
