//! Integration tests for the `logger` crate

use logger::{debug, error, info, warn};
use logger::{set_level, set_level_from_str, Level};

#[test]
fn level_parse_accepts_valid() {
    assert!(set_level_from_str("error"));
    assert!(set_level_from_str("WARN"));
    assert!(set_level_from_str("info"));
    assert!(set_level_from_str("Debug"));
    assert!(set_level_from_str("err"));
}

#[test]
fn level_parse_rejects_invalid() {
    assert!(!set_level_from_str("trace"));
    assert!(!set_level_from_str(""));
}

#[test]
fn all_macros_emit_without_panicking() {
    set_level(Level::Debug);
    info!("catalog loaded with {} paths", 2);
    warn!("state file missing, starting fresh");
    error!("could not write state file");
    debug!("placed node at ({}, {})", 140.0, 0.0);
}

#[cfg(feature = "log-debug")]
#[test]
fn debug_respects_runtime_flag() {
    use logger::{disable_debug, enable_debug, is_debug_enabled};
    set_level(Level::Debug);
    disable_debug();
    assert!(!is_debug_enabled());
    debug!("suppressed");
    enable_debug();
    assert!(is_debug_enabled());
    debug!("emitted");
}
