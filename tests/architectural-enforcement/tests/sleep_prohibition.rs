//! Integration Test: Sleep Prohibition
//!
//! **Policy**: The engine never sleeps. Steppers do one unit of work and
//! return; pacing is decided by comparing instants.
//!
//! The TUI may wait, but only on a deadline (`sleep_until` on the pacer's next
//! due instant) or on terminal events. Fixed-interval sleeps and blocking
//! thread sleeps are forbidden everywhere.

use architectural_enforcement::{assert_clean, scan};

fn is_sleep_call(code: &str) -> bool {
    code.contains("::sleep(") || code.contains(".sleep(") || code.contains("sleep_ms(")
}

/// Engine code must not sleep or wait in any form
#[test]
fn test_no_sleep_in_engine() {
    let violations = scan("engine/core/src", |code| {
        is_sleep_call(code) || code.contains("sleep_until(") || code.contains("thread::park")
    });

    if !violations.is_empty() {
        eprintln!("\n❌ CRITICAL: The engine must not sleep or block.");
        eprintln!("Ticks are driven by the surface through Pacer::poll.\n");
    }
    assert_clean("engine sleep", &violations);
}

/// The TUI waits on deadlines, never on fixed intervals
#[test]
fn test_no_interval_sleep_in_tui() {
    let violations = scan("tui/src", is_sleep_call);

    if !violations.is_empty() {
        eprintln!("\n❌ Fixed sleeps found in the TUI.");
        eprintln!("✅ ACCEPTABLE: tokio::time::sleep_until(next deadline)\n");
    }
    assert_clean("tui sleep", &violations);
}

#[test]
fn test_detector() {
    assert!(is_sleep_call("tokio::time::sleep(Duration::from_millis(10)).await;"));
    assert!(is_sleep_call("std::thread::sleep(d);"));
    assert!(!is_sleep_call("tokio::time::sleep_until(at).await"));
}
