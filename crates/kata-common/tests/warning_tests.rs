//! Integration tests for the warning sink.

use kata_common::warning::{clear_warnings, has_warned, warn_once};

#[test]
fn test_warn_once_records_and_clears() {
    clear_warnings();
    assert!(!has_warned("Test", "first message"));

    warn_once("Test", "first message");
    warn_once("Test", "first message");
    assert!(has_warned("Test", "first message"));
    assert!(!has_warned("Other", "first message"));

    clear_warnings();
    assert!(!has_warned("Test", "first message"));
}
