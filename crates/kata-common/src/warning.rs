//! Warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! Used by the selector builder when it accepts input it would normally reject.

use std::collections::HashSet;
use std::sync::Mutex;

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Warn about questionable input (prints once per unique message).
///
/// # Example
/// ```
/// use kata_common::warning::warn_once;
///
/// warn_once("Selector", "unrecognized combinator '|'");
/// ```
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn warn_once(component: &str, message: &str) {
    let key = warning_key(component, message);
    let should_print = WARNED
        .lock()
        .unwrap()
        .get_or_insert_with(HashSet::new)
        .insert(key);

    if should_print {
        eprintln!("{}", format!("[Kata {component}] ⚠ {message}").yellow());
    }
}

/// Whether `message` has been reported for `component` since the last
/// [`clear_warnings`].
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
#[must_use]
pub fn has_warned(component: &str, message: &str) -> bool {
    WARNED
        .lock()
        .unwrap()
        .as_ref()
        .is_some_and(|set| set.contains(&warning_key(component, message)))
}

/// Clear all recorded warnings.
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap();
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}

fn warning_key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}
