//! Filter State - Per-column filter text and visibility toggles

use ahash::AHashMap;
use std::collections::BTreeMap;

/// Flattened column filter snapshot delivered to the host (key -> value)
pub type FilterValues = BTreeMap<String, String>;

/// Filter text and input visibility for one filterable column
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterEntry {
    /// Raw text typed by the user
    pub value: String,
    /// Whether the filter input for this column is shown
    pub active: bool,
}

/// Column filter state keyed by filter key
///
/// A key that was never touched reads as inactive with an empty value.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    entries: AHashMap<String, FilterEntry>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&FilterEntry> {
        self.entries.get(key)
    }

    /// Current text for `key`, empty when untouched
    pub fn value(&self, key: &str) -> &str {
        self.entries.get(key).map_or("", |entry| entry.value.as_str())
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.entries.get(key).is_some_and(|entry| entry.active)
    }

    /// Whether at least one filter input is shown (drives the filter row)
    pub fn any_active(&self) -> bool {
        self.entries.values().any(|entry| entry.active)
    }

    /// Replace the text for `key`, keeping its `active` flag
    pub fn set_value(&mut self, key: &str, value: impl Into<String>) {
        self.entries.entry(key.to_string()).or_default().value = value.into();
    }

    /// Flip `active` for `key` and return the new flag
    pub fn toggle_active(&mut self, key: &str) -> bool {
        let entry = self.entries.entry(key.to_string()).or_default();
        entry.active = !entry.active;
        entry.active
    }

    /// Flatten to `key -> value`, dropping the `active` flags
    pub fn values(&self) -> FilterValues {
        self.entries
            .iter()
            .map(|(key, entry)| (key.clone(), entry.value.clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untouched_key_reads_as_inactive_and_empty() {
        let state = FilterState::new();
        assert_eq!(state.value("status"), "");
        assert!(!state.is_active("status"));
        assert!(state.get("status").is_none());
        assert!(!state.any_active());
    }

    #[test]
    fn test_set_value_preserves_active() {
        let mut state = FilterState::new();
        assert!(state.toggle_active("status"));
        state.set_value("status", "pending");

        let entry = state.get("status").expect("entry");
        assert!(entry.active);
        assert_eq!(entry.value, "pending");
    }

    #[test]
    fn test_toggle_keeps_value() {
        let mut state = FilterState::new();
        state.set_value("email", "a@b");
        assert!(state.toggle_active("email"));
        assert!(!state.toggle_active("email"));
        assert_eq!(state.value("email"), "a@b");
        assert!(state.toggle_active("email"));
        assert_eq!(state.value("email"), "a@b");
    }

    #[test]
    fn test_values_flattens_every_entry() {
        let mut state = FilterState::new();
        state.set_value("status", "a");
        state.toggle_active("amount");

        let values = state.values();
        assert_eq!(values.len(), 2);
        assert_eq!(values.get("status").map(String::as_str), Some("a"));
        assert_eq!(values.get("amount").map(String::as_str), Some(""));
    }

    #[test]
    fn test_any_active() {
        let mut state = FilterState::new();
        state.set_value("status", "x");
        assert!(!state.any_active());
        state.toggle_active("email");
        assert!(state.any_active());
        state.toggle_active("email");
        assert!(!state.any_active());
    }
}
