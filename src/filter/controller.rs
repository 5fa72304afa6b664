//! Filter Controller
//!
//! Owns column and global filter text for one grid instance. Local state is
//! updated synchronously so inputs stay responsive; the host is notified
//! through two independent debounce pipelines:
//!
//! ```text
//! set_column_filter_value ──► FilterState ──► column window (500ms) ──► on_values_change(snapshot)
//! toggle_column_filter_active ──► FilterState (display only, never notifies)
//! set_global_filter_value ──► echo ──► global window (300ms) ──► on_global_change(value)
//! ```
//!
//! All columns share one window: an edit to any column restarts it and the
//! delivery carries every column's latest value, not only the edited one.

use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;

use super::debounce::{Debouncer, Delivery};
use super::state::{FilterEntry, FilterState, FilterValues};
use crate::constants::{COLUMN_FILTER_DEBOUNCE_MS, GLOBAL_FILTER_DEBOUNCE_MS};

/// Debounce window lengths for the two pipelines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceWindows {
    pub column: Duration,
    pub global: Duration,
}

impl Default for DebounceWindows {
    fn default() -> Self {
        Self {
            column: Duration::from_millis(COLUMN_FILTER_DEBOUNCE_MS),
            global: Duration::from_millis(GLOBAL_FILTER_DEBOUNCE_MS),
        }
    }
}

/// Debounced filter state for one grid
pub struct FilterController {
    filters: FilterState,
    global_value: String,
    column_pipeline: Debouncer<FilterValues>,
    global_pipeline: Debouncer<String>,
}

impl FilterController {
    /// Create a controller whose timers run on `runtime`
    pub fn new(
        windows: DebounceWindows,
        runtime: Handle,
        on_values_change: impl Fn(FilterValues) + Send + Sync + 'static,
        on_global_change: impl Fn(String) + Send + Sync + 'static,
    ) -> Self {
        Self::new_stamped(
            windows,
            runtime,
            move |delivery| on_values_change(delivery.payload),
            move |delivery| on_global_change(delivery.payload),
        )
    }

    /// Create a controller whose callbacks receive ticketed deliveries
    ///
    /// For hosts that forward deliveries across a channel: a delivery whose
    /// ticket fails [`Self::is_column_delivery_current`] or
    /// [`Self::is_global_delivery_current`] was superseded by a later edit
    /// while in flight and must be dropped.
    pub fn new_stamped(
        windows: DebounceWindows,
        runtime: Handle,
        on_values_change: impl Fn(Delivery<FilterValues>) + Send + Sync + 'static,
        on_global_change: impl Fn(Delivery<String>) + Send + Sync + 'static,
    ) -> Self {
        Self {
            filters: FilterState::new(),
            global_value: String::new(),
            column_pipeline: Debouncer::new(
                "column-filter",
                windows.column,
                runtime.clone(),
                Arc::new(on_values_change),
            ),
            global_pipeline: Debouncer::new(
                "global-filter",
                windows.global,
                runtime,
                Arc::new(on_global_change),
            ),
        }
    }

    /// Seed the global filter echo with the host's current value
    pub fn with_global_value(mut self, value: impl Into<String>) -> Self {
        self.global_value = value.into();
        self
    }

    /// Update the text of one column filter and restart the column window
    pub fn set_column_filter_value(&mut self, key: &str, value: impl Into<String>) {
        self.filters.set_value(key, value);
        let snapshot = self.filters.values();
        tracing::trace!(key, filters = snapshot.len(), "Column filter edited");
        self.column_pipeline.schedule(snapshot);
    }

    /// Show or hide the filter input for `key`, returning the new flag
    ///
    /// Purely local; never schedules a delivery.
    pub fn toggle_column_filter_active(&mut self, key: &str) -> bool {
        let active = self.filters.toggle_active(key);
        tracing::debug!(key, active, "Column filter toggled");
        active
    }

    /// Update the global filter echo and restart the global window
    pub fn set_global_filter_value(&mut self, value: impl Into<String>) {
        self.global_value = value.into();
        self.global_pipeline.schedule(self.global_value.clone());
    }

    // ==================== Read Access ====================

    pub fn filter_state(&self) -> &FilterState {
        &self.filters
    }

    pub fn entry(&self, key: &str) -> Option<&FilterEntry> {
        self.filters.get(key)
    }

    pub fn column_filter_value(&self, key: &str) -> &str {
        self.filters.value(key)
    }

    pub fn is_filter_active(&self, key: &str) -> bool {
        self.filters.is_active(key)
    }

    pub fn has_active_filters(&self) -> bool {
        self.filters.any_active()
    }

    pub fn global_filter_value(&self) -> &str {
        &self.global_value
    }

    pub fn is_column_pending(&self) -> bool {
        self.column_pipeline.is_pending()
    }

    pub fn is_global_pending(&self) -> bool {
        self.global_pipeline.is_pending()
    }

    pub fn is_column_delivery_current(&self, ticket: u64) -> bool {
        self.column_pipeline.is_current(ticket)
    }

    pub fn is_global_delivery_current(&self, ticket: u64) -> bool {
        self.global_pipeline.is_current(ticket)
    }
}

impl std::fmt::Debug for FilterController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterController")
            .field("filters", &self.filters)
            .field("global_value", &self.global_value)
            .field("column_pipeline", &self.column_pipeline)
            .field("global_pipeline", &self.global_pipeline)
            .finish()
    }
}
