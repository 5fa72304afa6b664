//! Grid Configuration
//!
//! Persisted as TOML in the platform config directory. Missing or empty
//! files yield defaults; the defaults are written back so the file is
//! discoverable.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::constants::{
    COLUMN_FILTER_DEBOUNCE_MS, CONFIG_FILE_NAME, DEFAULT_PAGE_SIZE, GLOBAL_FILTER_DEBOUNCE_MS,
    SIMULATED_LATENCY_MS,
};
use crate::error::Result;
use crate::filter::DebounceWindows;
use crate::helpers::get_or_create_config_dir;

/// Tunables for the grid and the demo page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Column filter debounce window in milliseconds
    pub column_filter_debounce_ms: u64,
    /// Global filter debounce window in milliseconds
    pub global_filter_debounce_ms: u64,
    /// Rows per page
    pub page_size: usize,
    /// Simulated server latency for the demo page in milliseconds
    pub simulated_latency_ms: u64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            column_filter_debounce_ms: COLUMN_FILTER_DEBOUNCE_MS,
            global_filter_debounce_ms: GLOBAL_FILTER_DEBOUNCE_MS,
            page_size: DEFAULT_PAGE_SIZE,
            simulated_latency_ms: SIMULATED_LATENCY_MS,
        }
    }
}

fn get_config_path() -> Result<PathBuf> {
    Ok(get_or_create_config_dir()?.join(CONFIG_FILE_NAME))
}

impl GridConfig {
    /// Parse a config document; blank input yields defaults
    pub fn from_toml(value: &str) -> Result<Self> {
        if value.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(toml::from_str(value)?)
    }

    /// Load from the config file, writing defaults when it is missing or blank
    pub fn try_load() -> Result<Self> {
        let path = get_config_path()?;
        info!(path = ?path, "Loading config file");

        let value = if path.exists() {
            std::fs::read_to_string(&path)?
        } else {
            String::new()
        };

        if value.trim().is_empty() {
            let config = Self::default();
            config.save()?;
            return Ok(config);
        }

        Self::from_toml(&value).map_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse config file");
            e
        })
    }

    /// Load, falling back to defaults on any error
    pub fn load_or_default() -> Self {
        Self::try_load().unwrap_or_else(|e| {
            warn!(error = %e, "Using default grid config");
            Self::default()
        })
    }

    /// Save to the config file
    pub fn save(&self) -> Result<()> {
        let path = get_config_path()?;
        let value = toml::to_string(self)?;
        std::fs::write(&path, value)?;
        info!(path = ?path, "Config saved");
        Ok(())
    }

    pub fn debounce_windows(&self) -> DebounceWindows {
        DebounceWindows {
            column: Duration::from_millis(self.column_filter_debounce_ms),
            global: Duration::from_millis(self.global_filter_debounce_ms),
        }
    }

    /// Rows per page, never zero
    pub fn page_size(&self) -> usize {
        self.page_size.max(1)
    }

    pub fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_blank_document_uses_defaults() {
        let config = GridConfig::from_toml("  \n").expect("parse");
        assert_eq!(config, GridConfig::default());
        assert_eq!(config.debounce_windows(), DebounceWindows::default());
    }

    #[test]
    fn test_partial_document_keeps_other_defaults() {
        let config = GridConfig::from_toml("global_filter_debounce_ms = 150\n").expect("parse");
        assert_eq!(config.global_filter_debounce_ms, 150);
        assert_eq!(config.column_filter_debounce_ms, COLUMN_FILTER_DEBOUNCE_MS);
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.debounce_windows().global, Duration::from_millis(150));
    }

    #[test]
    fn test_invalid_document_is_an_error() {
        let result = GridConfig::from_toml("page_size = \"five\"");
        assert!(matches!(result, Err(Error::TomlDe { .. })));
    }

    #[test]
    fn test_page_size_never_zero() {
        let config = GridConfig {
            page_size: 0,
            ..Default::default()
        };
        assert_eq!(config.page_size(), 1);
    }

    #[test]
    fn test_serialized_form_round_trips() {
        let config = GridConfig {
            column_filter_debounce_ms: 750,
            ..Default::default()
        };
        let text = toml::to_string(&config).expect("serialize");
        assert!(text.contains("column_filter_debounce_ms = 750"));
        assert_eq!(GridConfig::from_toml(&text).expect("parse"), config);
    }
}
