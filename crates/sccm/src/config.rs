//! Ingestion settings.

use serde::{Deserialize, Serialize};

pub const ACTIVE_WINDOW_ENV: &str = "OFFICEVISIT_ACTIVE_WINDOW_DAYS";
pub const MIN_COLUMNS_ENV: &str = "OFFICEVISIT_MIN_COLUMNS";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestConfig {
    /// A machine seen within this many days of "now" is `active`, older is `offline`.
    pub active_window_days: i64,
    /// Columns a headerless line must split into before the splitter stops
    /// relaxing its space-run length.
    pub min_headerless_tokens: usize,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            active_window_days: 30,
            min_headerless_tokens: 4,
        }
    }
}

impl IngestConfig {
    /// Defaults overridden by `OFFICEVISIT_ACTIVE_WINDOW_DAYS` and
    /// `OFFICEVISIT_MIN_COLUMNS`. Unusable values are ignored with a warning.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(ACTIVE_WINDOW_ENV) {
            match raw.trim().parse::<i64>() {
                Ok(days) if days >= 0 => config.active_window_days = days,
                _ => tracing::warn!(
                    value = %raw,
                    default = config.active_window_days,
                    "{ACTIVE_WINDOW_ENV} is not a non-negative integer; using default"
                ),
            }
        }

        if let Some(raw) = lookup(MIN_COLUMNS_ENV) {
            match raw.trim().parse::<usize>() {
                Ok(n) if n >= 1 => config.min_headerless_tokens = n,
                _ => tracing::warn!(
                    value = %raw,
                    default = config.min_headerless_tokens,
                    "{MIN_COLUMNS_ENV} is not a positive integer; using default"
                ),
            }
        }

        config
    }

    pub fn with_active_window_days(mut self, days: i64) -> Self {
        self.active_window_days = days.max(0);
        self
    }
}
