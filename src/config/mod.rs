//! Runtime settings for space-prompt.
//!
//! There is no config file; everything is read from the environment once per
//! render.

use std::time::Duration;

use space_context::DEFAULT_TIMEOUT;

/// Accent color of the trailing prompt arrow.
pub const DEFAULT_COLOR: &str = "blue";

/// Log filter when `SPACE_PROMPT_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

pub const COLOR_VAR: &str = "SPACE_PROMPT_COLOR";
pub const TIMEOUT_VAR: &str = "SPACE_PROMPT_TIMEOUT_MS";
pub const LOG_VAR: &str = "SPACE_PROMPT_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Color of the trailing arrow.
    pub color: String,
    /// Bound on every external command.
    pub command_timeout: Duration,
    /// `tracing` filter directive for diagnostics on stderr.
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR.to_string(),
            command_timeout: DEFAULT_TIMEOUT,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`. Empty and unparsable values fall back
    /// to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let command_timeout = non_empty(TIMEOUT_VAR)
            .and_then(|v| v.trim().parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.command_timeout);

        Self {
            color: non_empty(COLOR_VAR).unwrap_or(defaults.color),
            command_timeout,
            log_filter: non_empty(LOG_VAR).unwrap_or(defaults.log_filter),
        }
    }
}
