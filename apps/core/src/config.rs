//! Application configuration from the environment.
//!
//! Values come from process environment variables (a `.env` file is loaded
//! at startup). Malformed values are startup-fatal.

use std::env;

use crate::error::AppError;

/// Session ring depth variable
const HISTORY_LIMIT_VAR: &str = "SENTIBUDDY_HISTORY_LIMIT";
/// Default tracing filter variable (RUST_LOG still wins when set)
const LOG_FILTER_VAR: &str = "SENTIBUDDY_LOG";

const DEFAULT_HISTORY_LIMIT: usize = 10;
const DEFAULT_LOG_FILTER: &str = "info";

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// How many reports the session remembers
    pub history_limit: usize,
    /// Default tracing env-filter directive
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the environment, falling back to defaults
    pub fn from_env() -> Result<Self, AppError> {
        let mut config = Self::default();

        if let Ok(raw) = env::var(HISTORY_LIMIT_VAR) {
            config.history_limit = raw
                .trim()
                .parse()
                .map_err(|e| AppError::Config(format!("{}: {}", HISTORY_LIMIT_VAR, e)))?;
        }
        if let Ok(raw) = env::var(LOG_FILTER_VAR) {
            let filter = raw.trim();
            if filter.is_empty() {
                return Err(AppError::Config(format!("{}: empty filter", LOG_FILTER_VAR)));
            }
            config.log_filter = filter.to_string();
        }

        Ok(config)
    }
}
