//! Configuration validation rules.
//!
//! This module provides validation logic for `AppConfig` values
//! after they have been loaded from environment, files, or defaults.

use crate::config::AppConfig;
use thiserror::Error;

/// Configuration validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    LoadFailed(String),

    #[error("invalid configuration: {field} - {reason}")]
    Invalid { field: String, reason: String },

    #[error("missing required configuration: {field} ({hint})")]
    Missing { field: String, hint: String },
}

impl AppConfig {
    /// Validate configuration values after loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if:
    /// - `end_year` is before `start_year`
    /// - `max_retries` is 0
    /// - a delay range has its minimum above its maximum
    /// - `timeout_ms` is less than 100ms or exceeds 5 minutes
    /// - `user_agent` or `base_url` is empty
    ///
    /// Returns `ConfigError::Missing` if a keyword or column list is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.end_year < self.start_year {
            return Err(ConfigError::Invalid {
                field: "end_year".into(),
                reason: format!("must not be before start_year ({})", self.start_year),
            });
        }

        if self.max_retries == 0 {
            return Err(ConfigError::Invalid { field: "max_retries".into(), reason: "must be at least 1".into() });
        }

        for (field, [min, max]) in
            [("retry_delay_ms", self.retry_delay_ms), ("rate_limit_delay_ms", self.rate_limit_delay_ms)]
        {
            if min > max {
                return Err(ConfigError::Invalid {
                    field: field.into(),
                    reason: format!("minimum {min} exceeds maximum {max}"),
                });
            }
        }

        if self.timeout_ms < 100 {
            return Err(ConfigError::Invalid { field: "timeout_ms".into(), reason: "must be at least 100ms".into() });
        }
        if self.timeout_ms > 300_000 {
            return Err(ConfigError::Invalid {
                field: "timeout_ms".into(),
                reason: "must not exceed 5 minutes (300000ms)".into(),
            });
        }

        if self.user_agent.is_empty() {
            return Err(ConfigError::Invalid { field: "user_agent".into(), reason: "must not be empty".into() });
        }
        if self.base_url.is_empty() {
            return Err(ConfigError::Invalid { field: "base_url".into(), reason: "must not be empty".into() });
        }

        for (field, values) in [
            ("player_keywords", &self.player_keywords),
            ("goals_keywords", &self.goals_keywords),
            ("topscorer_columns", &self.topscorer_columns),
        ] {
            if values.is_empty() {
                return Err(ConfigError::Missing {
                    field: field.into(),
                    hint: format!("Set BUNDESLIGA_{} to a non-empty list", field.to_uppercase()),
                });
            }
        }

        if self.rate_limit_delay_ms[0] < self.retry_delay_ms[0] {
            tracing::warn!(
                rate_limit_min_ms = self.rate_limit_delay_ms[0],
                retry_min_ms = self.retry_delay_ms[0],
                "rate limit backoff is shorter than the regular retry backoff"
            );
        }

        Ok(())
    }
}
