//! Application configuration with layered loading.
//!
//! This module provides configuration management using figment for layered
//! configuration loading from multiple sources:
//!
//! 1. Environment variables (BUNDESLIGA_*)
//! 2. TOML config file (if BUNDESLIGA_CONFIG_FILE set)
//! 3. Built-in defaults

use std::path::PathBuf;
use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

mod validation;

pub use validation::ConfigError;

/// Application configuration with layered loading.
///
/// Loading precedence (highest wins):
/// 1. Environment variables (BUNDESLIGA_*)
/// 2. TOML config file (if BUNDESLIGA_CONFIG_FILE set)
/// 3. Built-in defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// First season to scrape, by starting year.
    ///
    /// Set via BUNDESLIGA_START_YEAR environment variable.
    #[serde(default = "default_start_year")]
    pub start_year: u16,

    /// Last season to scrape (inclusive), by starting year.
    ///
    /// Set via BUNDESLIGA_END_YEAR environment variable.
    #[serde(default = "default_end_year")]
    pub end_year: u16,

    /// Where the JSON document for the run is written.
    ///
    /// Set via BUNDESLIGA_OUTPUT_PATH environment variable.
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// Season page URL prefix; the season label ("2005/06") is appended.
    ///
    /// Set via BUNDESLIGA_BASE_URL environment variable.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// CSS class that marks candidate tables on a season page.
    #[serde(default = "default_table_class")]
    pub table_class: String,

    /// User-Agent string for HTTP requests.
    ///
    /// Set via BUNDESLIGA_USER_AGENT environment variable.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// HTTP request timeout in milliseconds.
    ///
    /// Set via BUNDESLIGA_TIMEOUT_MS environment variable.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Fetch attempts per page before giving up on it.
    ///
    /// Set via BUNDESLIGA_MAX_RETRIES environment variable.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Backoff range `[min, max]` in milliseconds after a failed attempt.
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: [u64; 2],

    /// Backoff range `[min, max]` in milliseconds after an HTTP 429.
    #[serde(default = "default_rate_limit_delay_ms")]
    pub rate_limit_delay_ms: [u64; 2],

    /// A goalscorer table must have a header containing one of these.
    #[serde(default = "default_player_keywords")]
    pub player_keywords: Vec<String>,

    /// A goalscorer table must also have a header containing one of these.
    #[serde(default = "default_goals_keywords")]
    pub goals_keywords: Vec<String>,

    /// Output column labels for goalscorer records, in order.
    #[serde(default = "default_topscorer_columns")]
    pub topscorer_columns: Vec<String>,
}

fn default_start_year() -> u16 {
    2005
}

fn default_end_year() -> u16 {
    2024
}

fn default_output_path() -> PathBuf {
    PathBuf::from("bundesliga_data.json")
}

fn default_base_url() -> String {
    "https://de.wikipedia.org/wiki/Fu%C3%9Fball-Bundesliga_".into()
}

fn default_table_class() -> String {
    "wikitable".into()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36"
        .into()
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_max_retries() -> u32 {
    3
}

fn default_retry_delay_ms() -> [u64; 2] {
    [1_000, 3_000]
}

fn default_rate_limit_delay_ms() -> [u64; 2] {
    [5_000, 10_000]
}

fn default_player_keywords() -> Vec<String> {
    vec!["Spieler".into(), "Name".into()]
}

fn default_goals_keywords() -> Vec<String> {
    vec!["Tore".into()]
}

fn default_topscorer_columns() -> Vec<String> {
    ["Pl.", "Nat.", "Spieler", "Verein", "Tore"].into_iter().map(String::from).collect()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            start_year: default_start_year(),
            end_year: default_end_year(),
            output_path: default_output_path(),
            base_url: default_base_url(),
            table_class: default_table_class(),
            user_agent: default_user_agent(),
            timeout_ms: default_timeout_ms(),
            max_retries: default_max_retries(),
            retry_delay_ms: default_retry_delay_ms(),
            rate_limit_delay_ms: default_rate_limit_delay_ms(),
            player_keywords: default_player_keywords(),
            goals_keywords: default_goals_keywords(),
            topscorer_columns: default_topscorer_columns(),
        }
    }
}

impl AppConfig {
    /// Timeout as Duration for use with reqwest/tokio.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Seasons to scrape, by starting year.
    pub fn seasons(&self) -> std::ops::RangeInclusive<u16> {
        self.start_year..=self.end_year
    }

    /// Load configuration from all sources with layered precedence.
    ///
    /// Priority (highest wins):
    /// 1. Environment variables prefixed with `BUNDESLIGA_`
    /// 2. TOML file from `BUNDESLIGA_CONFIG_FILE` (if set)
    /// 3. Built-in defaults via `Default::default()`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Configuration file cannot be read
    /// - Environment variables cannot be parsed
    /// - Validation fails after loading
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Ok(config_path) = std::env::var("BUNDESLIGA_CONFIG_FILE") {
            figment = figment.merge(Toml::file(&config_path));
        }

        figment = figment.merge(
            Env::prefixed("BUNDESLIGA_")
                .ignore(&["CONFIG_FILE"])
                .map(|key| key.as_str().to_lowercase().into())
                .split("__"),
        );

        let config: Self = figment.extract().map_err(|e| ConfigError::LoadFailed(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.start_year, 2005);
        assert_eq!(config.end_year, 2024);
        assert_eq!(config.output_path, PathBuf::from("bundesliga_data.json"));
        assert_eq!(config.table_class, "wikitable");
        assert_eq!(config.timeout_ms, 10_000);
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.retry_delay_ms, [1_000, 3_000]);
        assert_eq!(config.rate_limit_delay_ms, [5_000, 10_000]);
        assert_eq!(config.player_keywords, vec!["Spieler", "Name"]);
        assert_eq!(config.goals_keywords, vec!["Tore"]);
        assert_eq!(config.topscorer_columns, vec!["Pl.", "Nat.", "Spieler", "Verein", "Tore"]);
    }

    #[test]
    fn test_timeout_duration() {
        let config = AppConfig::default();
        assert_eq!(config.timeout(), Duration::from_millis(10_000));
    }

    #[test]
    fn test_seasons_inclusive() {
        let config = AppConfig { start_year: 2010, end_year: 2012, ..Default::default() };
        assert_eq!(config.seasons().collect::<Vec<_>>(), vec![2010, 2011, 2012]);
    }

    #[test]
    fn test_load_env_overrides() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("BUNDESLIGA_START_YEAR", "2015");
            jail.set_env("BUNDESLIGA_END_YEAR", "2016");
            jail.set_env("BUNDESLIGA_MAX_RETRIES", "5");

            let config = AppConfig::load().map_err(|e| e.to_string())?;
            assert_eq!(config.start_year, 2015);
            assert_eq!(config.end_year, 2016);
            assert_eq!(config.max_retries, 5);
            assert_eq!(config.table_class, "wikitable");
            Ok(())
        });
    }

    #[test]
    fn test_load_toml_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "scrape.toml",
                r#"
                    start_year = 2020
                    end_year = 2021
                    goals_keywords = ["Tore", "Treffer"]
                "#,
            )?;
            jail.set_env("BUNDESLIGA_CONFIG_FILE", "scrape.toml");
            jail.set_env("BUNDESLIGA_END_YEAR", "2022");

            let config = AppConfig::load().map_err(|e| e.to_string())?;
            assert_eq!(config.start_year, 2020);
            assert_eq!(config.end_year, 2022);
            assert_eq!(config.goals_keywords, vec!["Tore", "Treffer"]);
            Ok(())
        });
    }

    #[test]
    fn test_load_rejects_invalid() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("BUNDESLIGA_START_YEAR", "2024");
            jail.set_env("BUNDESLIGA_END_YEAR", "2005");

            let result = AppConfig::load();
            assert!(matches!(result, Err(ConfigError::Invalid { field, .. }) if field == "end_year"));
            Ok(())
        });
    }
}
