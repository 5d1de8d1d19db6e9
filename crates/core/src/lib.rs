//! Core types and shared functionality for the Bundesliga scraper.
//!
//! This crate provides:
//! - Unified error types
//! - Configuration structures
//! - The output document model and its JSON persistence

pub mod config;
pub mod error;
pub mod record;
pub mod season;

pub use config::{AppConfig, ConfigError};
pub use error::Error;
pub use record::Record;
pub use season::{ScrapeRun, SeasonEntry, write_run};
