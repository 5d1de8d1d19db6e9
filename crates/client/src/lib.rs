//! Client code for the Bundesliga scraper.
//!
//! This crate provides the HTTP fetch pipeline, the interpretation of
//! season-page tables, and the season loop that ties them together.

pub mod fetch;
pub mod season;
pub mod table;

pub use fetch::{FetchClient, FetchConfig, RetryPolicy};
pub use season::SeasonScraper;
pub use table::{HeaderMatcher, Table, TopscorerParser, parse_standings, parse_tables};
