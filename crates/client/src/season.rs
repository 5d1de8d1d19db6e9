//! Season-range scraping.
//!
//! Seasons are scraped one after another. Each season's page is fetched
//! once and both tables are read from it. A failure for one season leaves
//! that season's entry empty and the run continues.

use std::ops::RangeInclusive;

use bundesliga_core::{AppConfig, Error, ScrapeRun, SeasonEntry};
use scraper::Selector;

use crate::fetch::{FetchClient, FetchConfig, season_label, season_url};
use crate::table::{HeaderMatcher, TopscorerParser, parse_standings, parse_tables, table_selector};

pub struct SeasonScraper {
    client: FetchClient,
    base_url: String,
    seasons: RangeInclusive<u16>,
    tables: Selector,
    matcher: HeaderMatcher,
    topscorers: TopscorerParser,
}

impl SeasonScraper {
    /// # Errors
    ///
    /// Returns `Error::InvalidUrl` if the first season's page URL cannot be
    /// built from `base_url`, and `Error::InvalidInput` for a bad table class.
    pub fn new(config: &AppConfig) -> Result<Self, Error> {
        page_url(&config.base_url, config.start_year)?;

        Ok(Self {
            client: FetchClient::new(FetchConfig::from(config))?,
            base_url: config.base_url.clone(),
            seasons: config.seasons(),
            tables: table_selector(&config.table_class)?,
            matcher: HeaderMatcher::from(config),
            topscorers: TopscorerParser::from(config),
        })
    }

    /// Scrape every configured season in order.
    pub async fn run(&self) -> ScrapeRun {
        let mut run = ScrapeRun::default();
        for season in self.seasons.clone() {
            run.seasons.push(self.scrape_season(season).await);
        }
        run
    }

    pub async fn scrape_season(&self, season: u16) -> SeasonEntry {
        let url = match page_url(&self.base_url, season) {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!(season, "{}", e);
                return SeasonEntry::empty(season);
            }
        };

        tracing::info!("scraping {} ... {}", season_label(season), url);

        match self.client.fetch_with_retry(url.as_str()).await {
            Ok(html) => self.parse_season_page(season, &html),
            Err(e) => {
                tracing::warn!(season, "no data for {}: {}", season_label(season), e);
                SeasonEntry::empty(season)
            }
        }
    }

    /// Read standings and goalscorers from one season page.
    pub fn parse_season_page(&self, season: u16, html: &str) -> SeasonEntry {
        let tables = parse_tables(html, &self.tables);
        tracing::debug!(season, "found {} candidate tables", tables.len());

        let standings = tables.first().map(parse_standings).unwrap_or_default();

        let topscorers = match self.matcher.select(&tables) {
            Ok(table) => Some(self.topscorers.parse(table)),
            Err(e) => {
                tracing::warn!(season, "{}", e);
                None
            }
        };

        SeasonEntry { season, standings: Some(standings), topscorers }
    }
}

fn page_url(base: &str, season: u16) -> Result<url::Url, Error> {
    season_url(base, season)
        .map_err(|e| Error::InvalidUrl(format!("{} season {}: {}", base, season_label(season), e)))
}
