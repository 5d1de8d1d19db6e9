//! Picking the goalscorer table out of a page's candidate tables.

use bundesliga_core::{AppConfig, Error};

use super::model::Table;

/// Header keywords that identify the goalscorer table.
///
/// A table qualifies when some header contains a `player` keyword and some
/// header contains a `goals` keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderMatcher {
    pub player: Vec<String>,
    pub goals: Vec<String>,
}

impl Default for HeaderMatcher {
    fn default() -> Self {
        Self::from(&AppConfig::default())
    }
}

impl From<&AppConfig> for HeaderMatcher {
    fn from(config: &AppConfig) -> Self {
        Self { player: config.player_keywords.clone(), goals: config.goals_keywords.clone() }
    }
}

impl HeaderMatcher {
    pub fn matches(&self, table: &Table) -> bool {
        let headers = table.header_texts();
        let any_header_contains =
            |keywords: &[String]| headers.iter().any(|h| keywords.iter().any(|k| h.contains(k.as_str())));
        any_header_contains(self.player.as_slice()) && any_header_contains(self.goals.as_slice())
    }

    /// The first qualifying table in document order.
    pub fn select<'a>(&self, tables: &'a [Table]) -> Result<&'a Table, Error> {
        tables.iter().find(|t| self.matches(t)).ok_or_else(|| {
            Error::NoMatchingTable(format!(
                "none of {} tables has headers matching {:?} and {:?}",
                tables.len(),
                self.player,
                self.goals
            ))
        })
    }
}
