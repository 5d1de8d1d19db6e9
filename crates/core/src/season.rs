//! Output document for a full scraping run.

use std::path::Path;

use serde::Serialize;

use crate::{Error, Record};

/// Data scraped for one season.
///
/// `None` means the data could not be obtained (fetch failure or no
/// matching table); it serializes as `null`.
#[derive(Debug, Clone, Serialize)]
pub struct SeasonEntry {
    /// Starting year of the season (2005 for 2005/06).
    pub season: u16,
    pub standings: Option<Vec<Record>>,
    pub topscorers: Option<Vec<Record>>,
}

impl SeasonEntry {
    /// Entry for a season whose page could not be fetched.
    pub fn empty(season: u16) -> Self {
        Self { season, standings: None, topscorers: None }
    }
}

/// Top-level output document.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScrapeRun {
    pub seasons: Vec<SeasonEntry>,
}

/// Serialize a run as indented UTF-8 JSON and write it to `path`.
pub fn write_run(path: &Path, run: &ScrapeRun) -> Result<(), Error> {
    let json = serde_json::to_string_pretty(run)?;
    std::fs::write(path, json)?;
    tracing::debug!("wrote {} seasons to {}", run.seasons.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_run() -> ScrapeRun {
        let mut record = Record::new();
        record.insert("Spieler", "Müller");
        record.insert("Tore", "30");
        ScrapeRun {
            seasons: vec![
                SeasonEntry { season: 2005, standings: Some(vec![]), topscorers: Some(vec![record]) },
                SeasonEntry::empty(2006),
            ],
        }
    }

    #[test]
    fn test_season_entry_empty_serializes_nulls() {
        let json = serde_json::to_value(SeasonEntry::empty(2010)).unwrap();
        assert_eq!(json["season"], 2010);
        assert!(json["standings"].is_null());
        assert!(json["topscorers"].is_null());
    }

    #[test]
    fn test_write_run_pretty_utf8() {
        let path = std::env::temp_dir().join(format!("bundesliga-write-run-{}.json", std::process::id()));
        write_run(&path, &sample_run()).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(written.starts_with("{\n  \"seasons\": ["));
        assert!(written.contains("\"Spieler\": \"Müller\""));
        assert!(written.contains("\"topscorers\": null"));
    }

    #[test]
    fn test_write_run_missing_directory() {
        let path = std::env::temp_dir().join("bundesliga-missing-dir").join("nested").join("out.json");
        let result = write_run(&path, &ScrapeRun::default());
        assert!(matches!(result, Err(Error::Output(_))));
    }
}
