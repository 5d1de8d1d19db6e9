//! Season page URL construction.

/// Error type for season URL construction failures.
#[derive(Debug, Clone, thiserror::Error)]
pub enum UrlError {
    #[error("empty base URL")]
    Empty,

    #[error("unsupported scheme: {0}")]
    UnsupportedScheme(String),

    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

/// Label a season by its starting year: 2005 -> "2005/06".
pub fn season_label(season: u16) -> String {
    format!("{season}/{:02}", (season % 100 + 1) % 100)
}

/// Build the page URL for a season by appending its label to `base`.
///
/// The base is trimmed and must use http or https. Percent-encoded segments
/// in the base are kept as they are.
pub fn season_url(base: &str, season: u16) -> Result<url::Url, UrlError> {
    let trimmed = base.trim();

    if trimmed.is_empty() {
        return Err(UrlError::Empty);
    }

    let parsed = url::Url::parse(&format!("{trimmed}{}", season_label(season)))
        .map_err(|e| UrlError::InvalidUrl(e.to_string()))?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(UrlError::UnsupportedScheme(scheme.to_string())),
    }
}
