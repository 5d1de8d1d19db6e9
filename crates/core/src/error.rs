//! Unified error types for the Bundesliga scraper.
//!
//! Only configuration and output failures end a run. Every other variant is
//! recovered per season and turned into an absent value in the output.

/// Unified error types for the scraper.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid input (e.g., a table class that is not a valid CSS selector).
    #[error("INVALID_INPUT: {0}")]
    InvalidInput(String),

    /// No candidate table on the page matched the header keywords.
    #[error("NO_MATCHING_TABLE: {0}")]
    NoMatchingTable(String),

    /// Invalid URL.
    #[error("INVALID_URL: {0}")]
    InvalidUrl(String),

    /// Fetch timeout.
    #[error("FETCH_TIMEOUT: {0}")]
    FetchTimeout(String),

    /// HTTP error response or transport failure.
    #[error("HTTP_ERROR: {0}")]
    HttpError(String),

    /// Server answered with 429.
    #[error("RATE_LIMITED: {0}")]
    RateLimited(String),

    /// Every fetch attempt failed.
    #[error("FETCH_FAILED: {url} after {attempts} attempts")]
    FetchFailed { url: String, attempts: u32 },

    /// Writing the output file failed.
    #[error("OUTPUT_ERROR: {0}")]
    Output(#[from] std::io::Error),

    /// Serializing the output document failed.
    #[error("SERIALIZE_ERROR: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    /// Whether another fetch attempt may succeed after this error.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::FetchTimeout(_) | Error::HttpError(_) | Error::RateLimited(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::NoMatchingTable("2005/06".to_string());
        assert!(err.to_string().contains("NO_MATCHING_TABLE"));
        assert!(err.to_string().contains("2005/06"));
    }

    #[test]
    fn test_fetch_failed_display() {
        let err = Error::FetchFailed { url: "https://example.com".to_string(), attempts: 3 };
        assert_eq!(err.to_string(), "FETCH_FAILED: https://example.com after 3 attempts");
    }

    #[test]
    fn test_is_retryable() {
        assert!(Error::RateLimited("429".to_string()).is_retryable());
        assert!(Error::HttpError("status 500".to_string()).is_retryable());
        assert!(Error::FetchTimeout("10s".to_string()).is_retryable());
        assert!(!Error::InvalidUrl("nope".to_string()).is_retryable());
        assert!(!Error::NoMatchingTable("2005/06".to_string()).is_retryable());
    }
}
