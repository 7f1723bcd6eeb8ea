//! Error types for launchdeck.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - top-level error returned from `main`
//!   - [`ConfigError`](crate::config::ConfigError) - unreadable or invalid config file
//!   - [`LoggingError`](crate::logging::LoggingError) - log file setup
//!   - [`TuiError`](crate::view::TuiError) - terminal and runtime setup
//! - [`FetchError`] - a single page fetch failed
//!
//! # Recovery Strategy
//!
//! Fetch errors are **non-fatal**: they are logged and the pagination state
//! is left untouched so the next load-more signal retries the same page.
//! Everything else happens at startup and ends the process.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Tracing could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// The launch source could not be constructed.
    #[error("Launch source error: {0}")]
    Source(#[from] FetchError),

    /// Terminal or event loop failure.
    #[error("Terminal error: {0}")]
    Tui(#[from] crate::view::TuiError),
}

/// Failure of one page fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure (connect, TLS, timeout, body read).
    #[error("Request to {url} failed: {source}")]
    Transport {
        /// Requested URL.
        url: String,
        /// Underlying client error.
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("Request to {url} returned HTTP {status}")]
    Status {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },

    /// The body was not a JSON array.
    #[error("Malformed launch page from {origin}: {source}")]
    Decode {
        /// URL or fixture path the body came from.
        origin: String,
        /// JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The fixture file could not be read.
    #[error("Failed to read fixture {path}: {source}")]
    FixtureRead {
        /// Fixture path.
        path: PathBuf,
        /// I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The HTTP client could not be built.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_mentions_url_and_code() {
        let err = FetchError::Status {
            url: "http://localhost/launches".to_string(),
            status: 503,
        };
        let message = err.to_string();
        assert!(message.contains("http://localhost/launches"));
        assert!(message.contains("503"));
    }

    #[test]
    fn fixture_error_mentions_path() {
        let err = FetchError::FixtureRead {
            path: PathBuf::from("/tmp/missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().contains("/tmp/missing.json"));
    }

    #[test]
    fn fetch_error_converts_into_app_error() {
        let err: AppError = FetchError::Status {
            url: "u".to_string(),
            status: 500,
        }
        .into();
        assert!(matches!(err, AppError::Source(_)));
    }
}
