//! Error types for the atlas application.
//!
//! Errors are split by concern using `thiserror` and compose via `?` and
//! `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned from startup and the main loop
//!   - [`FetchError`] - Country data could not be obtained (HTTP, status, decode, file)
//!   - [`ConfigError`](crate::config::ConfigError) - Config file unreadable or invalid
//!   - [`LoggingError`](crate::logging::LoggingError) - Tracing setup failed
//!   - `std::io::Error` / [`TuiError`] - Terminal/TUI failures
//!   - [`InvalidCountryCode`] - Bad `--country` argument
//!
//! # Recovery Strategy
//!
//! Fetch errors are **non-fatal**: screens catch them, log them, clear their
//! loading flag and keep showing whatever they had. Malformed records are
//! excluded at normalization and never become errors here. Configuration,
//! logging and terminal errors are fatal and reach `main`.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use crate::model::InvalidCountryCode;
use crate::view::TuiError;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all fatal failure modes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Country data could not be loaded and the caller chose to propagate.
    #[error("Failed to load countries: {0}")]
    Fetch(#[from] FetchError),

    /// Configuration file exists but is unreadable or invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Log file setup failed.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Terminal or TUI rendering error.
    ///
    /// Without a working terminal the TUI cannot function, so this is fatal.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// The TUI loop failed.
    #[error(transparent)]
    Tui(#[from] TuiError),

    /// A command-line country code is not three letters.
    #[error(transparent)]
    InvalidCountry(#[from] InvalidCountryCode),
}

/// Errors encountered when fetching country data.
///
/// # Recovery Patterns
///
/// All variants are caught by the screen that issued the request: the error
/// is logged, the loading indicator is cleared, and the previous (possibly
/// empty) data stays on screen. There is no retry.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure (DNS, TLS, connection reset, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status.
    #[error("Unexpected status {status} from {url}")]
    Status {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },

    /// Body was not the expected JSON shape.
    #[error("Could not decode response from {source_name}: {message}")]
    Decode {
        /// URL or file path the body came from.
        source_name: String,
        /// Decoder error message.
        message: String,
    },

    /// Lookup by code returned no record.
    #[error("No country with code {code}")]
    NotFound {
        /// The requested code.
        code: String,
    },

    /// Country dump file does not exist.
    #[error("File not found: {path}")]
    FileNotFound {
        /// Path that was attempted.
        path: PathBuf,
    },

    /// Generic I/O error reading a country dump file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn fetch_error_status_display() {
        let err = FetchError::Status {
            url: "https://restcountries.com/v3.1/all".to_string(),
            status: 503,
        };
        let msg = err.to_string();
        assert!(msg.contains("503"));
        assert!(msg.contains("restcountries.com"));
    }

    #[test]
    fn fetch_error_decode_display() {
        let err = FetchError::Decode {
            source_name: "countries.json".to_string(),
            message: "expected value at line 1 column 1".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("countries.json"));
        assert!(msg.contains("expected value"));
    }

    #[test]
    fn fetch_error_not_found_display() {
        let err = FetchError::NotFound {
            code: "XYZ".to_string(),
        };
        assert_eq!(err.to_string(), "No country with code XYZ");
    }

    #[test]
    fn fetch_error_file_not_found_display() {
        let err = FetchError::FileNotFound {
            path: PathBuf::from("/tmp/missing.json"),
        };
        let msg = err.to_string();
        assert!(msg.contains("File not found"));
        assert!(msg.contains("/tmp/missing.json"));
    }

    #[test]
    fn fetch_error_io_conversion() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let err: FetchError = io_err.into();
        let msg = err.to_string();
        assert!(msg.contains("IO error"));
        assert!(msg.contains("access denied"));
    }

    #[test]
    fn app_error_from_fetch_error() {
        let app_err: AppError = FetchError::NotFound {
            code: "ABC".to_string(),
        }
        .into();
        let msg = app_err.to_string();
        assert!(msg.contains("Failed to load countries"));
        assert!(msg.contains("ABC"));
    }

    #[test]
    fn app_error_from_config_error() {
        let app_err: AppError = ConfigError::InvalidValue {
            key: "theme",
            value: "sepia".to_string(),
        }
        .into();
        let msg = app_err.to_string();
        assert!(msg.contains("Configuration error"));
        assert!(msg.contains("sepia"));
    }

    #[test]
    fn app_error_from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "pipe broken");
        let app_err: AppError = io_err.into();
        let msg = app_err.to_string();
        assert!(msg.contains("Terminal error"));
        assert!(msg.contains("pipe broken"));
    }

    #[test]
    fn app_error_from_invalid_country_code() {
        let app_err: AppError = crate::model::CountryCode::new("FRANCE").unwrap_err().into();
        assert!(app_err.to_string().contains("FRANCE"));
    }
}
