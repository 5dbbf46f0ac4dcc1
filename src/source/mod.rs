//! Country data sources.
//!
//! - HTTP client for the REST Countries API
//! - JSON dump on disk for offline use and tests
//! - [`CountrySource`] unifying both behind one interface
//!
//! Both backends return wire records; normalization into [`Country`] and the
//! logging of excluded records happens here, once.

use crate::config::ResolvedConfig;
use crate::model::{normalize_all, Country, CountryCode, FetchError, RawCountry};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

pub mod file;
pub mod http;
pub mod static_map;

pub use file::FileSource;
pub use http::RestCountriesClient;
pub use static_map::{calculate_zoom, static_map_url};

/// Where country records come from.
#[derive(Debug, Clone)]
pub enum CountrySource {
    /// Live REST Countries API.
    Http(RestCountriesClient),
    /// JSON dump read from disk.
    File(FileSource),
}

impl CountrySource {
    /// All countries, normalized. Malformed records are logged and dropped.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` when the backend fails; the caller keeps its
    /// previous data.
    pub fn fetch_all(&self) -> Result<Vec<Country>, FetchError> {
        let raw = match self {
            CountrySource::Http(client) => client.fetch_all()?,
            CountrySource::File(file) => file.load()?,
        };
        let countries = normalize_logged(raw);
        info!(count = countries.len(), source = %self.describe(), "Loaded countries");
        Ok(countries)
    }

    /// The country with `code`.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::NotFound` if no usable record carries the code,
    /// or any backend failure.
    pub fn fetch_by_code(&self, code: &CountryCode) -> Result<Country, FetchError> {
        let raw = match self {
            CountrySource::Http(client) => client.fetch_by_code(code)?,
            CountrySource::File(file) => file.find(code)?,
        };
        normalize_logged(raw)
            .into_iter()
            .next()
            .ok_or_else(|| FetchError::NotFound {
                code: code.to_string(),
            })
    }

    /// Human-readable origin for logs and the status line.
    pub fn describe(&self) -> String {
        match self {
            CountrySource::Http(client) => client.base_url().to_string(),
            CountrySource::File(file) => file.path().display().to_string(),
        }
    }
}

/// Choose a source: the dump file if given, otherwise the configured API.
///
/// # Errors
///
/// Returns `FetchError::FileNotFound` for a missing dump, or
/// `FetchError::Http` if the HTTP client cannot be built.
pub fn detect_country_source(
    file: Option<PathBuf>,
    config: &ResolvedConfig,
) -> Result<CountrySource, FetchError> {
    match file {
        Some(path) => Ok(CountrySource::File(FileSource::new(path)?)),
        None => Ok(CountrySource::Http(RestCountriesClient::new(
            &config.api_base_url,
            Duration::from_secs(config.request_timeout_secs),
        )?)),
    }
}

fn normalize_logged(raw: Vec<RawCountry>) -> Vec<Country> {
    let (countries, malformed) = normalize_all(raw);
    for record in &malformed {
        warn!(code = ?record.code, reason = ?record.reason, "Excluding malformed country record");
    }
    if !malformed.is_empty() {
        warn!(excluded = malformed.len(), kept = countries.len(), "Some records were excluded");
    }
    countries
}
