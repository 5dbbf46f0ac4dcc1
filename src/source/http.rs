//! REST Countries HTTP client.

use crate::model::{CountryCode, FetchError, RawCountry};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::debug;

/// Field list for `/all`. The public API refuses `/all` without one.
pub const ALL_FIELDS: &str =
    "name,cca3,continents,timezones,flags,capital,population,region,languages";

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Blocking client for the REST Countries v3.1 endpoints.
#[derive(Debug, Clone)]
pub struct RestCountriesClient {
    client: Client,
    base_url: String,
}

impl RestCountriesClient {
    /// Build a client for `base_url` with a whole-request `timeout`.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Http` if the TLS backend cannot be initialized.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT.min(timeout))
            .timeout(timeout)
            .user_agent(concat!("atlas/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn all_url(&self) -> String {
        format!("{}/all?fields={}", self.base_url, ALL_FIELDS)
    }

    pub fn alpha_url(&self, code: &CountryCode) -> String {
        format!("{}/alpha/{}", self.base_url, code)
    }

    /// `GET /all` with the list field set.
    ///
    /// # Errors
    ///
    /// Transport, non-success status and JSON shape failures.
    pub fn fetch_all(&self) -> Result<Vec<RawCountry>, FetchError> {
        self.get_records(&self.all_url())
    }

    /// `GET /alpha/{code}`. The API answers with a one-element list, or 404.
    ///
    /// # Errors
    ///
    /// `FetchError::NotFound` on 404, otherwise as [`Self::fetch_all`].
    pub fn fetch_by_code(&self, code: &CountryCode) -> Result<Vec<RawCountry>, FetchError> {
        match self.get_records(&self.alpha_url(code)) {
            Err(FetchError::Status { status, .. }) if status == StatusCode::NOT_FOUND.as_u16() => {
                Err(FetchError::NotFound {
                    code: code.to_string(),
                })
            }
            other => other,
        }
    }

    fn get_records(&self, url: &str) -> Result<Vec<RawCountry>, FetchError> {
        debug!(url, "GET");
        let response = self.client.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text()?;
        serde_json::from_str(&body).map_err(|e| FetchError::Decode {
            source_name: url.to_string(),
            message: e.to_string(),
        })
    }
}
