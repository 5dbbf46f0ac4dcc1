//! Country records: wire format and normalized domain type.
//!
//! The REST Countries API returns deeply optional JSON. [`RawCountry`] mirrors
//! that shape with every field optional; [`Country::from_raw`] is the single
//! normalization step that fills defaults once. Code past the data source
//! boundary only ever sees [`Country`].

use crate::model::identifiers::{CountryCode, CountryName};
use serde::Deserialize;
use std::collections::BTreeMap;
use thiserror::Error;

// ===== Wire format =====

/// Country record exactly as received from the data source.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct RawCountry {
    pub name: Option<RawName>,
    pub cca2: Option<String>,
    pub cca3: Option<String>,
    pub population: Option<u64>,
    pub continents: Option<Vec<String>>,
    pub area: Option<f64>,
    pub latlng: Option<Vec<f64>>,
    pub capital: Option<Vec<String>>,
    pub region: Option<String>,
    pub flags: Option<RawImage>,
    pub coat_of_arms: Option<RawImage>,
    pub languages: Option<BTreeMap<String, String>>,
    pub currencies: Option<BTreeMap<String, RawCurrency>>,
    pub timezones: Option<Vec<String>>,
    pub idd: Option<RawCallingCode>,
    pub car: Option<RawCar>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct RawName {
    pub common: Option<String>,
    pub official: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct RawImage {
    pub png: Option<String>,
    pub svg: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct RawCurrency {
    pub name: Option<String>,
    pub symbol: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct RawCallingCode {
    pub root: Option<String>,
    pub suffixes: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct RawCar {
    pub side: Option<String>,
}

// ===== Domain type =====

/// Which side of the road traffic drives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DriveSide {
    Left,
    Right,
}

impl DriveSide {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Currency {
    pub name: String,
    pub symbol: String,
}

/// International dialling prefix: `root` plus ordered `suffixes`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallingCode {
    pub root: String,
    pub suffixes: Vec<String>,
}

impl CallingCode {
    /// Root joined with the first suffix (e.g., "+3" + "3" = "+33").
    pub fn primary(&self) -> String {
        match self.suffixes.first() {
            Some(suffix) => format!("{}{}", self.root, suffix),
            None => self.root.clone(),
        }
    }
}

/// Geographic coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

/// Normalized, read-only country record.
#[derive(Debug, Clone, PartialEq)]
pub struct Country {
    pub code: CountryCode,
    pub cca2: Option<String>,
    pub name: CountryName,
    pub official_name: Option<String>,
    pub population: u64,
    pub continents: Vec<String>,
    /// Area in km². Always non-negative when present.
    pub area: Option<f64>,
    pub latlng: Option<LatLng>,
    pub capital: Vec<String>,
    pub region: String,
    /// Preferred flag URI (raster before vector).
    pub flag: Option<String>,
    /// Preferred coat of arms URI (raster before vector).
    pub coat_of_arms: Option<String>,
    /// Language display names keyed by language code.
    pub languages: BTreeMap<String, String>,
    pub currencies: Vec<Currency>,
    pub timezones: Vec<String>,
    pub calling_code: Option<CallingCode>,
    pub drive_side: Option<DriveSide>,
}

/// Why a raw record could not become a [`Country`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    MissingName,
    MissingCode,
    InvalidCode,
}

/// A record excluded at the normalization boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Malformed country record {}: {}", display_code(.code), reason_text(.reason))]
pub struct MalformedCountry {
    /// Raw `cca3` value, if the record carried one.
    pub code: Option<String>,
    pub reason: MalformedReason,
}

fn display_code(code: &Option<String>) -> String {
    code.as_deref().unwrap_or("<no code>").to_string()
}

fn reason_text(reason: &MalformedReason) -> &'static str {
    match reason {
        MalformedReason::MissingName => "missing common name",
        MalformedReason::MissingCode => "missing cca3 code",
        MalformedReason::InvalidCode => "invalid cca3 code",
    }
}

impl Country {
    /// Normalize a wire record.
    ///
    /// Records without a usable common name or `cca3` code are rejected;
    /// every other missing field gets its default here.
    pub fn from_raw(raw: RawCountry) -> Result<Self, MalformedCountry> {
        let raw_code = raw.cca3.clone();
        let malformed = |reason| MalformedCountry {
            code: raw_code.clone(),
            reason,
        };

        let name = raw.name.unwrap_or_default();
        let common = CountryName::new(name.common.unwrap_or_default())
            .map_err(|_| malformed(MalformedReason::MissingName))?;

        let code = match raw.cca3.as_deref() {
            None => return Err(malformed(MalformedReason::MissingCode)),
            Some(c) if c.trim().is_empty() => return Err(malformed(MalformedReason::MissingCode)),
            Some(c) => CountryCode::new(c).map_err(|_| malformed(MalformedReason::InvalidCode))?,
        };

        let latlng = match raw.latlng.as_deref() {
            Some([latitude, longitude]) => Some(LatLng {
                latitude: *latitude,
                longitude: *longitude,
            }),
            _ => None,
        };

        let currencies = raw
            .currencies
            .unwrap_or_default()
            .into_values()
            .map(|c| Currency {
                name: c.name.unwrap_or_default(),
                symbol: c.symbol.unwrap_or_default(),
            })
            .collect();

        let calling_code = raw.idd.and_then(|idd| {
            let root = non_empty(idd.root)?;
            Some(CallingCode {
                root,
                suffixes: idd.suffixes.unwrap_or_default(),
            })
        });

        Ok(Self {
            code,
            cca2: non_empty(raw.cca2),
            name: common,
            official_name: non_empty(name.official),
            population: raw.population.unwrap_or(0),
            continents: raw.continents.unwrap_or_default(),
            area: raw.area.filter(|a| a.is_finite() && *a >= 0.0),
            latlng,
            capital: raw.capital.unwrap_or_default(),
            region: raw.region.unwrap_or_default(),
            flag: raw.flags.and_then(preferred_uri),
            coat_of_arms: raw.coat_of_arms.and_then(preferred_uri),
            languages: raw.languages.unwrap_or_default(),
            currencies,
            timezones: raw.timezones.unwrap_or_default(),
            calling_code,
            drive_side: raw.car.and_then(|c| c.side).and_then(|s| DriveSide::parse(&s)),
        })
    }
}

/// Raster variant first, then vector. Empty strings count as absent.
fn preferred_uri(image: RawImage) -> Option<String> {
    non_empty(image.png).or_else(|| non_empty(image.svg))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Normalize a batch of raw records, splitting out the malformed ones.
pub fn normalize_all(raw: Vec<RawCountry>) -> (Vec<Country>, Vec<MalformedCountry>) {
    let mut countries = Vec::with_capacity(raw.len());
    let mut malformed = Vec::new();
    for record in raw {
        match Country::from_raw(record) {
            Ok(country) => countries.push(country),
            Err(err) => malformed.push(err),
        }
    }
    (countries, malformed)
}
