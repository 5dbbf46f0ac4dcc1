//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod country;
pub mod error;
pub mod filters;
pub mod identifiers;
pub mod key_action;

// Re-export for convenience
pub use country::{
    normalize_all, CallingCode, Country, Currency, DriveSide, LatLng, MalformedCountry,
    MalformedReason, RawCountry,
};
pub use error::{AppError, FetchError};
pub use filters::{gmt_label, offset_prefix_match, Filters, CONTINENT_OPTIONS, TIMEZONE_OPTIONS};
pub use identifiers::{CountryCode, CountryName, EmptyCountryName, InvalidCountryCode};
pub use key_action::KeyAction;
