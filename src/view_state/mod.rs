//! View-state layer: pure derivations from model data to what screens show.
//!
//! - `collation`: accent-insensitive name ordering
//! - `sections`: filtering, grouping and sorting of the country list
//! - `detail`: labelled fields and number formatting for the detail screen

pub mod collation;
pub mod detail;
pub mod sections;

pub use detail::{detail_columns, detail_items, DetailItem};
pub use sections::{build_sections, Section};
