//! Atlas
//!
//! Terminal browser for the REST Countries API: an alphabetical, searchable
//! and filterable country list with a detail screen per country.
//!
//! Follows a Pure Core / Impure Shell split: `model`, `state`, `view_state`
//! and `settings` hold pure data and transitions; `source` and `view` do the
//! I/O.

pub mod config;
pub mod logging;
pub mod model;
pub mod settings;
pub mod source;
pub mod state;
pub mod view;
pub mod view_state;
