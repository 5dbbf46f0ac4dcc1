//! Locale-aware name ordering.
//!
//! Names compare first on a base form (NFD with combining marks removed,
//! then lowercased), so accented letters sort next to their unaccented
//! counterparts. Ties fall back to the lowercased name and then the raw name,
//! which keeps the order total and deterministic.

use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Accent-stripped, lowercased form of `s`.
pub fn base_form(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Total order used for country names and section titles.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    base_form(a)
        .cmp(&base_form(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}
