//! Sectioned country list.
//!
//! [`build_sections`] turns the full country collection, the search text and
//! the filter selection into the ordered, letter-grouped model the list
//! screen renders. It is a pure function: same inputs, same output.

use crate::model::{Country, Filters};
use crate::view_state::collation::compare_names;

/// One letter group of the list.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    /// Uppercased first character shared by every country in `data`.
    pub title: String,
    pub data: Vec<Country>,
}

/// Case-insensitive substring match on the common name. Empty query matches.
pub fn matches_query(country: &Country, query: &str) -> bool {
    query.is_empty()
        || country
            .name
            .as_str()
            .to_lowercase()
            .contains(&query.to_lowercase())
}

/// All three list predicates: search text, continents and timezones.
pub fn is_included(country: &Country, query: &str, filters: &Filters) -> bool {
    matches_query(country, query)
        && filters.matches_continents(&country.continents)
        && filters.matches_timezones(&country.timezones)
}

/// Filter, sort and group `countries` into letter sections.
///
/// Survivors are sorted by name with [`compare_names`] and grouped by the
/// uppercased first letter of the name. Sections are ordered by the same
/// collation, and each keeps the sorted order of its countries.
pub fn build_sections(countries: &[Country], query: &str, filters: &Filters) -> Vec<Section> {
    let mut survivors: Vec<&Country> = countries
        .iter()
        .filter(|c| is_included(c, query, filters))
        .collect();
    survivors.sort_by(|a, b| compare_names(a.name.as_str(), b.name.as_str()));

    // Accented initials interleave with plain ones in collation order
    // ("Afghanistan", "Åland Islands", "Albania"), so group by lookup rather
    // than by adjacency.
    let mut sections: Vec<Section> = Vec::new();
    for country in survivors {
        let title = country.name.initial();
        match sections.iter_mut().find(|s| s.title == title) {
            Some(section) => section.data.push(country.clone()),
            None => sections.push(Section {
                title,
                data: vec![country.clone()],
            }),
        }
    }

    sections.sort_by(|a, b| compare_names(&a.title, &b.title));
    sections
}

/// Number of countries across all sections.
pub fn country_count(sections: &[Section]) -> usize {
    sections.iter().map(|s| s.data.len()).sum()
}

/// Country at flat position `ordinal`, counting across sections.
pub fn country_at(sections: &[Section], ordinal: usize) -> Option<&Country> {
    let mut remaining = ordinal;
    for section in sections {
        if remaining < section.data.len() {
            return section.data.get(remaining);
        }
        remaining -= section.data.len();
    }
    None
}

/// Flat position of the first country of each section.
pub fn section_starts(sections: &[Section]) -> Vec<usize> {
    let mut starts = Vec::with_capacity(sections.len());
    let mut offset = 0;
    for section in sections {
        starts.push(offset);
        offset += section.data.len();
    }
    starts
}

/// Display row (headers included) of the country at flat position `ordinal`.
pub fn display_row(sections: &[Section], ordinal: usize) -> usize {
    let mut remaining = ordinal;
    let mut row = 0;
    for section in sections {
        row += 1;
        if remaining < section.data.len() {
            return row + remaining;
        }
        remaining -= section.data.len();
        row += section.data.len();
    }
    row
}

/// Flat position of the country on display row `row`, or `None` for a
/// header row or a row past the end.
pub fn ordinal_at_row(sections: &[Section], row: usize) -> Option<usize> {
    let mut remaining = row;
    let mut ordinal = 0;
    for section in sections {
        if remaining == 0 {
            return None;
        }
        remaining -= 1;
        if remaining < section.data.len() {
            return Some(ordinal + remaining);
        }
        remaining -= section.data.len();
        ordinal += section.data.len();
    }
    None
}

#[cfg(test)]
#[path = "sections_tests.rs"]
mod tests;
