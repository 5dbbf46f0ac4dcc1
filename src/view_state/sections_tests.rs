//! Tests for the sectioned country list.

use super::*;
use crate::model::country::RawName;
use crate::model::RawCountry;

fn country(code: &str, name: &str, continents: &[&str], timezones: &[&str]) -> Country {
    Country::from_raw(RawCountry {
        name: Some(RawName {
            common: Some(name.to_string()),
            official: None,
        }),
        cca3: Some(code.to_string()),
        continents: Some(continents.iter().map(|s| s.to_string()).collect()),
        timezones: Some(timezones.iter().map(|s| s.to_string()).collect()),
        ..RawCountry::default()
    })
    .expect("valid test country")
}

fn titles(sections: &[Section]) -> Vec<&str> {
    sections.iter().map(|s| s.title.as_str()).collect()
}

fn names(section: &Section) -> Vec<&str> {
    section.data.iter().map(|c| c.name.as_str()).collect()
}

fn sample() -> Vec<Country> {
    vec![
        country("ZMB", "Zambia", &["Africa"], &["UTC+02:00"]),
        country("ALB", "Albania", &["Europe"], &["UTC+01:00"]),
        country("DZA", "Algeria", &["Africa"], &["UTC+01:00"]),
    ]
}

#[test]
fn empty_input_yields_no_sections() {
    assert!(build_sections(&[], "", &Filters::new()).is_empty());
}

#[test]
fn groups_and_sorts_without_filters() {
    let sections = build_sections(&sample(), "", &Filters::new());

    assert_eq!(titles(&sections), vec!["A", "Z"]);
    assert_eq!(names(&sections[0]), vec!["Albania", "Algeria"]);
    assert_eq!(names(&sections[1]), vec!["Zambia"]);
}

#[test]
fn search_is_case_insensitive_substring() {
    let sections = build_sections(&sample(), "al", &Filters::new());

    assert_eq!(titles(&sections), vec!["A"]);
    assert_eq!(names(&sections[0]), vec!["Albania", "Algeria"]);

    let sections = build_sections(&sample(), "MBI", &Filters::new());
    assert_eq!(names(&sections[0]), vec!["Zambia"]);
}

#[test]
fn continent_filter_keeps_shared_continent() {
    let mut filters = Filters::new();
    filters.toggle_continent("Africa");

    let sections = build_sections(&sample(), "", &filters);

    assert_eq!(titles(&sections), vec!["A", "Z"]);
    assert_eq!(names(&sections[0]), vec!["Algeria"]);
    assert_eq!(names(&sections[1]), vec!["Zambia"]);
}

#[test]
fn all_predicates_must_hold() {
    let mut filters = Filters::new();
    filters.toggle_continent("Africa");

    let sections = build_sections(&sample(), "al", &filters);

    assert_eq!(titles(&sections), vec!["A"]);
    assert_eq!(names(&sections[0]), vec!["Algeria"]);
}

#[test]
fn timezone_filter_uses_offset_hours() {
    let countries = vec![
        country("AAA", "Onehour", &[], &["UTC+1:00"]),
        country("BBB", "Tenhours", &[], &["UTC+10:00"]),
    ];
    let mut filters = Filters::new();
    filters.toggle_timezone("UTC+1");

    let sections = build_sections(&countries, "", &filters);

    assert_eq!(titles(&sections), vec!["O"]);
}

#[test]
fn accented_initial_gets_its_own_section_after_plain_letter() {
    let countries = vec![
        country("ALA", "Åland Islands", &["Europe"], &[]),
        country("AFG", "Afghanistan", &["Asia"], &[]),
        country("BEL", "Belgium", &["Europe"], &[]),
        country("ALB", "Albania", &["Europe"], &[]),
    ];

    let sections = build_sections(&countries, "", &Filters::new());

    assert_eq!(titles(&sections), vec!["A", "Å", "B"]);
    assert_eq!(names(&sections[0]), vec!["Afghanistan", "Albania"]);
}

#[test]
fn lowercase_initial_is_uppercased_in_title() {
    let countries = vec![country("XYZ", "eSwatini", &[], &[])];
    let sections = build_sections(&countries, "", &Filters::new());
    assert_eq!(titles(&sections), vec!["E"]);
}

#[test]
fn flat_navigation_helpers_agree() {
    let countries = vec![
        country("ALB", "Albania", &[], &[]),
        country("DZA", "Algeria", &[], &[]),
        country("BEL", "Belgium", &[], &[]),
    ];
    let sections = build_sections(&countries, "", &Filters::new());

    assert_eq!(country_count(&sections), 3);
    assert_eq!(section_starts(&sections), vec![0, 2]);
    assert_eq!(country_at(&sections, 2).map(|c| c.name.as_str()), Some("Belgium"));
    assert_eq!(country_at(&sections, 3), None);
    // Rows: [A] Albania Algeria [B] Belgium
    assert_eq!(display_row(&sections, 0), 1);
    assert_eq!(display_row(&sections, 1), 2);
    assert_eq!(display_row(&sections, 2), 4);
}

#[test]
fn ordinal_at_row_inverts_display_row() {
    let countries = vec![
        country("ALB", "Albania", &[], &[]),
        country("DZA", "Algeria", &[], &[]),
        country("BEL", "Belgium", &[], &[]),
    ];
    let sections = build_sections(&countries, "", &Filters::new());

    assert_eq!(ordinal_at_row(&sections, 0), None, "header row");
    assert_eq!(ordinal_at_row(&sections, 3), None, "header row");
    assert_eq!(ordinal_at_row(&sections, 5), None, "past the end");
    for ordinal in 0..3 {
        assert_eq!(
            ordinal_at_row(&sections, display_row(&sections, ordinal)),
            Some(ordinal)
        );
    }
}

#[test]
fn repeated_calls_are_identical() {
    let countries = sample();
    let first = build_sections(&countries, "a", &Filters::new());
    let second = build_sections(&countries, "a", &Filters::new());
    assert_eq!(first, second);
}
