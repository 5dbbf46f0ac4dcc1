//! Property-based tests for list building, carousel paging and search editing.
//!
//! Tests validate:
//! 1. Sections keep exactly the countries passing search and filters, grouped and sorted
//! 2. Display rows and ordinals map back onto each other
//! 3. The carousel page stays in range for any settle offset
//! 4. Search editing keeps the cursor inside the query

use atlas::model::country::RawName;
use atlas::model::{Country, Filters, RawCountry, CONTINENT_OPTIONS, TIMEZONE_OPTIONS};
use atlas::state::search_input_handler::{
    activate_search_input, handle_backspace, handle_char_input, handle_cursor_left,
    handle_cursor_right,
};
use atlas::state::{CarouselController, CarouselImage, ImageRole, SearchState};
use atlas::view_state::collation::compare_names;
use atlas::view_state::detail::format_thousands;
use atlas::view_state::sections::{
    country_at, country_count, display_row, is_included, matches_query, ordinal_at_row,
};
use atlas::view_state::build_sections;
use proptest::prelude::*;
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Three-letter code unique per index below 676.
fn code_for(index: usize) -> String {
    let letter = |n: usize| char::from(b'A' + (n % 26) as u8);
    [letter(index / 26), letter(index), 'X'].iter().collect()
}

fn country(index: usize, name: &str) -> Option<Country> {
    Country::from_raw(RawCountry {
        cca3: Some(code_for(index)),
        name: Some(RawName {
            common: Some(name.to_string()),
            official: None,
        }),
        ..RawCountry::default()
    })
    .ok()
}

fn name_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "Åland Islands",
        "Albania",
        "Algeria",
        "Belgium",
        "Bénin",
        "Côte d'Ivoire",
        "Cuba",
        "Égypte",
        "Estonia",
        "France",
        "Zambia",
        "zanzibar",
        "Österreich",
        "Oman",
    ])
    .prop_map(str::to_string)
}

fn countries_strategy() -> impl Strategy<Value = Vec<Country>> {
    prop::collection::vec(name_strategy(), 0..30).prop_map(|names| {
        names
            .iter()
            .enumerate()
            .filter_map(|(i, name)| country(i, name))
            .collect()
    })
}

/// Offsets as the API writes them, including bare "UTC" and non-hour offsets.
const TIMEZONE_SAMPLES: [&str; 10] = [
    "UTC", "UTC-12:00", "UTC-08:00", "UTC-04:00", "UTC+00:00", "UTC+01:00",
    "UTC+04:00", "UTC+04:30", "UTC+08:00", "UTC+12:45",
];

fn filtered_country_strategy() -> impl Strategy<Value = (String, Vec<String>, Vec<String>)> {
    (
        name_strategy(),
        prop::sample::subsequence(CONTINENT_OPTIONS.to_vec(), 0..=2),
        prop::sample::subsequence(TIMEZONE_SAMPLES.to_vec(), 0..=3),
    )
        .prop_map(|(name, continents, timezones)| {
            let owned = |v: Vec<&str>| -> Vec<String> { v.into_iter().map(str::to_string).collect() };
            (name, owned(continents), owned(timezones))
        })
}

fn filtered_countries_strategy() -> impl Strategy<Value = Vec<Country>> {
    prop::collection::vec(filtered_country_strategy(), 0..30).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .filter_map(|(i, (name, continents, timezones))| {
                Country::from_raw(RawCountry {
                    cca3: Some(code_for(i)),
                    name: Some(RawName {
                        common: Some(name),
                        official: None,
                    }),
                    continents: Some(continents),
                    timezones: Some(timezones),
                    ..RawCountry::default()
                })
                .ok()
            })
            .collect()
    })
}

fn filters_strategy() -> impl Strategy<Value = Filters> {
    (
        prop::sample::subsequence(CONTINENT_OPTIONS.to_vec(), 0..=3),
        prop::sample::subsequence(TIMEZONE_OPTIONS.to_vec(), 0..=3),
    )
        .prop_map(|(continents, timezones)| {
            let mut filters = Filters::new();
            for continent in continents {
                filters.toggle_continent(continent);
            }
            for timezone in timezones {
                filters.toggle_timezone(timezone);
            }
            filters
        })
}

// ===== Property 1: Sections =====

proptest! {
    #[test]
    fn sections_keep_exactly_the_matching_countries(
        countries in countries_strategy(),
        query in prop::sample::select(vec!["", "a", "AL", "ia", "é", "zz"]),
    ) {
        let sections = build_sections(&countries, query, &Filters::new());
        let expected = countries.iter().filter(|c| matches_query(c, query)).count();
        prop_assert_eq!(country_count(&sections), expected);
    }

    #[test]
    fn sections_respect_search_and_filters(
        countries in filtered_countries_strategy(),
        query in prop::sample::select(vec!["", "a", "AL", "ia", "é"]),
        filters in filters_strategy(),
    ) {
        let sections = build_sections(&countries, query, &filters);
        let kept: BTreeSet<&str> = sections
            .iter()
            .flat_map(|s| s.data.iter())
            .map(|c| c.code.as_str())
            .collect();
        prop_assert_eq!(kept.len(), country_count(&sections), "no country listed twice");

        for country in &countries {
            let included = is_included(country, query, &filters);
            prop_assert_eq!(
                kept.contains(country.code.as_str()),
                included,
                "{} with {:?} / {:?}",
                country.name.as_str(),
                country.continents,
                country.timezones
            );
            if included && !filters.continents.is_empty() {
                prop_assert!(country.continents.iter().any(|c| filters.continents.contains(c)));
            }
            if included && !filters.timezones.is_empty() {
                prop_assert!(!country.timezones.is_empty());
            }
        }
    }

    #[test]
    fn sections_are_grouped_and_sorted(countries in countries_strategy()) {
        let sections = build_sections(&countries, "", &Filters::new());

        for pair in sections.windows(2) {
            prop_assert_eq!(compare_names(&pair[0].title, &pair[1].title), Ordering::Less);
        }
        for section in &sections {
            prop_assert!(!section.data.is_empty());
            for country in &section.data {
                prop_assert_eq!(&country.name.initial(), &section.title);
            }
            for pair in section.data.windows(2) {
                prop_assert_ne!(
                    compare_names(pair[0].name.as_str(), pair[1].name.as_str()),
                    Ordering::Greater
                );
            }
        }
    }
}

// ===== Property 2: Rows and ordinals =====

proptest! {
    #[test]
    fn display_rows_invert_to_ordinals(countries in countries_strategy()) {
        let sections = build_sections(&countries, "", &Filters::new());

        for ordinal in 0..country_count(&sections) {
            let row = display_row(&sections, ordinal);
            prop_assert_eq!(ordinal_at_row(&sections, row), Some(ordinal));
            prop_assert!(country_at(&sections, ordinal).is_some());
        }
        prop_assert!(country_at(&sections, country_count(&sections)).is_none());
    }
}

// ===== Property 3: Carousel paging =====

fn images(n: usize) -> Vec<CarouselImage> {
    (0..n)
        .map(|i| CarouselImage {
            uri: format!("https://img.example/{i}.png"),
            role: ImageRole::Flag,
        })
        .collect()
}

proptest! {
    #[test]
    fn settle_offset_always_lands_on_a_page(
        count in 1usize..6,
        width in 1.0f64..400.0,
        offset in prop::num::f64::ANY,
    ) {
        let mut carousel = CarouselController::new(images(count));
        carousel.on_layout(width);
        carousel.on_scroll_settle(offset);

        prop_assert!(carousel.current_index() < count);
        prop_assert!(carousel.current_offset() <= carousel.max_offset());
    }

    #[test]
    fn next_then_prev_returns_to_start(count in 1usize..6, width in 1.0f64..400.0) {
        let mut carousel = CarouselController::new(images(count));
        carousel.on_layout(width);

        let moved = carousel.next().is_some();
        prop_assert_eq!(moved, count > 1);
        if moved {
            prop_assert!(carousel.prev().is_some());
        }
        prop_assert_eq!(carousel.current_index(), 0);
    }
}

// ===== Property 4: Search editing =====

#[derive(Debug, Clone)]
enum Edit {
    Char(char),
    Backspace,
    Left,
    Right,
}

fn edit_strategy() -> impl Strategy<Value = Edit> {
    prop_oneof![
        prop::char::any().prop_map(Edit::Char),
        Just(Edit::Backspace),
        Just(Edit::Left),
        Just(Edit::Right),
    ]
}

proptest! {
    #[test]
    fn cursor_stays_within_query(edits in prop::collection::vec(edit_strategy(), 0..40)) {
        let mut state = activate_search_input(SearchState::default());
        for edit in edits {
            state = match edit {
                Edit::Char(ch) => handle_char_input(state, ch),
                Edit::Backspace => handle_backspace(state),
                Edit::Left => handle_cursor_left(state),
                Edit::Right => handle_cursor_right(state),
            };
            let cursor = state.cursor().unwrap();
            prop_assert!(cursor <= state.query().chars().count());
        }
    }

    #[test]
    fn thousands_separators_preserve_digits(value in any::<u64>()) {
        prop_assert_eq!(format_thousands(value).replace(',', ""), value.to_string());
    }
}
