//! Filter selection for the country list.
//!
//! Two independent sets: chosen continents and chosen timezone prefixes.
//! An empty set means "no restriction", never "match nothing".

use std::collections::BTreeSet;

/// Continent choices offered by the filters modal.
///
/// These are the values the REST Countries API uses in `continents`.
pub const CONTINENT_OPTIONS: [&str; 7] = [
    "Africa",
    "Antarctica",
    "Asia",
    "Europe",
    "North America",
    "Oceania",
    "South America",
];

/// Timezone prefix choices offered by the filters modal.
pub const TIMEZONE_OPTIONS: [&str; 7] = [
    "UTC-12", "UTC-8", "UTC-4", "UTC+0", "UTC+4", "UTC+8", "UTC+12",
];

/// Current filter selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    pub continents: BTreeSet<String>,
    pub timezones: BTreeSet<String>,
}

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when neither set restricts anything.
    pub fn is_empty(&self) -> bool {
        self.continents.is_empty() && self.timezones.is_empty()
    }

    /// Total number of selected options across both sets.
    pub fn active_count(&self) -> usize {
        self.continents.len() + self.timezones.len()
    }

    /// Add the continent if absent, remove it if present.
    pub fn toggle_continent(&mut self, continent: &str) {
        if !self.continents.remove(continent) {
            self.continents.insert(continent.to_string());
        }
    }

    /// Add the timezone prefix if absent, remove it if present.
    pub fn toggle_timezone(&mut self, timezone: &str) {
        if !self.timezones.remove(timezone) {
            self.timezones.insert(timezone.to_string());
        }
    }

    /// Clear both sets.
    pub fn reset(&mut self) {
        self.continents.clear();
        self.timezones.clear();
    }

    /// Continent predicate: empty set, or at least one shared continent.
    pub fn matches_continents(&self, continents: &[String]) -> bool {
        self.continents.is_empty() || continents.iter().any(|c| self.continents.contains(c))
    }

    /// Timezone predicate: empty set, or any country timezone matches any
    /// filter prefix under [`offset_prefix_match`].
    pub fn matches_timezones(&self, timezones: &[String]) -> bool {
        self.timezones.is_empty()
            || self
                .timezones
                .iter()
                .any(|prefix| timezones.iter().any(|tz| offset_prefix_match(prefix, tz)))
    }
}

/// Display form of a UTC option ("UTC+4" -> "GMT+4").
pub fn gmt_label(utc: &str) -> String {
    utc.replacen("UTC", "GMT", 1)
}

// ===== Offset-prefix rule =====

/// A parsed UTC offset: sign, hours, and minutes if written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct UtcOffset {
    negative: bool,
    hours: u32,
    minutes: Option<u32>,
}

impl UtcOffset {
    /// Parse `UTC`, `UTC±H`, `UTC±HH`, `UTC±H:MM`, `UTC±HH:MM`.
    fn parse(raw: &str) -> Option<Self> {
        let rest = raw.trim().strip_prefix("UTC")?;
        if rest.is_empty() {
            return Some(Self {
                negative: false,
                hours: 0,
                minutes: None,
            });
        }

        let (negative, rest) = match rest.as_bytes()[0] {
            b'+' => (false, &rest[1..]),
            b'-' => (true, &rest[1..]),
            _ => return None,
        };

        let (hours_str, minutes_str) = match rest.split_once(':') {
            Some((h, m)) => (h, Some(m)),
            None => (rest, None),
        };

        if hours_str.is_empty() || hours_str.len() > 2 || !all_digits(hours_str) {
            return None;
        }
        let hours = hours_str.parse().ok()?;

        let minutes = match minutes_str {
            Some(m) if m.len() == 2 && all_digits(m) => Some(m.parse().ok()?),
            Some(_) => return None,
            None => None,
        };

        Some(Self {
            negative: negative && (hours != 0 || minutes.unwrap_or(0) != 0),
            hours,
            minutes,
        })
    }
}

fn all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

/// Decide whether timezone `target` falls under filter `prefix`.
///
/// Both sides are compared as UTC offsets: sign and hour must be equal, and
/// minutes must be equal when the filter spells them out. `UTC+1` therefore
/// matches `UTC+1:00`, `UTC+01:00` and `UTC+01:30`, but not `UTC+10:00`.
///
/// If either side is not an offset, `prefix` must be a leading substring of
/// `target` that ends on a boundary (the next character is not a digit).
pub fn offset_prefix_match(prefix: &str, target: &str) -> bool {
    match (UtcOffset::parse(prefix), UtcOffset::parse(target)) {
        (Some(filter), Some(zone)) => {
            filter.negative == zone.negative
                && filter.hours == zone.hours
                && filter
                    .minutes
                    .is_none_or(|m| m == zone.minutes.unwrap_or(0))
        }
        _ => match target.strip_prefix(prefix) {
            Some(rest) => !rest.starts_with(|c: char| c.is_ascii_digit()),
            None => false,
        },
    }
}
