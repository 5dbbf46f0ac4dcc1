//! Key facts shown on the detail screen.

use crate::model::Country;
use crate::settings::{Label, Settings};

/// Detail items per column.
pub const ITEMS_PER_COLUMN: usize = 4;

/// One labelled fact. `value` is `None` when the record lacks it.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailItem {
    pub label: Label,
    pub value: Option<String>,
}

impl DetailItem {
    fn new(label: Label, value: Option<String>) -> Self {
        Self {
            label,
            value: value.filter(|v| !v.is_empty()),
        }
    }

    /// Value text, or the translated "not available" marker.
    pub fn display_value(&self, settings: &Settings) -> String {
        self.value
            .clone()
            .unwrap_or_else(|| settings.label(Label::NotAvailable).to_string())
    }
}

/// The twelve detail items in display order (three columns of four).
pub fn detail_items(country: &Country) -> Vec<DetailItem> {
    let joined = |values: &[String]| Some(values.join(", "));

    let currencies = country
        .currencies
        .iter()
        .map(|c| match (c.name.is_empty(), c.symbol.is_empty()) {
            (false, false) => format!("{} ({})", c.name, c.symbol),
            (false, true) => c.name.clone(),
            (true, _) => c.symbol.clone(),
        })
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>();

    let languages = country.languages.values().cloned().collect::<Vec<_>>();

    vec![
        DetailItem::new(Label::Name, Some(country.name.to_string())),
        DetailItem::new(Label::Population, Some(format_thousands(country.population))),
        DetailItem::new(Label::CapitalCity, country.capital.first().cloned()),
        DetailItem::new(Label::Continent, joined(&country.continents)),
        DetailItem::new(Label::CountryCode, country.cca2.clone()),
        DetailItem::new(Label::OfficialName, country.official_name.clone()),
        DetailItem::new(Label::Area, country.area.map(format_area)),
        DetailItem::new(Label::Currency, joined(&currencies)),
        DetailItem::new(Label::Timezone, country.timezones.first().cloned()),
        DetailItem::new(Label::Languages, joined(&languages)),
        DetailItem::new(
            Label::DiallingCode,
            country.calling_code.as_ref().map(|c| c.primary()),
        ),
        DetailItem::new(
            Label::DrivingSide,
            country.drive_side.map(|s| s.as_str().to_string()),
        ),
    ]
}

/// Split items into display columns of [`ITEMS_PER_COLUMN`].
pub fn detail_columns(items: &[DetailItem]) -> Vec<&[DetailItem]> {
    items.chunks(ITEMS_PER_COLUMN).collect()
}

/// Capital cities joined by ", ", or `None` when there are none.
pub fn capitals_text(country: &Country) -> Option<String> {
    if country.capital.is_empty() {
        None
    } else {
        Some(country.capital.join(", "))
    }
}

/// Format an integer with thousands separators.
///
/// Examples:
/// - `format_thousands(0)` → "0"
/// - `format_thousands(67391582)` → "67,391,582"
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result
}

/// Area in km² with separators and at most two decimals.
///
/// Examples:
/// - `format_area(551695.0)` → "551,695 km²"
/// - `format_area(0.44)` → "0.44 km²"
pub fn format_area(area: f64) -> String {
    let hundredths = (area.max(0.0) * 100.0).round() as u64;
    let whole = format_thousands(hundredths / 100);
    match hundredths % 100 {
        0 => format!("{whole} km²"),
        frac if frac % 10 == 0 => format!("{whole}.{} km²", frac / 10),
        frac => format!("{whole}.{frac:02} km²"),
    }
}
