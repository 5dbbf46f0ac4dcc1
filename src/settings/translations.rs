//! Static translation tables.
//!
//! Every [`Label`] has a string for every [`Language`]. Both enums are matched
//! exhaustively, so adding a label or a language without filling in the
//! table is a compile error.

use std::fmt;
use std::str::FromStr;

/// Supported interface languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    French,
    Spanish,
    German,
}

impl Language {
    /// All languages in picker order.
    pub const ALL: [Language; 4] = [
        Language::English,
        Language::French,
        Language::Spanish,
        Language::German,
    ];

    /// ISO 639-1 code used in config files and on the command line.
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::French => "fr",
            Language::Spanish => "es",
            Language::German => "de",
        }
    }

    /// Short name shown on the language button.
    pub fn short_name(self) -> &'static str {
        match self {
            Language::English => "EN",
            Language::French => "FR",
            Language::Spanish => "ES",
            Language::German => "DE",
        }
    }

    /// Endonym shown in the language picker.
    pub fn full_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::French => "Français",
            Language::Spanish => "Español",
            Language::German => "Deutsch",
        }
    }

    /// Position in [`Language::ALL`].
    pub fn index(self) -> usize {
        Language::ALL
            .iter()
            .position(|l| *l == self)
            .unwrap_or_default()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Language::ALL
            .into_iter()
            .find(|l| l.code() == wanted)
            .ok_or_else(|| format!("unsupported language {s:?} (expected en, fr, es or de)"))
    }
}

/// Every translatable piece of interface text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    // List screen
    Explore,
    SearchPlaceholder,
    Filters,
    Languages,
    Loading,
    NoResults,

    // Filters modal
    Continent,
    Timezone,
    Reset,
    ShowResults,

    // Detail screen
    Back,
    Name,
    Population,
    CapitalCity,
    CountryCode,
    OfficialName,
    Area,
    Currency,
    DiallingCode,
    DrivingSide,
    NotAvailable,

    // Carousel pages
    Flag,
    CoatOfArms,
    Map,

    // Hints
    Help,
}

/// Look up the display string for `label` in `language`.
pub fn translate(label: Label, language: Language) -> &'static str {
    match language {
        Language::English => english(label),
        Language::French => french(label),
        Language::Spanish => spanish(label),
        Language::German => german(label),
    }
}

fn english(label: Label) -> &'static str {
    match label {
        Label::Explore => "Explore",
        Label::SearchPlaceholder => "Search country",
        Label::Filters => "Filter",
        Label::Languages => "Languages",
        Label::Loading => "Loading…",
        Label::NoResults => "No countries found",
        Label::Continent => "Continent",
        Label::Timezone => "Time zone",
        Label::Reset => "Reset",
        Label::ShowResults => "Show Results",
        Label::Back => "Back",
        Label::Name => "Name",
        Label::Population => "Population",
        Label::CapitalCity => "Capital city",
        Label::CountryCode => "Country code",
        Label::OfficialName => "Official name",
        Label::Area => "Area",
        Label::Currency => "Currency",
        Label::DiallingCode => "Dialling code",
        Label::DrivingSide => "Driving side",
        Label::NotAvailable => "N/A",
        Label::Flag => "Flag",
        Label::CoatOfArms => "Coat of arms",
        Label::Map => "Map",
        Label::Help => "Help",
    }
}

fn french(label: Label) -> &'static str {
    match label {
        Label::Explore => "Explorer",
        Label::SearchPlaceholder => "Rechercher un pays",
        Label::Filters => "Filtrer",
        Label::Languages => "Langues",
        Label::Loading => "Chargement…",
        Label::NoResults => "Aucun pays trouvé",
        Label::Continent => "Continent",
        Label::Timezone => "Fuseau horaire",
        Label::Reset => "Réinitialiser",
        Label::ShowResults => "Afficher les résultats",
        Label::Back => "Retour",
        Label::Name => "Nom",
        Label::Population => "Population",
        Label::CapitalCity => "Capitale",
        Label::CountryCode => "Code pays",
        Label::OfficialName => "Nom officiel",
        Label::Area => "Superficie",
        Label::Currency => "Devise",
        Label::DiallingCode => "Indicatif",
        Label::DrivingSide => "Sens de circulation",
        Label::NotAvailable => "N/D",
        Label::Flag => "Drapeau",
        Label::CoatOfArms => "Armoiries",
        Label::Map => "Carte",
        Label::Help => "Aide",
    }
}

fn spanish(label: Label) -> &'static str {
    match label {
        Label::Explore => "Explorar",
        Label::SearchPlaceholder => "Buscar país",
        Label::Filters => "Filtrar",
        Label::Languages => "Idiomas",
        Label::Loading => "Cargando…",
        Label::NoResults => "No se encontraron países",
        Label::Continent => "Continente",
        Label::Timezone => "Zona horaria",
        Label::Reset => "Restablecer",
        Label::ShowResults => "Mostrar resultados",
        Label::Back => "Volver",
        Label::Name => "Nombre",
        Label::Population => "Población",
        Label::CapitalCity => "Capital",
        Label::CountryCode => "Código de país",
        Label::OfficialName => "Nombre oficial",
        Label::Area => "Superficie",
        Label::Currency => "Moneda",
        Label::DiallingCode => "Prefijo telefónico",
        Label::DrivingSide => "Lado de conducción",
        Label::NotAvailable => "N/D",
        Label::Flag => "Bandera",
        Label::CoatOfArms => "Escudo",
        Label::Map => "Mapa",
        Label::Help => "Ayuda",
    }
}

fn german(label: Label) -> &'static str {
    match label {
        Label::Explore => "Entdecken",
        Label::SearchPlaceholder => "Land suchen",
        Label::Filters => "Filtern",
        Label::Languages => "Sprachen",
        Label::Loading => "Wird geladen…",
        Label::NoResults => "Keine Länder gefunden",
        Label::Continent => "Kontinent",
        Label::Timezone => "Zeitzone",
        Label::Reset => "Zurücksetzen",
        Label::ShowResults => "Ergebnisse anzeigen",
        Label::Back => "Zurück",
        Label::Name => "Name",
        Label::Population => "Bevölkerung",
        Label::CapitalCity => "Hauptstadt",
        Label::CountryCode => "Ländercode",
        Label::OfficialName => "Offizieller Name",
        Label::Area => "Fläche",
        Label::Currency => "Währung",
        Label::DiallingCode => "Vorwahl",
        Label::DrivingSide => "Fahrseite",
        Label::NotAvailable => "k. A.",
        Label::Flag => "Flagge",
        Label::CoatOfArms => "Wappen",
        Label::Map => "Karte",
        Label::Help => "Hilfe",
    }
}
