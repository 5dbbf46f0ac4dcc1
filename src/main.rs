//! Atlas - Entry Point

use atlas::config::{self, CliOverrides};
use atlas::model::{AppError, CountryCode};
use atlas::settings::{Language, Settings, ThemeMode};
use atlas::source::detect_country_source;
use atlas::view::{run_with_source, ColorConfig, StartupOptions};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Atlas - browse the countries of the world in your terminal
#[derive(Parser, Debug)]
#[command(name = "atlas")]
#[command(version)]
#[command(about = "TUI application for browsing countries from the REST Countries API")]
pub struct Args {
    /// Read countries from a REST Countries JSON dump instead of the API
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Start with this search query
    #[arg(short, long)]
    pub search: Option<String>,

    /// Open the detail screen for this alpha-3 code on startup
    #[arg(long)]
    pub country: Option<String>,

    /// Color theme
    #[arg(long)]
    pub theme: Option<ThemeMode>,

    /// Interface language (en, fr, es, de)
    #[arg(long)]
    pub language: Option<Language>,

    /// Base URL of the REST Countries API
    #[arg(long)]
    pub api_url: Option<String>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = config::resolve(
        args.config.clone(),
        CliOverrides {
            theme: args.theme,
            language: args.language,
            api_base_url: args.api_url.clone(),
        },
    )?;

    atlas::logging::init(&config.log_file_path)?;
    info!(config = ?config, "Configuration loaded and resolved");

    let country = args.country.as_deref().map(CountryCode::new).transpose()?;
    let colors = ColorConfig::from_env_and_args(args.no_color);
    let source = detect_country_source(args.file, &config)?;

    let options = StartupOptions {
        settings: Settings::new(config.theme, config.language, colors.colors_enabled()),
        search: args.search,
        country,
        maps_api_key: config.maps_api_key.clone(),
    };

    run_with_source(source, options)?;

    Ok(())
}
