//! GM2Godot command line front end
//!
//! Validates both project directories, then runs the converter with a sink
//! that forwards every line to `tracing`.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use gm2godot_core::prelude::*;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "gm2godot", version, about = "Convert a GameMaker project into a Godot project")]
struct Cli {
    /// GameMaker project directory (contains the .yyp file)
    gm_project: PathBuf,

    /// Existing Godot project directory (contains project.godot)
    godot_project: PathBuf,

    /// GameMaker platform whose options and icon are converted [default: host OS]
    #[arg(long)]
    platform: Option<TargetPlatform>,

    /// JSON file with per-category switches
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Convert only these categories (e.g. game_icon, audio_buses)
    #[arg(long, value_delimiter = ',')]
    only: Vec<Category>,

    /// Skip these categories
    #[arg(long, value_delimiter = ',')]
    skip: Vec<Category>,

    /// Language of progress banners (en, de)
    #[arg(long, default_value = "en")]
    lang: Language,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Forwards conversion events to the tracing subscriber
struct ConsoleSink;

impl ConversionSink for ConsoleSink {
    fn log(&self, message: &str) {
        info!("{message}");
    }

    fn progress(&self, percent: u8) {
        debug!(percent, "progress");
    }
}

fn resolve_settings(cli: &Cli) -> Result<ConversionSettings> {
    let mut settings = match &cli.settings {
        Some(path) => ConversionSettings::load(path)
            .with_context(|| format!("failed to load settings: {}", path.display()))?,
        None => ConversionSettings::default(),
    };

    if !cli.only.is_empty() {
        settings = ConversionSettings::none();
        for category in &cli.only {
            settings.set(*category, true);
        }
    }
    for category in &cli.skip {
        settings.set(*category, false);
    }
    Ok(settings)
}

fn run(cli: Cli) -> Result<ExitCode> {
    let settings = resolve_settings(&cli)?;
    let platform = cli.platform.unwrap_or_else(TargetPlatform::host);

    let manifest = validate_projects(&cli.gm_project, &cli.godot_project)
        .context("projects are not ready for conversion")?;
    info!("GameMaker project found: {}", manifest.display());
    info!("Target platform: {platform}");

    let options = ConverterOptions::new(&cli.gm_project, &cli.godot_project, platform)
        .with_language(cli.lang);
    let report = Converter::new(options).run(&settings, &ConsoleSink);

    let failures: Vec<_> = report.failures().collect();
    if failures.is_empty() {
        return Ok(ExitCode::SUCCESS);
    }
    for (category, message) in &failures {
        warn!("{category} failed: {message}");
    }
    Ok(ExitCode::from(2))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
