//! Conversion Runs
//!
//! A [`Converter`] runs each enabled [`Category`] in a fixed order against one
//! GameMaker source and one Godot target. Categories are independent: a
//! failure is logged, recorded in the [`ConversionReport`] and the run moves
//! on. Cancellation is checked between categories only; a category that has
//! started runs to completion.

mod report;
mod settings;

pub use report::{CategoryOutcome, ConversionReport};
pub use settings::{Category, ConversionSettings};

use std::path::{Path, PathBuf};

use crate::assets;
use crate::error::ConvertError;
use crate::gamemaker::{file_name, find_manifest, GameMakerProject, ManifestLookup};
use crate::godot::GodotProject;
use crate::icon;
use crate::messages::{self, Language};
use crate::platform::TargetPlatform;
use crate::settings::{update_project_name, update_project_settings};
use crate::sink::ConversionSink;

/// Inputs fixed for the whole run
#[derive(Debug, Clone)]
pub struct ConverterOptions {
    /// GameMaker project directory (contains the `.yyp`)
    pub gm_root: PathBuf,
    /// Godot project directory (contains `project.godot`)
    pub godot_root: PathBuf,
    /// Platform whose options and icon are used
    pub platform: TargetPlatform,
    /// Language of run-level console lines
    pub language: Language,
}

impl ConverterOptions {
    /// Options with the default language
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(gm_root: P, godot_root: Q, platform: TargetPlatform) -> Self {
        Self {
            gm_root: gm_root.as_ref().to_path_buf(),
            godot_root: godot_root.as_ref().to_path_buf(),
            platform,
            language: Language::default(),
        }
    }

    /// Set the console language
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }
}

/// Check that both project directories look usable before converting
///
/// Requires exactly one `.yyp` in the GameMaker root and a `project.godot` in
/// the Godot root. Returns the manifest path.
pub fn validate_projects(gm_root: &Path, godot_root: &Path) -> Result<PathBuf, ConvertError> {
    let manifest = match find_manifest(gm_root)? {
        ManifestLookup::Unique(path) => path,
        ManifestLookup::NotFound => return Err(ConvertError::ManifestNotFound(gm_root.to_path_buf())),
        ManifestLookup::Ambiguous(paths) => {
            return Err(ConvertError::AmbiguousManifest(
                paths.iter().map(|p| file_name(p)).collect(),
            ))
        }
    };

    if !GodotProject::new(godot_root).config_path().exists() {
        return Err(ConvertError::ConfigNotFound(godot_root.to_path_buf()));
    }
    Ok(manifest)
}

/// Drives one conversion run
#[derive(Debug, Clone)]
pub struct Converter {
    options: ConverterOptions,
    source: GameMakerProject,
    target: GodotProject,
}

impl Converter {
    /// Create a converter for a source/target pair
    pub fn new(options: ConverterOptions) -> Self {
        let source = GameMakerProject::new(&options.gm_root, options.platform);
        let target = GodotProject::new(&options.godot_root);
        Self {
            options,
            source,
            target,
        }
    }

    /// The GameMaker side
    pub fn source(&self) -> &GameMakerProject {
        &self.source
    }

    /// The Godot side
    pub fn target(&self) -> &GodotProject {
        &self.target
    }

    /// Run every enabled category in order
    pub fn run(&self, settings: &ConversionSettings, sink: &dyn ConversionSink) -> ConversionReport {
        let lang = self.options.language;
        let mut report = ConversionReport::default();
        let mut stopped = false;

        for category in Category::ALL {
            if !settings.is_enabled(category) {
                report.record(category, CategoryOutcome::Skipped);
                continue;
            }
            if stopped || !sink.should_continue() {
                stopped = true;
                report.record(category, CategoryOutcome::Cancelled);
                continue;
            }

            sink.log(messages::category_banner(lang, category));
            tracing::debug!(%category, "starting category");
            let outcome = self.run_category(category, sink);
            sink.progress(0);
            report.record(category, outcome);
        }

        sink.log(if stopped {
            messages::conversion_stopped(lang)
        } else {
            messages::conversion_complete(lang)
        });
        report
    }

    /// Run a single category, catching and logging its failure
    pub fn run_category(&self, category: Category, sink: &dyn ConversionSink) -> CategoryOutcome {
        let gm = self.source.root();
        let godot = self.target.root();

        let result = match category {
            Category::GameIcon => {
                return if icon::convert_icon(&self.source.icons_dir(), godot, sink) {
                    CategoryOutcome::Completed
                } else {
                    CategoryOutcome::Failed("game icon was not converted".to_string())
                };
            }
            Category::ProjectName => update_project_name(&self.source, &self.target, sink),
            Category::ProjectSettings => update_project_settings(&self.source, &self.target, sink),
            Category::AudioBuses => self.generate_audio_buses(sink),
            Category::Sprites => assets::convert_sprites(gm, godot, sink).map(drop),
            Category::Fonts => assets::convert_fonts(gm, godot, sink),
            Category::Tilesets => assets::convert_tilesets(gm, godot, sink),
            Category::Sounds => assets::convert_sounds(gm, godot, sink).map(drop),
            Category::Notes => assets::convert_notes(gm, godot, sink).map(drop),
        };

        match result {
            Ok(()) => CategoryOutcome::Completed,
            Err(e) => {
                tracing::warn!(%category, "category failed: {e}");
                sink.log(&format!("Error converting {}: {}", category, e));
                CategoryOutcome::Failed(e.to_string())
            }
        }
    }

    fn generate_audio_buses(&self, sink: &dyn ConversionSink) -> Result<(), ConvertError> {
        let groups = self.source.audio_groups(sink);
        let path = self.target.write_bus_layout(&groups)?;
        sink.log(&format!(
            "Generated {} with {} audio buses.",
            file_name(&path),
            groups.len()
        ));
        Ok(())
    }
}
