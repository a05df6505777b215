//! Which categories a run converts

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::ConvertError;

/// A unit of conversion work, run in the order of [`Category::ALL`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Copy and re-encode the game icon
    GameIcon,
    /// Copy the project name into `project.godot`
    ProjectName,
    /// Map GameMaker options onto `project.godot`
    ProjectSettings,
    /// Generate the audio bus layout
    AudioBuses,
    /// Export sprite frames as PNG
    Sprites,
    /// Create the fonts folder
    Fonts,
    /// Create the tilesets folder
    Tilesets,
    /// Copy sound files
    Sounds,
    /// Copy notes into per-note folders
    Notes,
}

impl Category {
    /// Every category in execution order
    pub const ALL: [Category; 9] = [
        Category::GameIcon,
        Category::ProjectName,
        Category::ProjectSettings,
        Category::AudioBuses,
        Category::Sprites,
        Category::Fonts,
        Category::Tilesets,
        Category::Sounds,
        Category::Notes,
    ];

    /// Snake-case name used in settings files and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::GameIcon => "game_icon",
            Category::ProjectName => "project_name",
            Category::ProjectSettings => "project_settings",
            Category::AudioBuses => "audio_buses",
            Category::Sprites => "sprites",
            Category::Fonts => "fonts",
            Category::Tilesets => "tilesets",
            Category::Sounds => "sounds",
            Category::Notes => "notes",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| ConvertError::InvalidCategory(s.to_string()))
    }
}

fn enabled() -> bool {
    true
}

/// One switch per category
///
/// Stored as JSON. Missing fields take their defaults: everything on except
/// notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionSettings {
    /// Run [`Category::GameIcon`]
    #[serde(default = "enabled")]
    pub game_icon: bool,
    /// Run [`Category::ProjectName`]
    #[serde(default = "enabled")]
    pub project_name: bool,
    /// Run [`Category::ProjectSettings`]
    #[serde(default = "enabled")]
    pub project_settings: bool,
    /// Run [`Category::AudioBuses`]
    #[serde(default = "enabled")]
    pub audio_buses: bool,
    /// Run [`Category::Sprites`]
    #[serde(default = "enabled")]
    pub sprites: bool,
    /// Run [`Category::Fonts`]
    #[serde(default = "enabled")]
    pub fonts: bool,
    /// Run [`Category::Tilesets`]
    #[serde(default = "enabled")]
    pub tilesets: bool,
    /// Run [`Category::Sounds`]
    #[serde(default = "enabled")]
    pub sounds: bool,
    /// Run [`Category::Notes`]; off by default
    #[serde(default)]
    pub notes: bool,
}

impl Default for ConversionSettings {
    fn default() -> Self {
        Self {
            game_icon: true,
            project_name: true,
            project_settings: true,
            audio_buses: true,
            sprites: true,
            fonts: true,
            tilesets: true,
            sounds: true,
            notes: false,
        }
    }
}

impl ConversionSettings {
    /// Settings with every category switched off
    pub fn none() -> Self {
        let mut settings = Self::default();
        for category in Category::ALL {
            settings.set(category, false);
        }
        settings
    }

    /// Load settings from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConvertError> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save settings as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConvertError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Whether a category is switched on
    pub fn is_enabled(&self, category: Category) -> bool {
        match category {
            Category::GameIcon => self.game_icon,
            Category::ProjectName => self.project_name,
            Category::ProjectSettings => self.project_settings,
            Category::AudioBuses => self.audio_buses,
            Category::Sprites => self.sprites,
            Category::Fonts => self.fonts,
            Category::Tilesets => self.tilesets,
            Category::Sounds => self.sounds,
            Category::Notes => self.notes,
        }
    }

    /// Switch a category on or off
    pub fn set(&mut self, category: Category, on: bool) {
        let flag = match category {
            Category::GameIcon => &mut self.game_icon,
            Category::ProjectName => &mut self.project_name,
            Category::ProjectSettings => &mut self.project_settings,
            Category::AudioBuses => &mut self.audio_buses,
            Category::Sprites => &mut self.sprites,
            Category::Fonts => &mut self.fonts,
            Category::Tilesets => &mut self.tilesets,
            Category::Sounds => &mut self.sounds,
            Category::Notes => &mut self.notes,
        };
        *flag = on;
    }
}
