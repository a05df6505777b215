//! GameMaker Source Projects
//!
//! Read-only access to the parts of a GameMaker project the converter needs.
//!
//! ## Project Structure
//!
//! ```text
//! [MyGame]/
//! ├── MyGame.yyp                     # Project manifest (name, audio groups)
//! ├── options/
//! │   ├── main/options_main.yy       # Platform-independent options
//! │   ├── windows/options_windows.yy # Windows options
//! │   ├── windows/icons/icon.ico     # Windows game icon
//! │   ├── macos/options_macos.yy
//! │   └── linux/options_linux.yy
//! ├── sprites/
//! ├── sounds/
//! └── notes/
//! ```

mod reader;

pub use reader::{
    files_with_extension, find_manifest, read_audio_groups, read_option, read_project_name,
    ManifestLookup, MANIFEST_EXTENSION,
};

use std::fs;
use std::path::{Path, PathBuf};

use crate::platform::TargetPlatform;
use crate::sink::ConversionSink;

/// Which options file a setting is read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceScope {
    /// Always `options/windows/options_windows.yy`, whatever the target platform
    Windows,
    /// `options/<platform>/options_<platform>.yy` for the selected platform
    Platform,
    /// `options/main/options_main.yy`
    Main,
}

/// A GameMaker project on disk plus the platform chosen for this run
#[derive(Debug, Clone)]
pub struct GameMakerProject {
    root: PathBuf,
    platform: TargetPlatform,
}

impl GameMakerProject {
    /// Wrap a project directory
    pub fn new<P: AsRef<Path>>(root: P, platform: TargetPlatform) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            platform,
        }
    }

    /// Project root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Platform selected for this run
    pub fn platform(&self) -> TargetPlatform {
        self.platform
    }

    /// Path of the options file for a scope
    pub fn options_path(&self, scope: SourceScope) -> PathBuf {
        let dir = match scope {
            SourceScope::Windows => "windows",
            SourceScope::Platform => self.platform.as_str(),
            SourceScope::Main => "main",
        };
        self.root
            .join("options")
            .join(dir)
            .join(format!("options_{}.yy", dir))
    }

    /// Directory holding the selected platform's icons
    pub fn icons_dir(&self) -> PathBuf {
        self.root
            .join("options")
            .join(self.platform.as_str())
            .join("icons")
    }

    /// Locate the manifest, logging when it is missing or ambiguous
    pub fn manifest_path(&self, sink: &dyn ConversionSink) -> Option<PathBuf> {
        let lookup = match find_manifest(&self.root) {
            Ok(lookup) => lookup,
            Err(e) => {
                sink.log(&format!(
                    "Could not read GameMaker project directory {}: {}",
                    self.root.display(),
                    e
                ));
                return None;
            }
        };

        match &lookup {
            ManifestLookup::NotFound => {
                sink.log("No .yyp file found in the GameMaker project.");
            }
            ManifestLookup::Ambiguous(paths) => {
                let names: Vec<String> = paths.iter().map(|p| file_name(p)).collect();
                tracing::warn!(candidates = ?names, "multiple manifests");
                sink.log(&format!(
                    "Warning: multiple .yyp files found ({}); using {}.",
                    names.join(", "),
                    names[0]
                ));
            }
            ManifestLookup::Unique(_) => {}
        }

        lookup.first().map(Path::to_path_buf)
    }

    /// Read the whole manifest text
    pub fn read_manifest(&self, sink: &dyn ConversionSink) -> Option<String> {
        let path = self.manifest_path(sink)?;
        match fs::read_to_string(&path) {
            Ok(text) => Some(text),
            Err(e) => {
                sink.log(&format!("Could not read {}: {}", file_name(&path), e));
                None
            }
        }
    }

    /// Project name from the manifest
    pub fn project_name(&self, sink: &dyn ConversionSink) -> Option<String> {
        let manifest = self.read_manifest(sink)?;
        let name = read_project_name(&manifest);
        if name.is_none() {
            sink.log("Project name not found in the .yyp file.");
        }
        name
    }

    /// Audio group names from the manifest, in declaration order
    pub fn audio_groups(&self, sink: &dyn ConversionSink) -> Vec<String> {
        let Some(manifest) = self.read_manifest(sink) else {
            return Vec::new();
        };
        match read_audio_groups(&manifest) {
            None => {
                sink.log("AudioGroups section not found in the .yyp file.");
                Vec::new()
            }
            Some(groups) if groups.is_empty() => {
                sink.log("No audio group names found in the .yyp file.");
                groups
            }
            Some(groups) => {
                sink.log(&format!("Found audio groups: {}", groups.join(", ")));
                groups
            }
        }
    }

    /// Text of the options file for a scope, or `None` (logged) when unreadable
    pub fn options_text(&self, scope: SourceScope, sink: &dyn ConversionSink) -> Option<String> {
        let path = self.options_path(scope);
        if !path.exists() {
            sink.log(&format!("{} file not found.", file_name(&path)));
            return None;
        }
        match fs::read_to_string(&path) {
            Ok(text) => Some(text),
            Err(e) => {
                sink.log(&format!("Could not read {}: {}", file_name(&path), e));
                None
            }
        }
    }

    /// Read a single option from the options file for `scope`
    pub fn option(&self, scope: SourceScope, key: &str, sink: &dyn ConversionSink) -> Option<String> {
        let text = self.options_text(scope, sink)?;
        read_option(&text, key)
    }
}

pub(crate) fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
