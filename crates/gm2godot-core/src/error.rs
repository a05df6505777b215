//! Error types for project conversion

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while converting a project
///
/// None of these abort a whole conversion run. The converter catches them at
/// the category boundary and logs them through the sink.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Filesystem read, write or rename failed
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Icon or sprite could not be decoded or encoded
    #[error("Image error: {0}")]
    ImageError(#[from] image::ImageError),

    /// Conversion settings JSON is malformed
    #[error("Settings file error: {0}")]
    SettingsError(#[from] serde_json::Error),

    /// GameMaker directory has no manifest
    #[error("No .yyp file found in {0}")]
    ManifestNotFound(PathBuf),

    /// GameMaker directory has several manifests
    #[error("Multiple .yyp files found: {}", .0.join(", "))]
    AmbiguousManifest(Vec<String>),

    /// Godot directory has no `project.godot`
    #[error("project.godot not found in {0}")]
    ConfigNotFound(PathBuf),

    /// Platform icons directory is missing
    #[error("Icon directory not found: {0}")]
    IconDirNotFound(PathBuf),

    /// Icons directory holds no usable icon
    #[error("No .ico or .png icon found in {0}")]
    IconNotFound(PathBuf),

    /// Platform name did not parse
    #[error("Unknown platform '{0}' (expected windows, macos or linux)")]
    InvalidPlatform(String),

    /// Category name did not parse
    #[error("Unknown conversion category '{0}'")]
    InvalidCategory(String),
}
