//! Game icon conversion
//!
//! GameMaker keeps the icon under `options/<platform>/icons/`. It is copied
//! into the Godot project as-is and also re-encoded to `icon.png`, which
//! `project.godot` references as `res://icon.png`.

use image::ImageFormat;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConvertError;
use crate::gamemaker::{file_name, files_with_extension};
use crate::sink::ConversionSink;

/// Base name of both icon files written to the Godot project
pub const ICON_STEM: &str = "icon";

/// File name of the re-encoded bitmap icon
pub const ICON_PNG_FILE: &str = "icon.png";

/// Source extensions in order of preference; `.png` is a fallback
const SOURCE_EXTENSIONS: [&str; 2] = ["ico", "png"];

/// Files written by a successful icon conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconOutput {
    /// Icon chosen from the source directory
    pub source: PathBuf,
    /// Verbatim copy, keeping the source extension
    pub copied: PathBuf,
    /// Re-encoded PNG
    pub converted: PathBuf,
}

/// Pick the icon to convert from `icons_dir`
///
/// `.ico` files are preferred over `.png`; ties go to the first by name.
/// Returns every candidate of the chosen extension so callers can warn.
pub fn find_icon(icons_dir: &Path) -> Result<Vec<PathBuf>, ConvertError> {
    if !icons_dir.is_dir() {
        return Err(ConvertError::IconDirNotFound(icons_dir.to_path_buf()));
    }
    for extension in SOURCE_EXTENSIONS {
        let candidates = files_with_extension(icons_dir, extension)?;
        if !candidates.is_empty() {
            return Ok(candidates);
        }
    }
    Err(ConvertError::IconNotFound(icons_dir.to_path_buf()))
}

/// Copy and re-encode the icon, reporting failures as errors
pub fn try_convert_icon(
    icons_dir: &Path,
    target_root: &Path,
    sink: &dyn ConversionSink,
) -> Result<IconOutput, ConvertError> {
    let candidates = find_icon(icons_dir)?;
    if candidates.len() > 1 {
        let names: Vec<String> = candidates.iter().map(|p| file_name(p)).collect();
        sink.log(&format!(
            "Warning: multiple icons found ({}); using {}.",
            names.join(", "),
            names[0]
        ));
    }
    let source = candidates[0].clone();

    let extension = source
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_else(|| SOURCE_EXTENSIONS[0].to_string());
    let copied = target_root.join(format!("{}.{}", ICON_STEM, extension));
    fs::copy(&source, &copied)?;
    sink.log(&format!("Copied icon: {}", file_name(&source)));

    let converted = target_root.join(ICON_PNG_FILE);
    let img = image::open(&source)?;
    img.save_with_format(&converted, ImageFormat::Png)?;
    sink.log(&format!("Converted icon {} to PNG", file_name(&source)));

    Ok(IconOutput {
        source,
        copied,
        converted,
    })
}

/// Convert the game icon; any failure is logged and reported as `false`
pub fn convert_icon(icons_dir: &Path, target_root: &Path, sink: &dyn ConversionSink) -> bool {
    match try_convert_icon(icons_dir, target_root, sink) {
        Ok(_) => true,
        Err(e) => {
            tracing::warn!("icon conversion failed: {e}");
            sink.log(&format!("Icon not converted: {}", e));
            false
        }
    }
}
