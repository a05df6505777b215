//! Fonts are not converted yet; only the target folder is prepared

use std::fs;
use std::path::Path;

use crate::error::ConvertError;
use crate::sink::ConversionSink;

/// Prepare `fonts/` in the Godot project
pub fn convert_fonts(
    source_root: &Path,
    target_root: &Path,
    sink: &dyn ConversionSink,
) -> Result<(), ConvertError> {
    fs::create_dir_all(target_root.join("fonts"))?;

    if !source_root.join("fonts").is_dir() {
        sink.log(&format!(
            "No fonts folder found in {}.",
            source_root.display()
        ));
        return Ok(());
    }

    sink.log("Font conversion complete.");
    Ok(())
}
