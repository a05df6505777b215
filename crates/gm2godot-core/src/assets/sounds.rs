//! Sound files are copied as-is, keeping their folder layout

use std::fs;
use std::path::Path;

use super::{has_extension, walk_files};
use crate::error::ConvertError;
use crate::sink::{percent, ConversionSink};

const SOUND_EXTENSIONS: [&str; 3] = ["wav", "mp3", "ogg"];

/// Copy `sounds/**.{wav,mp3,ogg}`; returns the number of files copied
pub fn convert_sounds(
    source_root: &Path,
    target_root: &Path,
    sink: &dyn ConversionSink,
) -> Result<usize, ConvertError> {
    let source_dir = source_root.join("sounds");
    let target_dir = target_root.join("sounds");
    fs::create_dir_all(&target_dir)?;

    let files: Vec<_> = if source_dir.is_dir() {
        walk_files(&source_dir)?
            .into_iter()
            .filter(|p| has_extension(p, &SOUND_EXTENSIONS))
            .collect()
    } else {
        Vec::new()
    };
    if files.is_empty() {
        sink.log("No sound files found in the GameMaker project.");
        return Ok(0);
    }

    for (done, source) in files.iter().enumerate() {
        if !sink.should_continue() {
            sink.log("Sound conversion stopped.");
            return Ok(done);
        }
        let relative = source.strip_prefix(&source_dir).unwrap_or(source);
        let dest = target_dir.join(relative);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(source, &dest)?;
        sink.log(&format!("Copied sound: {}", relative.display()));
        sink.progress(percent(done + 1, files.len()));
    }

    sink.log("Sound conversion complete.");
    Ok(files.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::BufferSink;
    use tempfile::TempDir;

    #[test]
    fn test_copies_with_relative_paths() {
        let gm = TempDir::new().unwrap();
        let godot = TempDir::new().unwrap();
        fs::create_dir_all(gm.path().join("sounds/snd_jump")).unwrap();
        fs::write(gm.path().join("sounds/snd_jump/snd_jump.WAV"), b"RIFF").unwrap();
        fs::write(gm.path().join("sounds/snd_jump/snd_jump.yy"), b"{}").unwrap();

        let sink = BufferSink::new();
        assert_eq!(convert_sounds(gm.path(), godot.path(), &sink).unwrap(), 1);
        assert_eq!(
            fs::read(godot.path().join("sounds/snd_jump/snd_jump.WAV")).unwrap(),
            b"RIFF"
        );
        assert!(!godot.path().join("sounds/snd_jump/snd_jump.yy").exists());
    }

    #[test]
    fn test_no_sounds_is_logged() {
        let gm = TempDir::new().unwrap();
        let godot = TempDir::new().unwrap();
        let sink = BufferSink::new();
        assert_eq!(convert_sounds(gm.path(), godot.path(), &sink).unwrap(), 0);
        assert!(sink.contains("No sound files found"));
    }
}
