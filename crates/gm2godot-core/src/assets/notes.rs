//! Notes: `notes/**/<name>.txt` becomes `notes/<name>/<name>.txt`

use std::fs;
use std::path::Path;

use super::{has_extension, walk_files};
use crate::error::ConvertError;
use crate::sink::{percent, ConversionSink};

/// Copy GameMaker notes; returns the number of notes copied
pub fn convert_notes(
    source_root: &Path,
    target_root: &Path,
    sink: &dyn ConversionSink,
) -> Result<usize, ConvertError> {
    let source_dir = source_root.join("notes");
    if !source_dir.is_dir() {
        sink.log("No notes folder found in the GameMaker project.");
        return Ok(0);
    }

    let notes: Vec<_> = walk_files(&source_dir)?
        .into_iter()
        .filter(|p| has_extension(p, &["txt"]))
        .collect();

    let target_dir = target_root.join("notes");
    fs::create_dir_all(&target_dir)?;

    for (done, source) in notes.iter().enumerate() {
        if !sink.should_continue() {
            sink.log("Note conversion stopped.");
            return Ok(done);
        }
        let (Some(stem), Some(file_name)) = (source.file_stem(), source.file_name()) else {
            continue;
        };
        let note_dir = target_dir.join(stem);
        fs::create_dir_all(&note_dir)?;
        fs::copy(source, note_dir.join(file_name))?;

        sink.log(&format!("Copied note: {}", stem.to_string_lossy()));
        sink.progress(percent(done + 1, notes.len()));
    }

    Ok(notes.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::BufferSink;
    use tempfile::TempDir;

    #[test]
    fn test_note_gets_own_folder() {
        let gm = TempDir::new().unwrap();
        let godot = TempDir::new().unwrap();
        fs::create_dir_all(gm.path().join("notes/todo")).unwrap();
        fs::write(gm.path().join("notes/todo/todo.txt"), "fix jump").unwrap();
        fs::write(gm.path().join("notes/todo/todo.yy"), "{}").unwrap();

        let sink = BufferSink::new();
        assert_eq!(convert_notes(gm.path(), godot.path(), &sink).unwrap(), 1);
        assert_eq!(
            fs::read_to_string(godot.path().join("notes/todo/todo.txt")).unwrap(),
            "fix jump"
        );
    }

    #[test]
    fn test_missing_notes_folder() {
        let gm = TempDir::new().unwrap();
        let godot = TempDir::new().unwrap();
        let sink = BufferSink::new();
        assert_eq!(convert_notes(gm.path(), godot.path(), &sink).unwrap(), 0);
        assert!(!godot.path().join("notes").exists());
    }
}
