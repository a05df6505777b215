//! Asset copiers
//!
//! Sprites, sounds and notes are walked recursively and copied (or
//! re-encoded) into the Godot project. Fonts and tilesets are placeholders
//! that only prepare the target directory.

mod fonts;
mod notes;
mod sounds;
mod sprites;
mod tilesets;

pub use fonts::convert_fonts;
pub use notes::convert_notes;
pub use sounds::convert_sounds;
pub use sprites::{convert_sprites, find_sprite_images};
pub use tilesets::convert_tilesets;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Every file under `dir`, recursively, sorted by path
pub(crate) fn walk_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    walk_into(dir, &mut files)?;
    files.sort();
    Ok(files)
}

fn walk_into(dir: &Path, files: &mut Vec<PathBuf>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type()?.is_dir() {
            walk_into(&path, files)?;
        } else {
            files.push(path);
        }
    }
    Ok(())
}

/// Case-insensitive extension check
pub(crate) fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .is_some_and(|e| extensions.contains(&e.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_walk_files_recurses_sorted() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("b/c")).unwrap();
        fs::write(dir.path().join("b/c/z.txt"), "").unwrap();
        fs::write(dir.path().join("a.txt"), "").unwrap();

        let files = walk_files(dir.path()).unwrap();
        assert_eq!(
            files,
            vec![dir.path().join("a.txt"), dir.path().join("b/c/z.txt")]
        );
    }

    #[test]
    fn test_has_extension() {
        assert!(has_extension(Path::new("x/Sound.WAV"), &["wav", "ogg"]));
        assert!(!has_extension(Path::new("x/sound.flac"), &["wav", "ogg"]));
        assert!(!has_extension(Path::new("x/noext"), &["wav"]));
    }
}
