//! Sprite frames
//!
//! GameMaker stores each frame layer as
//! `sprites/<sprite>/layers/<frame>/<layer>.png`. Every image below a
//! `layers` directory is re-encoded to
//! `sprites/<sprite>/<sprite>_<n>.png` in the Godot project.

use image::ImageFormat;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::{has_extension, walk_files};
use crate::error::ConvertError;
use crate::sink::{percent, ConversionSink};

const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Group layer images by sprite name
pub fn find_sprite_images(sprites_dir: &Path) -> Result<BTreeMap<String, Vec<PathBuf>>, ConvertError> {
    let mut sprites: BTreeMap<String, Vec<PathBuf>> = BTreeMap::new();
    if !sprites_dir.is_dir() {
        return Ok(sprites);
    }

    for path in walk_files(sprites_dir)? {
        if !has_extension(&path, &IMAGE_EXTENSIONS) {
            continue;
        }
        let Some(frame_dir) = path.parent() else {
            continue;
        };
        let under_layers = frame_dir
            .strip_prefix(sprites_dir)
            .map(|rel| rel.components().any(|c| c.as_os_str() == "layers"))
            .unwrap_or(false);
        if !under_layers {
            continue;
        }
        // <sprite>/layers/<frame>
        let Some(sprite) = frame_dir.ancestors().nth(2).and_then(Path::file_name) else {
            continue;
        };
        sprites
            .entry(sprite.to_string_lossy().to_string())
            .or_default()
            .push(path);
    }
    Ok(sprites)
}

/// Re-encode every sprite frame as PNG; returns the number of images written
pub fn convert_sprites(
    source_root: &Path,
    target_root: &Path,
    sink: &dyn ConversionSink,
) -> Result<usize, ConvertError> {
    let target_dir = target_root.join("sprites");
    fs::create_dir_all(&target_dir)?;

    let sprites = find_sprite_images(&source_root.join("sprites"))?;
    if sprites.is_empty() {
        sink.log("No sprites found in the GameMaker project.");
        return Ok(0);
    }

    let total: usize = sprites.values().map(Vec::len).sum();
    let mut done = 0;

    for (name, images) in &sprites {
        if !sink.should_continue() {
            sink.log("Sprite conversion stopped.");
            return Ok(done);
        }

        let sprite_dir = target_dir.join(name);
        fs::create_dir_all(&sprite_dir)?;

        for (index, source) in images.iter().enumerate() {
            let file_name = if images.len() > 1 {
                format!("{}_{}.png", name, index + 1)
            } else {
                format!("{}.png", name)
            };
            image::open(source)?.save_with_format(sprite_dir.join(&file_name), ImageFormat::Png)?;

            let relative = source.strip_prefix(source_root).unwrap_or(source);
            sink.log(&format!(
                "Converted {} -> sprites/{}/{}",
                relative.display(),
                name,
                file_name
            ));
            done += 1;
            sink.progress(percent(done, total));
        }
    }

    sink.log("Sprite conversion complete.");
    Ok(done)
}
