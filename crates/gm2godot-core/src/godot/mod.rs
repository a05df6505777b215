//! Godot Target Projects
//!
//! The target project must already exist (created by the Godot editor) and
//! contain `project.godot`. The converter only rewrites that file and drops
//! new files next to it.
//!
//! ## Files Written
//!
//! ```text
//! [MyGodotGame]/
//! ├── project.godot            # Rewritten in place
//! ├── icon.ico                 # Verbatim copy of the GameMaker icon
//! ├── icon.png                 # Re-encoded icon
//! ├── default_bus_layout.tres  # Regenerated audio buses
//! ├── sprites/  sounds/  notes/  fonts/  tilesets/
//! ```

pub mod bus_layout;
pub mod config;

pub use bus_layout::{generate_layout, AudioBus, BUS_LAYOUT_FILE, DEFAULT_AUDIO_GROUP, MASTER_BUS};
pub use config::{replace_value, set_icon_path, set_project_name, set_value, ICON_RESOURCE};

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::ConvertError;

/// Fixed name of the Godot project configuration file
pub const PROJECT_FILE: &str = "project.godot";

/// A Godot project directory
#[derive(Debug, Clone)]
pub struct GodotProject {
    root: PathBuf,
}

impl GodotProject {
    /// Wrap a project directory
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Project root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path to `project.godot`
    pub fn config_path(&self) -> PathBuf {
        self.root.join(PROJECT_FILE)
    }

    /// Read `project.godot`
    pub fn load_config(&self) -> Result<String, ConvertError> {
        let path = self.config_path();
        if !path.exists() {
            return Err(ConvertError::ConfigNotFound(self.root.clone()));
        }
        Ok(fs::read_to_string(path)?)
    }

    /// Replace `project.godot` with `text`
    ///
    /// The new content goes to a sibling `.tmp` file which is then renamed
    /// into place.
    pub fn save_config(&self, text: &str) -> Result<(), ConvertError> {
        write_replacing(&self.config_path(), text.as_bytes())?;
        Ok(())
    }

    /// Write the audio bus layout for `groups`, returning its path
    pub fn write_bus_layout(&self, groups: &[String]) -> Result<PathBuf, ConvertError> {
        let path = self.root.join(BUS_LAYOUT_FILE);
        write_replacing(&path, generate_layout(groups).as_bytes())?;
        Ok(path)
    }
}

fn write_replacing(path: &Path, contents: &[u8]) -> io::Result<()> {
    let mut tmp_name = path.as_os_str().to_os_string();
    tmp_name.push(".tmp");
    let tmp = PathBuf::from(tmp_name);

    let result = fs::write(&tmp, contents).and_then(|_| fs::rename(&tmp, path));
    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    result
}
