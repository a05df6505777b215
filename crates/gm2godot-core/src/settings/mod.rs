//! Project settings conversion
//!
//! Moves the project name and the mapped GameMaker options into
//! `project.godot`.

mod mapping;
mod update;

pub use mapping::{apply, SettingMapping, ValueKind, SETTING_MAPPINGS};
pub use update::{update_project_name, update_project_settings};

pub use crate::gamemaker::SourceScope;
