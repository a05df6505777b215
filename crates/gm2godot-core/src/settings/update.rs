//! Read-modify-write passes over `project.godot`

use std::collections::HashMap;

use super::mapping::{apply, SETTING_MAPPINGS};
use crate::error::ConvertError;
use crate::gamemaker::{read_option, GameMakerProject, SourceScope};
use crate::godot::{set_icon_path, set_project_name, set_value, GodotProject};
use crate::icon::ICON_PNG_FILE;
use crate::sink::ConversionSink;

/// Copy the GameMaker project name into `config/name`
///
/// A missing name is logged and leaves the file untouched.
pub fn update_project_name(
    source: &GameMakerProject,
    target: &GodotProject,
    sink: &dyn ConversionSink,
) -> Result<(), ConvertError> {
    let config = target.load_config()?;

    let Some(name) = source.project_name(sink) else {
        sink.log("Could not update project name: GameMaker project name not found.");
        return Ok(());
    };

    target.save_config(&set_project_name(&config, &name))?;
    sink.log(&format!("Updated project name to: {}", name));
    Ok(())
}

/// Point the icon at `res://icon.png` and apply every mapped option
///
/// The icon reference is only rewritten once `icon.png` exists in the Godot
/// project. Each options file is read at most once. Options that are absent,
/// or whose file is missing, are skipped without touching `project.godot`.
pub fn update_project_settings(
    source: &GameMakerProject,
    target: &GodotProject,
    sink: &dyn ConversionSink,
) -> Result<(), ConvertError> {
    let mut config = target.load_config()?;
    if target.root().join(ICON_PNG_FILE).is_file() {
        config = set_icon_path(&config);
    } else {
        tracing::debug!("no converted icon, leaving config/icon as is");
    }

    let mut files: HashMap<SourceScope, Option<String>> = HashMap::new();
    let mut applied = 0usize;

    for mapping in SETTING_MAPPINGS {
        let key = mapping.option_key(source.platform());
        let text = files
            .entry(mapping.scope)
            .or_insert_with(|| source.options_text(mapping.scope, sink));

        let value = text.as_deref().and_then(|t| read_option(t, &key));
        let Some(literal) = apply(value.as_deref(), mapping.kind) else {
            tracing::debug!(option = %key, "option not set, skipping");
            continue;
        };

        config = set_value(&config, mapping.section, mapping.target_key, &literal);
        tracing::debug!(option = %key, setting = mapping.target_key, value = %literal, "mapped");
        applied += 1;
    }

    target.save_config(&config)?;
    sink.log(&format!(
        "Project settings updated ({} of {} settings mapped).",
        applied,
        SETTING_MAPPINGS.len()
    ));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::TargetPlatform;
    use crate::sink::BufferSink;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_name_leaves_config() {
        let gm = TempDir::new().unwrap();
        let godot = TempDir::new().unwrap();
        fs::write(gm.path().join("game.yyp"), "{ \"resources\": [] }").unwrap();
        fs::write(godot.path().join("project.godot"), "[application]\nconfig/name=\"Old\"\n").unwrap();

        let sink = BufferSink::new();
        let source = GameMakerProject::new(gm.path(), TargetPlatform::Windows);
        let target = GodotProject::new(godot.path());
        update_project_name(&source, &target, &sink).unwrap();

        assert_eq!(target.load_config().unwrap(), "[application]\nconfig/name=\"Old\"\n");
        assert!(sink.contains("GameMaker project name not found"));
    }

    #[test]
    fn test_settings_without_options_only_set_icon() {
        let gm = TempDir::new().unwrap();
        let godot = TempDir::new().unwrap();
        fs::write(godot.path().join(ICON_PNG_FILE), b"png").unwrap();
        fs::write(
            godot.path().join("project.godot"),
            "[application]\nconfig/icon=\"res://icon.svg\"\n",
        )
        .unwrap();

        let sink = BufferSink::new();
        let source = GameMakerProject::new(gm.path(), TargetPlatform::Linux);
        let target = GodotProject::new(godot.path());
        update_project_settings(&source, &target, &sink).unwrap();

        assert_eq!(
            target.load_config().unwrap(),
            "[application]\nconfig/icon=\"res://icon.png\"\n"
        );
        // One "not found" line per options file, not per setting
        let missing = sink.lines().iter().filter(|l| l.contains("file not found")).count();
        assert_eq!(missing, 3);
    }

    #[test]
    fn test_icon_reference_kept_without_converted_icon() {
        let gm = TempDir::new().unwrap();
        let godot = TempDir::new().unwrap();
        let before = "[application]\nconfig/icon=\"res://icon.svg\"\n";
        fs::write(godot.path().join("project.godot"), before).unwrap();

        let source = GameMakerProject::new(gm.path(), TargetPlatform::Windows);
        let target = GodotProject::new(godot.path());
        update_project_settings(&source, &target, &BufferSink::new()).unwrap();

        assert_eq!(target.load_config().unwrap(), before);
    }

    #[test]
    fn test_empty_option_keeps_existing_value() {
        let gm = TempDir::new().unwrap();
        let godot = TempDir::new().unwrap();
        fs::create_dir_all(gm.path().join("options/windows")).unwrap();
        fs::write(
            gm.path().join("options/windows/options_windows.yy"),
            "{\n  \"option_windows_description_info\":\"\",\n}",
        )
        .unwrap();
        let before = "[application]\nconfig/description=\"Keep me\"\n";
        fs::write(godot.path().join("project.godot"), before).unwrap();

        let source = GameMakerProject::new(gm.path(), TargetPlatform::Windows);
        let target = GodotProject::new(godot.path());
        update_project_settings(&source, &target, &BufferSink::new()).unwrap();

        assert_eq!(target.load_config().unwrap(), before);
    }
}
