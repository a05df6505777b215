//! Targeted field extraction from GameMaker project files
//!
//! `.yyp` manifests and `.yy` options files look like JSON but are not
//! reliably strict JSON (trailing commas, unquoted tokens, older layouts).
//! Only a handful of fields are needed, so each one is pulled out with a
//! narrowly scoped pattern instead of a full parse.

use regex::Regex;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Extension of the project manifest (without the dot)
pub const MANIFEST_EXTENSION: &str = "yyp";

static NAME_FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""%Name"\s*:\s*"([^"]*)""#).unwrap());

// Audio groups in pre-2023 manifests only carry a plain "name" field.
static LEGACY_NAME_FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""name"\s*:\s*"([^"]*)""#).unwrap());

static AUDIO_GROUPS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?s)"AudioGroups"\s*:\s*\[(.*?)\]"#).unwrap());

/// Result of looking for the project manifest in a directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestLookup {
    /// Exactly one manifest
    Unique(PathBuf),
    /// Several manifests, sorted by file name
    Ambiguous(Vec<PathBuf>),
    /// No manifest at all
    NotFound,
}

impl ManifestLookup {
    /// The manifest to use: the unique one, or the first by name when ambiguous
    pub fn first(&self) -> Option<&Path> {
        match self {
            ManifestLookup::Unique(path) => Some(path),
            ManifestLookup::Ambiguous(paths) => paths.first().map(PathBuf::as_path),
            ManifestLookup::NotFound => None,
        }
    }
}

/// List files directly in `root` with the given extension, sorted by name
///
/// Sorting makes "first match" independent of the filesystem's listing order.
pub fn files_with_extension(root: &Path, extension: &str) -> io::Result<Vec<PathBuf>> {
    let suffix = format!(".{}", extension);
    let mut files = Vec::new();
    for entry in fs::read_dir(root)? {
        let entry = entry?;
        let name = entry.file_name();
        if name.to_string_lossy().ends_with(&suffix) && entry.file_type()?.is_file() {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}

/// Find the `.yyp` manifest directly inside `root`
pub fn find_manifest(root: &Path) -> io::Result<ManifestLookup> {
    let mut manifests = files_with_extension(root, MANIFEST_EXTENSION)?;
    Ok(match manifests.len() {
        0 => ManifestLookup::NotFound,
        1 => ManifestLookup::Unique(manifests.remove(0)),
        _ => ManifestLookup::Ambiguous(manifests),
    })
}

/// Extract the project name from manifest text
///
/// Searches the whole text for the first `"%Name": "..."` field rather than
/// relying on its line position.
pub fn read_project_name(manifest: &str) -> Option<String> {
    NAME_FIELD.captures(manifest).map(|caps| caps[1].to_string())
}

/// Extract audio group names from manifest text, in order of appearance
///
/// Returns `None` when the manifest has no `"AudioGroups"` array at all, and
/// an empty list when the array holds no recognisable names.
pub fn read_audio_groups(manifest: &str) -> Option<Vec<String>> {
    let section = AUDIO_GROUPS.captures(manifest)?;
    let body = section.get(1).map_or("", |m| m.as_str());

    let mut names: Vec<String> = NAME_FIELD
        .captures_iter(body)
        .map(|caps| caps[1].to_string())
        .collect();
    if names.is_empty() {
        names = LEGACY_NAME_FIELD
            .captures_iter(body)
            .map(|caps| caps[1].to_string())
            .collect();
    }
    Some(names)
}

/// Extract one option value from options file text
///
/// The value is either a quoted string (returned without the quotes, escape
/// sequences left as written) or a bare token running up to the next comma,
/// newline or closing brace. Absent keys and empty values yield `None`.
pub fn read_option(options: &str, key: &str) -> Option<String> {
    let pattern = format!(
        r#""{}"\s*:\s*(?:"((?:[^"\\]|\\.)*)"|([^,\r\n}}]+))"#,
        regex::escape(key)
    );
    let re = Regex::new(&pattern).ok()?;
    let caps = re.captures(options)?;
    if let Some(quoted) = caps.get(1) {
        let quoted = quoted.as_str();
        return (!quoted.is_empty()).then(|| quoted.to_string());
    }
    let bare = caps.get(2)?.as_str().trim().trim_matches('"');
    if bare.is_empty() {
        None
    } else {
        Some(bare.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"{
  "$GMProject":"",
  "%Name":"MyGame",
  "AudioGroups":[
    {"$GMAudioGroup":"","%Name":"audiogroup_default","name":"audiogroup_default","resourceType":"GMAudioGroup","resourceVersion":"2.0","targets":-1,},
    {"$GMAudioGroup":"","%Name":"music","name":"music","resourceType":"GMAudioGroup","resourceVersion":"2.0","targets":-1,},
  ],
  "configs":{"children":[],"name":"Default",},
  "name":"MyGame",
}"#;

    #[test]
    fn test_project_name_not_on_fixed_line() {
        let text = "{\n\n\n\n  \"resourceType\": \"GMProject\",\n  \"%Name\": \"MyGame\",\n}";
        assert_eq!(read_project_name(text), Some("MyGame".to_string()));
    }

    #[test]
    fn test_project_name_ignores_resource_names() {
        let text = r#"{ "resources": [{"id":{"name":"spr_player"}}], "name": "OldGame" }"#;
        assert_eq!(read_project_name(text), None);
    }

    #[test]
    fn test_project_name_missing() {
        assert_eq!(read_project_name("{ \"resources\": [] }"), None);
    }

    #[test]
    fn test_audio_groups_in_order() {
        assert_eq!(
            read_audio_groups(MANIFEST),
            Some(vec!["audiogroup_default".to_string(), "music".to_string()])
        );
    }

    #[test]
    fn test_audio_groups_ignore_names_outside_array() {
        let groups = read_audio_groups(MANIFEST).unwrap();
        assert!(!groups.contains(&"MyGame".to_string()));
        assert!(!groups.contains(&"Default".to_string()));
    }

    #[test]
    fn test_audio_groups_section_missing() {
        assert_eq!(read_audio_groups(r#"{"%Name":"x"}"#), None);
    }

    #[test]
    fn test_audio_groups_legacy_layout() {
        let text = r#""AudioGroups": [
            {"ConfigValues":{},"name":"audiogroup_default","targets":461609314234257646,},
            {"ConfigValues":{},"name":"sfx","targets":461609314234257646,},
        ],"#;
        assert_eq!(
            read_audio_groups(text),
            Some(vec!["audiogroup_default".to_string(), "sfx".to_string()])
        );
    }

    #[test]
    fn test_read_option_bare_and_quoted() {
        let text = r#"{
  "option_windows_vsync": true,
  "option_windows_version": "1.2.0.0",
  "option_game_speed": 60,
  "option_windows_description_info": "A game, with commas",
}"#;
        assert_eq!(read_option(text, "option_windows_vsync"), Some("true".into()));
        assert_eq!(read_option(text, "option_windows_version"), Some("1.2.0.0".into()));
        assert_eq!(read_option(text, "option_game_speed"), Some("60".into()));
        assert_eq!(
            read_option(text, "option_windows_description_info"),
            Some("A game, with commas".into())
        );
    }

    #[test]
    fn test_read_option_absent_key() {
        let text = r#"{"option_windows_vsync":false,}"#;
        assert_eq!(read_option(text, "option_windows_borderless"), None);
    }

    #[test]
    fn test_read_option_does_not_match_longer_key() {
        let text = r#"{"option_linux_sync_extra":true,"option_linux_sync":false}"#;
        assert_eq!(read_option(text, "option_linux_sync"), Some("false".into()));
    }

    #[test]
    fn test_read_option_last_value_without_comma() {
        let text = "{\"option_game_speed\":30}";
        assert_eq!(read_option(text, "option_game_speed"), Some("30".into()));
    }

    #[test]
    fn test_read_option_keeps_escapes() {
        let text = r#"{"option_windows_description_info":"say \"hi\"",}"#;
        assert_eq!(
            read_option(text, "option_windows_description_info"),
            Some(r#"say \"hi\""#.into())
        );
    }

    #[test]
    fn test_read_option_empty_value_is_absent() {
        let text = r#"{"option_windows_description_info":"","option_windows_version": ,}"#;
        assert_eq!(read_option(text, "option_windows_description_info"), None);
        assert_eq!(read_option(text, "option_windows_version"), None);
    }
}
