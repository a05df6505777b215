//! GameMaker option to `project.godot` setting table

use crate::gamemaker::SourceScope;
use crate::platform::TargetPlatform;

/// How a GameMaker option value is rendered in `project.godot`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Quoted string, unless the value is a boolean token
    String,
    /// Bare `true`/`false`
    Boolean,
    /// Number written as a quoted string
    Numeric,
    /// Boolean source mapped onto one of two fixed values
    Enumerated {
        /// Written when the source is `true`
        when_true: &'static str,
        /// Written when the source is `false`
        when_false: &'static str,
    },
}

/// One row of the settings table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingMapping {
    /// Option name without the `option_` / `option_<platform>_` prefix
    pub source_key: &'static str,
    /// Options file the value lives in
    pub scope: SourceScope,
    /// `project.godot` section
    pub section: &'static str,
    /// `project.godot` key within the section
    pub target_key: &'static str,
    /// Value rendering rule
    pub kind: ValueKind,
}

impl SettingMapping {
    /// Full GameMaker option key for the given platform
    pub fn option_key(&self, platform: TargetPlatform) -> String {
        match self.scope {
            SourceScope::Windows => format!("option_windows_{}", self.source_key),
            SourceScope::Platform => format!("option_{}_{}", platform.as_str(), self.source_key),
            SourceScope::Main => format!("option_{}", self.source_key),
        }
    }
}

const fn row(
    source_key: &'static str,
    scope: SourceScope,
    section: &'static str,
    target_key: &'static str,
    kind: ValueKind,
) -> SettingMapping {
    SettingMapping {
        source_key,
        scope,
        section,
        target_key,
        kind,
    }
}

const VSYNC: ValueKind = ValueKind::Enumerated {
    when_true: "1",
    when_false: "0",
};

const FULLSCREEN: ValueKind = ValueKind::Enumerated {
    when_true: "3",
    when_false: "0",
};

/// Every converted setting, applied in order
///
/// Description, splash and borderless always come from the Windows options
/// file: GameMaker only exposes them there.
/// `sync` is the older spelling of `vsync`; when both exist the later row wins.
pub const SETTING_MAPPINGS: &[SettingMapping] = &[
    row("description_info", SourceScope::Windows, "application", "config/description", ValueKind::String),
    row("version", SourceScope::Platform, "application", "config/version", ValueKind::String),
    row("use_splash", SourceScope::Windows, "application", "boot_splash/show_image", ValueKind::Boolean),
    row("game_speed", SourceScope::Main, "application", "run/max_fps", ValueKind::Numeric),
    row("vsync", SourceScope::Platform, "display", "window/vsync/vsync_mode", VSYNC),
    row("sync", SourceScope::Platform, "display", "window/vsync/vsync_mode", VSYNC),
    row("resize_window", SourceScope::Platform, "display", "window/size/resizable", ValueKind::Boolean),
    row("borderless", SourceScope::Windows, "display", "window/size/borderless", ValueKind::Boolean),
    row(
        "interpolate_pixels",
        SourceScope::Platform,
        "rendering",
        "textures/canvas_textures/default_texture_filter",
        ValueKind::String,
    ),
    row("start_fullscreen", SourceScope::Platform, "display", "window/size/mode", FULLSCREEN),
];

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

fn quoted(value: &str) -> String {
    format!("\"{}\"", value)
}

/// Render a source value as a `project.godot` literal
///
/// `None` means the option was absent and the mapping must be skipped.
/// Boolean tokens in any letter case become bare `true`/`false`; everything
/// else is quoted.
pub fn apply(source: Option<&str>, kind: ValueKind) -> Option<String> {
    let value = source?.trim();
    let literal = match (kind, parse_bool(value)) {
        (ValueKind::Enumerated { when_true, .. }, Some(true)) => quoted(when_true),
        (ValueKind::Enumerated { when_false, .. }, Some(false)) => quoted(when_false),
        (_, Some(b)) => b.to_string(),
        (_, None) => quoted(value),
    };
    Some(literal)
}
