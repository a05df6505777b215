//! Section-scoped editing of `project.godot` text
//!
//! The file is an ordered list of `[section]` headings, each followed by
//! `key=value` lines. Edits touch a single line and leave every other byte of
//! the file as it was, including comments, ordering and unknown sections.

/// Resource path the converted icon is referenced by
pub const ICON_RESOURCE: &str = "res://icon.png";

fn is_heading(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with('[') && trimmed.ends_with(']')
}

fn is_assignment_of(line: &str, key: &str) -> bool {
    line.trim_start()
        .strip_prefix(key)
        .is_some_and(|rest| rest.trim_start().starts_with('='))
}

fn newline_of(text: &str) -> &'static str {
    if text.contains("\r\n") {
        "\r\n"
    } else {
        "\n"
    }
}

fn find_section(lines: &[String], section: &str) -> Option<usize> {
    let heading = format!("[{}]", section);
    lines.iter().position(|l| l.trim() == heading)
}

/// Replace every assignment of `key` between the heading at `start` and the
/// next heading. Returns whether anything was replaced.
fn replace_in_section(lines: &mut [String], start: usize, key: &str, assignment: &str) -> bool {
    let end = lines[start + 1..]
        .iter()
        .position(|l| is_heading(l))
        .map_or(lines.len(), |offset| start + 1 + offset);

    let mut replaced = false;
    for line in &mut lines[start + 1..end] {
        if is_assignment_of(line, key) {
            *line = assignment.to_string();
            replaced = true;
        }
    }
    replaced
}

fn join(lines: &[String], newline: &str) -> String {
    let mut out = lines.join(newline);
    out.push_str(newline);
    out
}

/// Set `key=literal` inside `[section]`
///
/// Existing assignments of `key` are replaced only between this section's
/// heading and the next heading; the same key in other sections is left
/// alone. A missing key is inserted directly below the heading, and a missing
/// section is appended to the end of the file first. Setting the same value
/// twice yields the same text as setting it once.
pub fn set_value(text: &str, section: &str, key: &str, literal: &str) -> String {
    let newline = newline_of(text);
    let assignment = format!("{}={}", key, literal);

    let mut lines: Vec<String> = text.lines().map(str::to_string).collect();

    let start = match find_section(&lines, section) {
        Some(index) => index,
        None => {
            if lines.last().is_some_and(|l| !l.trim().is_empty()) {
                lines.push(String::new());
            }
            lines.push(format!("[{}]", section));
            lines.len() - 1
        }
    };

    if !replace_in_section(&mut lines, start, key, &assignment) {
        lines.insert(start + 1, assignment);
    }
    join(&lines, newline)
}

/// Replace `key=literal` inside `[section]` only where it is already assigned
///
/// Unlike [`set_value`] this never adds a key or a section: when either is
/// missing the text is returned unchanged.
pub fn replace_value(text: &str, section: &str, key: &str, literal: &str) -> String {
    let mut lines: Vec<String> = text.lines().map(str::to_string).collect();
    let Some(start) = find_section(&lines, section) else {
        return text.to_string();
    };
    if !replace_in_section(&mut lines, start, key, &format!("{}={}", key, literal)) {
        return text.to_string();
    }
    join(&lines, newline_of(text))
}

/// Point an existing `config/icon` in `[application]` at the converted icon
pub fn set_icon_path(text: &str) -> String {
    replace_value(
        text,
        "application",
        "config/icon",
        &format!("\"{}\"", ICON_RESOURCE),
    )
}

/// Wrap `value` in double quotes, escaping backslashes and quotes
pub(crate) fn quoted(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}

/// Set `config/name` in `[application]`
pub fn set_project_name(text: &str, name: &str) -> String {
    set_value(text, "application", "config/name", &quoted(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const PROJECT: &str = r#"; Engine configuration file.

config_version=5

[application]

config/name="New Game Project"
config/features=PackedStringArray("4.2", "Forward Plus")
config/icon="res://icon.svg"

[display]

window/size/viewport_width=1280
"#;

    #[test]
    fn test_replace_existing_key() {
        let out = set_value(PROJECT, "display", "window/size/viewport_width", "640");
        assert!(out.contains("window/size/viewport_width=640\n"));
        assert!(!out.contains("1280"));
    }

    #[test]
    fn test_insert_below_heading() {
        let out = set_value(PROJECT, "display", "window/size/borderless", "true");
        assert!(out.contains("[display]\nwindow/size/borderless=true\n"));
    }

    #[test]
    fn test_append_missing_section() {
        let out = set_value(PROJECT, "rendering", "textures/canvas_textures/default_texture_filter", "\"0\"");
        assert!(out.ends_with(
            "window/size/viewport_width=1280\n\n[rendering]\ntextures/canvas_textures/default_texture_filter=\"0\"\n"
        ));
    }

    #[test]
    fn test_idempotent() {
        let once = set_value(PROJECT, "application", "run/max_fps", "\"60\"");
        let twice = set_value(&once, "application", "run/max_fps", "\"60\"");
        assert_eq!(once, twice);

        let once = set_value(PROJECT, "audio", "buses/default_bus_layout", "\"res://x.tres\"");
        let twice = set_value(&once, "audio", "buses/default_bus_layout", "\"res://x.tres\"");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_replace_is_section_scoped() {
        let text = "[section1]\nkey=A\n\n[section2]\nkey=B\n";
        let out = set_value(text, "section1", "key", "C");
        assert_eq!(out, "[section1]\nkey=C\n\n[section2]\nkey=B\n");
    }

    #[test]
    fn test_key_prefix_is_not_a_match() {
        let text = "[application]\nconfig/name_localized={}\n";
        let out = set_value(text, "application", "config/name", "\"X\"");
        assert_eq!(out, "[application]\nconfig/name=\"X\"\nconfig/name_localized={}\n");
    }

    #[test]
    fn test_spaces_around_equals_are_replaced() {
        let text = "[application]\nrun/max_fps = 30\n";
        let out = set_value(text, "application", "run/max_fps", "\"60\"");
        assert_eq!(out, "[application]\nrun/max_fps=\"60\"\n");
    }

    #[test]
    fn test_untouched_content_preserved() {
        let out = set_value(PROJECT, "application", "config/description", "\"d\"");
        let expected = PROJECT.replace(
            "[application]\n",
            "[application]\nconfig/description=\"d\"\n",
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn test_crlf_preserved() {
        let text = "[application]\r\nconfig/name=\"a\"\r\n";
        let out = set_project_name(text, "b");
        assert_eq!(out, "[application]\r\nconfig/name=\"b\"\r\n");
    }

    #[test]
    fn test_icon_path() {
        let out = set_icon_path(PROJECT);
        assert!(out.contains("config/icon=\"res://icon.png\"\n"));
        assert!(!out.contains("icon.svg"));
    }

    #[test]
    fn test_icon_path_never_inserted() {
        let text = "[application]\nconfig/name=\"G\"\n";
        assert_eq!(set_icon_path(text), text);
        assert_eq!(set_icon_path(""), "");

        let elsewhere = "[application]\nconfig/name=\"G\"\n\n[other]\nconfig/icon=\"res://a.svg\"\n";
        assert_eq!(set_icon_path(elsewhere), elsewhere);
    }

    #[test]
    fn test_replace_value_keeps_crlf() {
        let text = "[application]\r\nconfig/icon=\"res://icon.svg\"\r\n";
        assert_eq!(
            set_icon_path(text),
            "[application]\r\nconfig/icon=\"res://icon.png\"\r\n"
        );
    }

    #[test]
    fn test_quoted_escapes() {
        assert_eq!(quoted(r#"a\b"c"#), r#""a\\b\"c""#);
    }

    #[test]
    fn test_project_name_escaped() {
        let out = set_project_name("[application]\n", "My \"Great\" Game");
        assert_eq!(out, "[application]\nconfig/name=\"My \\\"Great\\\" Game\"\n");
    }

    #[test]
    fn test_empty_text() {
        let out = set_value("", "application", "config/name", "\"x\"");
        assert_eq!(out, "[application]\nconfig/name=\"x\"\n");
    }
}
