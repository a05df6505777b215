//! Godot audio bus layout generation
//!
//! Each GameMaker audio group becomes one bus in `default_bus_layout.tres`.
//! The layout is regenerated from scratch on every run.

use super::config::quoted;

/// Name GameMaker gives the built-in audio group
pub const DEFAULT_AUDIO_GROUP: &str = "audiogroup_default";

/// Name of the bus every other bus sends to
pub const MASTER_BUS: &str = "Master";

/// File name of the generated layout in the Godot project root
pub const BUS_LAYOUT_FILE: &str = "default_bus_layout.tres";

const RESOURCE_HEADER: &str =
    "[gd_resource type=\"AudioBusLayout\" format=3 uid=\"uid://cvoahc3k1xyrn\"]";

/// One bus record
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBus {
    /// Bus name shown in the Godot mixer
    pub name: String,
    /// Solo flag
    pub solo: bool,
    /// Mute flag
    pub mute: bool,
    /// Skip the bus effects
    pub bypass_fx: bool,
    /// Gain in decibels
    pub volume_db: f32,
    /// Bus this one sends its output to
    pub send: String,
}

impl AudioBus {
    /// Bus with default flags, routed to Master
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            solo: false,
            mute: false,
            bypass_fx: false,
            volume_db: 0.0,
            send: MASTER_BUS.to_string(),
        }
    }
}

fn is_master(group: &str) -> bool {
    group == DEFAULT_AUDIO_GROUP || group == MASTER_BUS
}

/// Map audio groups to buses, keeping their order
///
/// The default group (or a group literally called Master) becomes the Master
/// bus. If neither is present a Master bus is appended. Master is emitted
/// exactly once: a second Master candidate is dropped.
pub fn buses_for_groups(groups: &[String]) -> Vec<AudioBus> {
    let mut buses = Vec::with_capacity(groups.len() + 1);
    let mut has_master = false;

    for group in groups {
        if is_master(group) {
            if has_master {
                tracing::debug!(group = %group, "dropping duplicate master group");
                continue;
            }
            has_master = true;
            buses.push(AudioBus::new(MASTER_BUS));
        } else {
            buses.push(AudioBus::new(group.as_str()));
        }
    }

    if !has_master {
        buses.push(AudioBus::new(MASTER_BUS));
    }
    buses
}

/// Serialize buses as a `.tres` resource
pub fn write_layout(buses: &[AudioBus]) -> String {
    let mut out = String::new();
    out.push_str(RESOURCE_HEADER);
    out.push_str("\n\n[resource]\n");

    for (i, bus) in buses.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!(
            "bus/{i}/name = {}\n\
             bus/{i}/solo = {}\n\
             bus/{i}/mute = {}\n\
             bus/{i}/bypass_fx = {}\n\
             bus/{i}/volume_db = {:?}\n\
             bus/{i}/send = {}\n",
            quoted(&bus.name),
            bus.solo,
            bus.mute,
            bus.bypass_fx,
            bus.volume_db,
            quoted(&bus.send),
        ));
    }
    out
}

/// Generate the full layout text for a list of audio groups
pub fn generate_layout(groups: &[String]) -> String {
    write_layout(&buses_for_groups(groups))
}
