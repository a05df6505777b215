//! GameMaker target platforms
//!
//! The selected platform decides which `options/<platform>/` directory is
//! consulted for platform-scoped settings and for the game icon.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConvertError;

/// Platform whose GameMaker options are converted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetPlatform {
    /// `options/windows`
    Windows,
    /// `options/macos`
    Macos,
    /// `options/linux`
    Linux,
}

impl TargetPlatform {
    /// All supported platforms, in the order they are offered to users
    pub const ALL: [TargetPlatform; 3] = [
        TargetPlatform::Linux,
        TargetPlatform::Macos,
        TargetPlatform::Windows,
    ];

    /// The platform matching the host OS; anything unrecognised maps to Windows
    pub fn host() -> Self {
        match std::env::consts::OS {
            "linux" => TargetPlatform::Linux,
            "macos" => TargetPlatform::Macos,
            _ => TargetPlatform::Windows,
        }
    }

    /// Directory and key token used by GameMaker for this platform
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetPlatform::Windows => "windows",
            TargetPlatform::Macos => "macos",
            TargetPlatform::Linux => "linux",
        }
    }
}

impl Default for TargetPlatform {
    fn default() -> Self {
        Self::host()
    }
}

impl fmt::Display for TargetPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetPlatform {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "windows" => Ok(TargetPlatform::Windows),
            "macos" => Ok(TargetPlatform::Macos),
            "linux" => Ok(TargetPlatform::Linux),
            _ => Err(ConvertError::InvalidPlatform(s.to_string())),
        }
    }
}
