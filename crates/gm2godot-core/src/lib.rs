//! # GM2Godot Core Library
//!
//! Core functionality for converting a GameMaker project into a Godot project.

#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//!
//! This library provides:
//! - Targeted extraction of fields from `.yyp` manifests and `.yy` options files
//! - Mapping of GameMaker options onto `project.godot` settings
//! - Section-scoped rewriting of `project.godot`
//! - Icon conversion and audio bus layout generation
//! - Simple asset copiers for sprites, sounds and notes
//!
//! ## Example
//!
//! ```rust,ignore
//! use gm2godot_core::prelude::*;
//!
//! let options = ConverterOptions::new("MyGame", "my_godot_game", TargetPlatform::host());
//! let converter = Converter::new(options);
//! let report = converter.run(&ConversionSettings::default(), &BufferSink::default());
//! println!("{} categories failed", report.failures().count());
//! ```

pub mod assets;
pub mod converter;
pub mod error;
pub mod gamemaker;
pub mod godot;
pub mod icon;
pub mod messages;
pub mod platform;
pub mod settings;
pub mod sink;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::converter::{
        validate_projects, Category, CategoryOutcome, ConversionReport, ConversionSettings,
        Converter, ConverterOptions,
    };
    pub use crate::error::ConvertError;
    pub use crate::gamemaker::{GameMakerProject, ManifestLookup, SourceScope};
    pub use crate::godot::{GodotProject, PROJECT_FILE};
    pub use crate::messages::Language;
    pub use crate::platform::TargetPlatform;
    pub use crate::sink::{BufferSink, ConversionSink};
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
