//! Localized console messages
//!
//! The language is an explicit value handed to the converter, never read
//! from ambient process state. Only run-level lines (category banners and the
//! final status) are translated; per-file detail lines stay in English.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::converter::Category;

/// Language used for console banners
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English
    #[default]
    En,
    /// German
    De,
}

impl FromStr for Language {
    type Err = std::convert::Infallible;

    /// Parse a language tag; unknown tags fall back to English
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase();
        let primary = tag.split(['-', '_']).next().unwrap_or_default();
        Ok(match primary {
            "de" | "ger" | "deu" | "german" => Language::De,
            _ => Language::En,
        })
    }
}

/// Banner logged when a category starts
pub fn category_banner(lang: Language, category: Category) -> &'static str {
    match (lang, category) {
        (Language::En, Category::GameIcon) => "Converting game icon...",
        (Language::En, Category::ProjectName) => "Updating project name...",
        (Language::En, Category::ProjectSettings) => "Updating project settings...",
        (Language::En, Category::AudioBuses) => "Generating audio bus layout...",
        (Language::En, Category::Sprites) => "Converting sprites...",
        (Language::En, Category::Fonts) => "Converting fonts...",
        (Language::En, Category::Tilesets) => "Converting tilesets...",
        (Language::En, Category::Sounds) => "Converting sounds...",
        (Language::En, Category::Notes) => "Converting notes...",
        (Language::De, Category::GameIcon) => "Spielsymbol wird konvertiert...",
        (Language::De, Category::ProjectName) => "Projektname wird aktualisiert...",
        (Language::De, Category::ProjectSettings) => "Projekteinstellungen werden aktualisiert...",
        (Language::De, Category::AudioBuses) => "Audio-Bus-Layout wird erzeugt...",
        (Language::De, Category::Sprites) => "Sprites werden konvertiert...",
        (Language::De, Category::Fonts) => "Schriftarten werden konvertiert...",
        (Language::De, Category::Tilesets) => "Tilesets werden konvertiert...",
        (Language::De, Category::Sounds) => "Sounds werden konvertiert...",
        (Language::De, Category::Notes) => "Notizen werden konvertiert...",
    }
}

/// Final line of a run that went through every enabled category
pub fn conversion_complete(lang: Language) -> &'static str {
    match lang {
        Language::En => "Conversion complete.",
        Language::De => "Konvertierung abgeschlossen.",
    }
}

/// Final line of a run that was cancelled
pub fn conversion_stopped(lang: Language) -> &'static str {
    match lang {
        Language::En => "Conversion stopped by user.",
        Language::De => "Konvertierung vom Benutzer abgebrochen.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_tags() {
        assert_eq!("de".parse::<Language>().unwrap(), Language::De);
        assert_eq!("de-AT".parse::<Language>().unwrap(), Language::De);
        assert_eq!("eng".parse::<Language>().unwrap(), Language::En);
        assert_eq!("xx".parse::<Language>().unwrap(), Language::En);
    }

    #[test]
    fn test_every_category_has_a_banner() {
        for category in Category::ALL {
            assert!(!category_banner(Language::En, category).is_empty());
            assert_ne!(
                category_banner(Language::En, category),
                category_banner(Language::De, category)
            );
        }
    }
}
