//! Language and text direction as one consistent unit.
//!
//! Direction is never stored: it is always derived from the language, so
//! the two can never disagree.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Supported storefront languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Arabic.
    Ar,
    /// English.
    En,
}

/// Text flow direction for a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Right-to-left.
    Rtl,
    /// Left-to-right.
    Ltr,
}

/// Error parsing a language code.
#[derive(Debug, Error)]
#[error("unsupported language code: {0}")]
pub struct LanguageParseError(String);

impl Language {
    /// The text direction for this language.
    ///
    /// Arabic flows right-to-left; everything else left-to-right.
    #[must_use]
    pub const fn direction(self) -> Direction {
        match self {
            Self::Ar => Direction::Rtl,
            Self::En => Direction::Ltr,
        }
    }

    /// The other supported language.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Ar => Self::En,
            Self::En => Self::Ar,
        }
    }

    /// Returns the BCP 47 language code ("ar" / "en").
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Ar => "ar",
            Self::En => "en",
        }
    }

    /// Parse a language code (case-insensitive, tolerant of region tags
    /// like "ar-JO").
    ///
    /// # Errors
    ///
    /// Returns [`LanguageParseError`] for anything other than Arabic or
    /// English.
    pub fn parse(value: &str) -> Result<Self, LanguageParseError> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.split(['-', '_']).next().unwrap_or("") {
            "ar" => Ok(Self::Ar),
            "en" => Ok(Self::En),
            _ => Err(LanguageParseError(value.to_string())),
        }
    }
}

impl Direction {
    /// Returns the HTML `dir` attribute value ("rtl" / "ltr").
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Rtl => "rtl",
            Self::Ltr => "ltr",
        }
    }
}

impl core::fmt::Display for Language {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

impl core::fmt::Display for Direction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}
