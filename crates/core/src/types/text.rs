//! Bilingual display text pairs.

use serde::{Deserialize, Serialize};

use crate::types::locale::Language;

/// A precomputed Arabic/English string pair.
///
/// Cart lines and catalog fields carry both renderings up front; there is
/// no runtime translation of product copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BilingualText {
    /// Arabic rendering.
    pub ar: String,
    /// English rendering.
    pub en: String,
}

impl BilingualText {
    /// Create a new bilingual pair.
    pub fn new(ar: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            ar: ar.into(),
            en: en.into(),
        }
    }

    /// The rendering for the given language.
    #[must_use]
    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::Ar => &self.ar,
            Language::En => &self.en,
        }
    }
}
