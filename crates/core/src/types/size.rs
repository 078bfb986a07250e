//! Garment size as a free-form variant discriminator.

use serde::{Deserialize, Serialize};

/// A garment size chosen from a product's size set ("S", "M", "L", ...).
///
/// Sizes are free-form strings; the catalog decides which values a product
/// offers, and the cart only uses the value for line identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Size(String);

impl Size {
    /// Create a new size from any string-like value.
    pub fn new(size: impl Into<String>) -> Self {
        Self(size.into())
    }

    /// Get the underlying string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Size {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Size {
    fn from(size: &str) -> Self {
        Self(size.to_string())
    }
}

impl From<String> for Size {
    fn from(size: String) -> Self {
        Self(size)
    }
}
