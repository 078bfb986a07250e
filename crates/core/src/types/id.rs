//! Newtype IDs for type-safe entity references.
//!
//! Catalog product IDs are short strings ("1", "2", ...) and the
//! customization flow synthesizes one-off IDs ("custom-<uuid>"), so the
//! wrapper is string-backed rather than numeric. The cart never validates
//! a `ProductId` against the catalog; it is an opaque reference.

use serde::{Deserialize, Serialize};

use crate::types::size::Size;

/// A type-safe product identifier.
///
/// Wraps an arbitrary string so catalog IDs and synthesized one-off IDs
/// share one type without being confusable with other strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a new product ID from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the underlying string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// The identity key of a cart line.
///
/// Two adds with the same `(product_id, size)` pair merge into a single
/// line; any difference in either component creates a separate line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineKey {
    pub product_id: ProductId,
    pub size: Size,
}

impl LineKey {
    /// Create a new line identity key.
    #[must_use]
    pub const fn new(product_id: ProductId, size: Size) -> Self {
        Self { product_id, size }
    }
}

impl core::fmt::Display for LineKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}/{}", self.product_id, self.size)
    }
}
