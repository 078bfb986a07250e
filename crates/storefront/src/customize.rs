//! The custom hoodie design flow.
//!
//! A design carries one piece of artwork (an uploaded image reference or
//! a free-text print, mutually exclusive), a preview scale, and a chosen
//! size. A finished design converts into a cart-line candidate with a
//! synthesized one-off product ID; the cart accepts these without any
//! catalog validation, and two finished designs never merge because each
//! conversion mints a fresh ID.

use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use dark_cat_core::{BilingualText, Price, ProductId, Size};

use crate::cart::LineCandidate;

/// Smallest allowed preview scale.
pub const SCALE_MIN: f32 = 0.5;
/// Largest allowed preview scale.
pub const SCALE_MAX: f32 = 2.0;
/// Scale change per zoom step.
pub const SCALE_STEP: f32 = 0.1;

/// The base hoodie image shown under the print area.
const BASE_IMAGE: &str = "/hoodie-1.jpg";

/// Errors building a custom design.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CustomizeError {
    /// Text artwork with no visible characters.
    #[error("text artwork is empty")]
    EmptyText,

    /// Image artwork with an empty reference.
    #[error("image reference is empty")]
    EmptyImage,
}

/// The single piece of artwork on a design.
///
/// Choosing one kind replaces the other, matching the either/or controls
/// of the customization page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Artwork {
    /// An uploaded image, by opaque reference.
    Image(String),
    /// A free-text print.
    Text(String),
}

/// A custom hoodie design in progress.
#[derive(Debug, Clone)]
pub struct CustomDesign {
    artwork: Artwork,
    size: Size,
    scale: f32,
}

impl CustomDesign {
    /// Create a design with validated artwork and a chosen size.
    ///
    /// # Errors
    ///
    /// Returns [`CustomizeError`] when the artwork is blank.
    pub fn new(artwork: Artwork, size: Size) -> Result<Self, CustomizeError> {
        match &artwork {
            Artwork::Text(text) if text.trim().is_empty() => return Err(CustomizeError::EmptyText),
            Artwork::Image(reference) if reference.is_empty() => {
                return Err(CustomizeError::EmptyImage);
            }
            _ => {}
        }

        Ok(Self {
            artwork,
            size,
            scale: 1.0,
        })
    }

    /// The design's artwork.
    #[must_use]
    pub const fn artwork(&self) -> &Artwork {
        &self.artwork
    }

    /// The chosen size.
    #[must_use]
    pub const fn size(&self) -> &Size {
        &self.size
    }

    /// The current preview scale.
    #[must_use]
    pub const fn scale(&self) -> f32 {
        self.scale
    }

    /// Replace the artwork with a validated new piece.
    ///
    /// # Errors
    ///
    /// Returns [`CustomizeError`] when the artwork is blank; the design
    /// keeps its previous artwork in that case.
    pub fn set_artwork(&mut self, artwork: Artwork) -> Result<(), CustomizeError> {
        let replacement = Self::new(artwork, self.size.clone())?;
        self.artwork = replacement.artwork;
        Ok(())
    }

    /// Enlarge the preview by one step, clamped to [`SCALE_MAX`].
    pub fn zoom_in(&mut self) {
        self.scale = (self.scale + SCALE_STEP).min(SCALE_MAX);
    }

    /// Shrink the preview by one step, clamped to [`SCALE_MIN`].
    pub fn zoom_out(&mut self) {
        self.scale = (self.scale - SCALE_STEP).max(SCALE_MIN);
    }

    /// Convert the finished design into a cart-line candidate.
    ///
    /// Mints a fresh `custom-<uuid>` product ID on every call, so repeat
    /// conversions land as separate cart lines. The price comes from
    /// configuration, not the catalog.
    #[must_use]
    pub fn line_candidate(&self, unit_price: Price) -> LineCandidate {
        let product_id = ProductId::new(format!("custom-{}", Uuid::new_v4()));
        debug!(product_id = %product_id, size = %self.size, "synthesized custom line");
        LineCandidate {
            product_id,
            name: BilingualText::new("هودي مخصص", "Custom Hoodie"),
            unit_price,
            image: BASE_IMAGE.to_string(),
            size: self.size.clone(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::cart::CartStore;
    use dark_cat_core::{CurrencyCode, Language};
    use rust_decimal::Decimal;

    fn custom_price() -> Price {
        Price::new(Decimal::new(7500, 2), CurrencyCode::JOD)
    }

    #[test]
    fn test_blank_artwork_rejected() {
        assert_eq!(
            CustomDesign::new(Artwork::Text("   ".to_string()), Size::new("M")).unwrap_err(),
            CustomizeError::EmptyText
        );
        assert_eq!(
            CustomDesign::new(Artwork::Image(String::new()), Size::new("M")).unwrap_err(),
            CustomizeError::EmptyImage
        );
    }

    #[test]
    fn test_set_artwork_keeps_previous_on_error() {
        let mut design =
            CustomDesign::new(Artwork::Text("DARK CAT".to_string()), Size::new("L")).unwrap();
        assert!(design.set_artwork(Artwork::Text(String::new())).is_err());
        assert_eq!(design.artwork(), &Artwork::Text("DARK CAT".to_string()));

        design
            .set_artwork(Artwork::Image("/uploads/logo.png".to_string()))
            .unwrap();
        assert_eq!(
            design.artwork(),
            &Artwork::Image("/uploads/logo.png".to_string())
        );
    }

    #[test]
    fn test_zoom_clamps_to_bounds() {
        let mut design =
            CustomDesign::new(Artwork::Text("DARK CAT".to_string()), Size::new("M")).unwrap();

        for _ in 0..20 {
            design.zoom_in();
        }
        assert!((design.scale() - SCALE_MAX).abs() < f32::EPSILON);

        for _ in 0..40 {
            design.zoom_out();
        }
        assert!((design.scale() - SCALE_MIN).abs() < 1e-5);
    }

    #[test]
    fn test_line_candidate_shape() {
        let design =
            CustomDesign::new(Artwork::Image("/uploads/art.png".to_string()), Size::new("XL"))
                .unwrap();
        let candidate = design.line_candidate(custom_price());

        assert!(candidate.product_id.as_str().starts_with("custom-"));
        assert_eq!(candidate.name.get(Language::Ar), "هودي مخصص");
        assert_eq!(candidate.name.get(Language::En), "Custom Hoodie");
        assert_eq!(candidate.unit_price, custom_price());
        assert_eq!(candidate.image, "/hoodie-1.jpg");
        assert_eq!(candidate.size.as_str(), "XL");
    }

    #[test]
    fn test_repeat_conversions_never_merge() {
        let design =
            CustomDesign::new(Artwork::Text("DARK CAT".to_string()), Size::new("M")).unwrap();

        let mut cart = CartStore::new();
        cart.add_line(design.line_candidate(custom_price()));
        cart.add_line(design.line_candidate(custom_price()));

        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.count(), 2);
        assert_eq!(cart.total().amount, Decimal::new(15000, 2));
    }
}
