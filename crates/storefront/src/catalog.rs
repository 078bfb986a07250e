//! The static, read-only product catalog.
//!
//! The catalog ships as an embedded JSON asset parsed once at startup.
//! It is never mutated at runtime; the cart and customization flows only
//! ever read from it. Product display order follows the asset.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use dark_cat_core::{BilingualText, Price, ProductId, Size};

use crate::cart::LineCandidate;

/// The embedded catalog asset.
const CATALOG_JSON: &str = include_str!("../data/catalog.json");

/// Errors loading the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog asset failed to parse.
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two catalog entries share a product ID.
    #[error("duplicate product id in catalog: {0}")]
    DuplicateId(ProductId),
}

/// One catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: BilingualText,
    pub price: Price,
    pub image: String,
    pub images: Vec<String>,
    pub is_new: bool,
    pub category: String,
    pub sizes: Vec<Size>,
    pub description: BilingualText,
    pub fabric: BilingualText,
}

impl Product {
    /// Whether this product is offered in the given size.
    #[must_use]
    pub fn offers_size(&self, size: &Size) -> bool {
        self.sizes.contains(size)
    }

    /// A cart-line candidate for this product in the given size.
    ///
    /// Captures the catalog price at the time of the call; the cart never
    /// re-fetches it.
    #[must_use]
    pub fn line_candidate(&self, size: Size) -> LineCandidate {
        LineCandidate {
            product_id: self.id.clone(),
            name: self.name.clone(),
            unit_price: self.price,
            image: self.image.clone(),
            size,
        }
    }
}

/// The in-memory catalog, keyed by product ID.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Parse the embedded catalog asset.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the asset is malformed or contains
    /// duplicate product IDs.
    pub fn load_embedded() -> Result<Self, CatalogError> {
        let catalog = Self::from_json(CATALOG_JSON)?;
        info!(products = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    /// Parse a catalog from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the JSON is malformed or contains
    /// duplicate product IDs.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;

        for (index, product) in products.iter().enumerate() {
            if products
                .iter()
                .take(index)
                .any(|earlier| earlier.id == product.id)
            {
                return Err(CatalogError::DuplicateId(product.id.clone()));
            }
        }

        Ok(Self { products })
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == *id)
    }

    /// All products, in catalog order.
    #[must_use]
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Products in the given category, in catalog order.
    pub fn by_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Product> {
        self.products
            .iter()
            .filter(move |product| product.category == category)
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
