//! Application state shared across the presentation layer.
//!
//! The cart store and the localization resolver are constructed exactly
//! once here and handed to consumers as explicit references; there are no
//! ambient globals. Ownership makes use-before-construction impossible,
//! which is this design's rendering of the original "used outside its
//! provider" runtime error.

use thiserror::Error;
use tracing::info;

use crate::cart::CartStore;
use crate::catalog::{Catalog, CatalogError};
use crate::config::StorefrontConfig;
use crate::i18n::Localizer;

/// Error constructing the application state.
#[derive(Debug, Error)]
pub enum AppStateError {
    /// The embedded catalog failed to load.
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

/// Construct-once application state for a storefront session.
///
/// Holds the configuration, the read-only catalog, and the two stateful
/// stores. Discarded with the session; there is no teardown.
pub struct AppState {
    config: StorefrontConfig,
    catalog: Catalog,
    cart: CartStore,
    localizer: Localizer,
}

impl AppState {
    /// Create the application state.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded catalog cannot be parsed.
    pub fn new(config: StorefrontConfig) -> Result<Self, AppStateError> {
        let catalog = Catalog::load_embedded()?;
        let localizer = Localizer::new(config.default_language);
        let cart = CartStore::new();

        info!(
            language = %config.default_language,
            products = catalog.len(),
            "storefront state initialized"
        );

        Ok(Self {
            config,
            catalog,
            cart,
            localizer,
        })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub const fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Get a reference to the cart store.
    #[must_use]
    pub const fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// Get a mutable reference to the cart store for issuing commands.
    pub const fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }

    /// Get a reference to the localization resolver.
    #[must_use]
    pub const fn localizer(&self) -> &Localizer {
        &self.localizer
    }

    /// Get a mutable reference to the localization resolver.
    pub const fn localizer_mut(&mut self) -> &mut Localizer {
        &mut self.localizer
    }
}

impl core::fmt::Debug for AppState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .field("catalog_len", &self.catalog.len())
            .field("cart", &self.cart)
            .field("localizer", &self.localizer)
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use dark_cat_core::{Direction, Language};

    #[test]
    fn test_state_starts_with_configured_language() {
        let state = AppState::new(StorefrontConfig::default()).unwrap();
        assert_eq!(state.localizer().language(), Language::Ar);
        assert_eq!(state.localizer().direction(), Direction::Rtl);

        let config = StorefrontConfig {
            default_language: Language::En,
            ..StorefrontConfig::default()
        };
        let state = AppState::new(config).unwrap();
        assert_eq!(state.localizer().language(), Language::En);
        assert_eq!(state.localizer().direction(), Direction::Ltr);
    }

    #[test]
    fn test_state_starts_with_empty_closed_cart() {
        let state = AppState::new(StorefrontConfig::default()).unwrap();
        assert!(state.cart().lines().is_empty());
        assert_eq!(state.cart().count(), 0);
        assert!(!state.cart().is_open());
        assert_eq!(state.catalog().len(), 6);
    }
}
