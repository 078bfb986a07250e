//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `DARKCAT_DEFAULT_LANGUAGE` - Startup language, "ar" or "en"
//!   (default: ar). Shipped variants of the storefront disagreed on the
//!   starting language, so it is an explicit configuration value rather
//!   than a hardcoded constant.
//! - `DARKCAT_CUSTOM_PRICE` - Unit price for custom hoodies, in JOD
//!   (default: 75.00)

use rust_decimal::Decimal;
use thiserror::Error;

use dark_cat_core::{CurrencyCode, Language, Price};

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Language the localization resolver starts in.
    pub default_language: Language,
    /// Unit price of a custom hoodie.
    pub custom_price: Price,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let default_language = Language::parse(&get_env_or_default(
            "DARKCAT_DEFAULT_LANGUAGE",
            "ar",
        ))
        .map_err(|e| {
            ConfigError::InvalidEnvVar("DARKCAT_DEFAULT_LANGUAGE".to_string(), e.to_string())
        })?;

        let custom_amount = get_env_or_default("DARKCAT_CUSTOM_PRICE", "75.00")
            .parse::<Decimal>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("DARKCAT_CUSTOM_PRICE".to_string(), e.to_string())
            })?;
        if custom_amount.is_sign_negative() {
            return Err(ConfigError::InvalidEnvVar(
                "DARKCAT_CUSTOM_PRICE".to_string(),
                "price must be non-negative".to_string(),
            ));
        }

        Ok(Self {
            default_language,
            custom_price: Price::new(custom_amount, CurrencyCode::JOD),
        })
    }
}

impl Default for StorefrontConfig {
    /// The shipped defaults: Arabic-first, 75.00 JOD custom hoodies.
    fn default() -> Self {
        Self {
            default_language: Language::Ar,
            custom_price: Price::new(Decimal::new(7500, 2), CurrencyCode::JOD),
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StorefrontConfig::default();
        assert_eq!(config.default_language, Language::Ar);
        assert_eq!(config.custom_price.amount, Decimal::new(7500, 2));
        assert_eq!(config.custom_price.currency_code, CurrencyCode::JOD);
    }

    #[test]
    fn test_get_env_or_default_falls_back() {
        assert_eq!(
            get_env_or_default("DARKCAT_TEST_UNSET_VARIABLE", "fallback"),
            "fallback"
        );
    }
}
