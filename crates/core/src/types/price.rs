//! Type-safe price representation using decimal arithmetic.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price with currency information.
///
/// Amounts use [`Decimal`] so line totals never accumulate floating-point
/// drift. Serializes the amount as a string ("45.00").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., dinars, not fils).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// A zero price in the given currency.
    #[must_use]
    pub const fn zero(currency_code: CurrencyCode) -> Self {
        Self::new(Decimal::ZERO, currency_code)
    }

    /// Scale this unit price by a quantity, keeping the currency.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self::new(self.amount * Decimal::from(quantity), self.currency_code)
    }

    /// Format for display with the currency's symbol (e.g., "45.00 JOD").
    #[must_use]
    pub fn display(&self) -> String {
        format!("{:.2} {}", self.amount, self.currency_code.symbol())
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    /// Jordanian dinar, the store's native currency.
    #[default]
    JOD,
    USD,
    EUR,
}

impl CurrencyCode {
    /// Returns the display symbol for the currency.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::JOD => "JOD",
            Self::USD => "$",
            Self::EUR => "€",
        }
    }

    /// Returns the ISO 4217 code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::JOD => "JOD",
            Self::USD => "USD",
            Self::EUR => "EUR",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_times_scales_amount() {
        let unit = Price::new(Decimal::new(4500, 2), CurrencyCode::JOD);
        let line = unit.times(3);
        assert_eq!(line.amount, Decimal::new(13500, 2));
        assert_eq!(line.currency_code, CurrencyCode::JOD);
    }

    #[test]
    fn test_display_two_decimal_places() {
        let price = Price::new(Decimal::new(75, 0), CurrencyCode::JOD);
        assert_eq!(price.display(), "75.00 JOD");
    }

    #[test]
    fn test_zero() {
        let zero = Price::zero(CurrencyCode::JOD);
        assert_eq!(zero.amount, Decimal::ZERO);
    }
}
