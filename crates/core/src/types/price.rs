//! Type-safe price representation using decimal arithmetic.
//!
//! Amounts are [`Decimal`] values in the currency's standard unit (pounds, not
//! pence). Display formatting follows the `en-GB` conventions the storefront
//! uses everywhere: currency symbol before the amount, comma thousands
//! separators, exactly two fraction digits, and a leading minus sign for
//! negative amounts (`-£5.00`).

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Currency every storefront amount is denominated and displayed in.
pub const STORE_CURRENCY: CurrencyCode = CurrencyCode::GBP;

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., pounds, not pence).
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

    /// Format for display (e.g., "£1,234.50").
    ///
    /// Rounds half away from zero to two decimal places.
    #[must_use]
    pub fn display(&self) -> String {
        let rounded = self
            .amount
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };

        let mut magnitude = rounded.abs();
        magnitude.rescale(2);
        let digits = magnitude.to_string();
        let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

        format!(
            "{sign}{}{}.{fraction}",
            self.currency_code.symbol(),
            group_thousands(whole)
        )
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display())
    }
}

/// Format an amount in the store currency.
///
/// Locale and currency are fixed configuration, not inputs.
#[must_use]
pub fn format_price(amount: Decimal) -> String {
    Price::new(amount, STORE_CURRENCY).display()
}

/// Insert a comma between every group of three integer digits.
fn group_thousands(whole: &str) -> String {
    let len = whole.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// ISO 4217 currency codes the storefront sells in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    GBP,
}

impl CurrencyCode {
    /// Display symbol placed before the amount.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::GBP => "£",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_whole_pounds() {
        assert_eq!(format_price(Decimal::from(185)), "£185.00");
    }

    #[test]
    fn test_format_thousands_separator() {
        assert_eq!(format_price(Decimal::new(123_450, 2)), "£1,234.50");
        assert_eq!(format_price(Decimal::from(1_000_000)), "£1,000,000.00");
    }

    #[test]
    fn test_format_rounds_half_away_from_zero() {
        assert_eq!(format_price(Decimal::new(10_005, 3)), "£10.01");
        assert_eq!(format_price(Decimal::new(-10_005, 3)), "-£10.01");
    }

    #[test]
    fn test_format_negative_and_zero() {
        assert_eq!(format_price(Decimal::from(-5)), "-£5.00");
        assert_eq!(format_price(Decimal::ZERO), "£0.00");
        assert_eq!(format_price(Decimal::new(-1, 3)), "£0.00");
    }

    #[test]
    fn test_price_display_matches_format_price() {
        let price = Price::new(Decimal::new(1999, 2), CurrencyCode::default());
        assert_eq!(price.to_string(), "£19.99");
        assert_eq!(price.to_string(), format_price(price.amount));
    }

    #[test]
    fn test_group_thousands_short_values_untouched() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("1000"), "1,000");
    }
}
