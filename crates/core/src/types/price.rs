//! Monetary formatting for catalog prices.
//!
//! Prices arrive from the catalog endpoint as plain JSON numbers and are
//! held as [`Decimal`] to keep cart arithmetic exact. Display formatting
//! is a dollar sign plus exactly two decimal places.

use rust_decimal::Decimal;

/// Format an amount for display, e.g. `$299.00`.
#[must_use]
pub fn format_usd(amount: Decimal) -> String {
    format!("${:.2}", amount.round_dp(2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_usd_whole_number() {
        assert_eq!(format_usd(Decimal::from(299)), "$299.00");
    }

    #[test]
    fn test_format_usd_rounds_to_two_places() {
        let amount = Decimal::new(59_899, 2) / Decimal::from(3);
        let formatted = format_usd(amount);
        let cents = formatted.rsplit('.').next().unwrap_or("");
        assert_eq!(cents.len(), 2);
        assert!(formatted.starts_with('$'));
    }

    #[test]
    fn test_format_usd_zero() {
        assert_eq!(format_usd(Decimal::ZERO), "$0.00");
    }
}
