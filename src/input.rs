//! Token Amount Input
//!
//! Normalizes keystrokes typed into a token amount field into a decimal
//! fragment, and interprets that fragment for display and USD estimates.
//!
//! Sanitizing rules (applied in order):
//!   1. `,` becomes `.` (locale decimal separator)
//!   2. anything outside ASCII `0-9` and `.` is dropped
//!   3. only the first `.` is kept
//!
//! The result may be incomplete (`"12."`, `"."`) or empty. It never contains
//! a second `.` or any other character.

use serde::{Deserialize, Serialize};

/// Sanitize raw field text into a decimal fragment. Total over all input.
pub fn sanitize_amount_input(raw: &str) -> String {
    let mut seen_period = false;
    raw.chars()
        .map(|c| if c == ',' { '.' } else { c })
        .filter(|c| match c {
            '0'..='9' => true,
            '.' if !seen_period => {
                seen_period = true;
                true
            }
            _ => false,
        })
        .collect()
}

/// Current value of a token amount field, always sanitized
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountInput {
    value: String,
}

impl AmountInput {
    /// Build from raw keystrokes
    pub fn from_raw(raw: &str) -> Self {
        Self {
            value: sanitize_amount_input(raw),
        }
    }

    /// Sanitized value as held by the field
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Text shown in the field. A bare `"0"` is hidden so the placeholder shows.
    pub fn display_value(&self) -> &str {
        if self.value == "0" {
            ""
        } else {
            &self.value
        }
    }

    /// Parsed amount, `None` when the field is empty or just `"."`
    pub fn amount(&self) -> Option<f64> {
        self.value.parse::<f64>().ok()
    }

    /// Factor applied to the token's unit USD price for the estimate hint.
    /// An empty or zero field falls back to one unit.
    pub fn usd_multiplier(&self) -> f64 {
        match self.amount() {
            Some(amount) if amount != 0.0 => amount,
            _ => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_sanitize_commas_and_extra_periods() {
        assert_eq!(sanitize_amount_input("1,234.5,6"), "1234.56");
        assert_eq!(sanitize_amount_input("0,5"), "0.5");
        assert_eq!(sanitize_amount_input("1..2"), "1.2");
    }

    #[test]
    fn test_sanitize_empty_and_garbage() {
        assert_eq!(sanitize_amount_input(""), "");
        assert_eq!(sanitize_amount_input("abc"), "");
        assert_eq!(sanitize_amount_input(",.,"), ".");
        assert_eq!(sanitize_amount_input("-$ 12 MAGIC"), "12");
    }

    #[test]
    fn test_sanitize_drops_non_ascii_digits() {
        // Arabic-Indic and fullwidth digits are not 0-9
        assert_eq!(sanitize_amount_input("١٢3"), "3");
        assert_eq!(sanitize_amount_input("４5"), "5");
    }

    #[test]
    fn test_sanitize_keeps_incomplete_fragments() {
        assert_eq!(sanitize_amount_input("12."), "12.");
        assert_eq!(sanitize_amount_input(".5"), ".5");
        assert_eq!(sanitize_amount_input("1e18"), "118");
    }

    #[test]
    fn test_display_value_hides_zero() {
        assert_eq!(AmountInput::from_raw("0").display_value(), "");
        assert_eq!(AmountInput::from_raw("0.").display_value(), "0.");
        assert_eq!(AmountInput::from_raw("0.0").display_value(), "0.0");
        assert_eq!(AmountInput::from_raw("12").display_value(), "12");
    }

    #[test]
    fn test_amount_parsing() {
        assert_eq!(AmountInput::from_raw("").amount(), None);
        assert_eq!(AmountInput::from_raw(".").amount(), None);
        assert_eq!(AmountInput::from_raw("1.").amount(), Some(1.0));
        assert_eq!(AmountInput::from_raw(".5").amount(), Some(0.5));
        assert_eq!(AmountInput::from_raw("1,25").amount(), Some(1.25));
    }

    #[test]
    fn test_usd_multiplier_fallback() {
        assert_eq!(AmountInput::from_raw("").usd_multiplier(), 1.0);
        assert_eq!(AmountInput::from_raw("0").usd_multiplier(), 1.0);
        assert_eq!(AmountInput::from_raw("0.000").usd_multiplier(), 1.0);
        assert_eq!(AmountInput::from_raw("2.5").usd_multiplier(), 2.5);

        // Sanitized text never parses to NaN; overlong digit runs overflow to infinity
        let overlong = format!("1{}", "0".repeat(400));
        assert!(AmountInput::from_raw(&overlong).usd_multiplier().is_infinite());
    }

    proptest! {
        #[test]
        fn prop_sanitized_is_decimal_fragment(raw in any::<String>()) {
            let out = sanitize_amount_input(&raw);
            prop_assert!(out.chars().all(|c| c.is_ascii_digit() || c == '.'));
            prop_assert!(out.matches('.').count() <= 1);
        }

        #[test]
        fn prop_sanitize_is_idempotent(raw in any::<String>()) {
            let once = sanitize_amount_input(&raw);
            prop_assert_eq!(sanitize_amount_input(&once), once);
        }

        #[test]
        fn prop_digits_preserved_in_order(raw in "[0-9a-z,. ]{0,32}") {
            let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
            let kept: String = sanitize_amount_input(&raw)
                .chars()
                .filter(|c| c.is_ascii_digit())
                .collect();
            prop_assert_eq!(kept, digits);
        }
    }
}
