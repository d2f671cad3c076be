//! Price formatting for payment elements.

use std::borrow::Cow;

/// Currencies offered by the editor, as stored in element configuration.
pub const SUPPORTED_CURRENCIES: [&str; 3] = ["usd", "eur", "gbp"];

/// Display symbol of a currency code.
///
/// Known lowercase codes map to their sign; anything else is shown as the
/// uppercased code.
pub fn currency_symbol(code: &str) -> Cow<'static, str> {
    match code {
        "usd" => Cow::Borrowed("$"),
        "eur" => Cow::Borrowed("€"),
        "gbp" => Cow::Borrowed("£"),
        other => Cow::Owned(other.to_uppercase()),
    }
}

/// Format an amount given in the smallest currency unit.
///
/// `format_currency(2500, "usd")` is `"$25.00"`.
pub fn format_currency(amount: i64, code: &str) -> String {
    format!("{}{}", currency_symbol(code), format_amount(amount))
}

/// An amount in the smallest unit as a two-decimal number, e.g. `"10.00"`.
pub fn format_amount(amount: i64) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let cents = amount.unsigned_abs();
    format!("{sign}{}.{:02}", cents / 100, cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_currencies() {
        assert_eq!(format_currency(2500, "usd"), "$25.00");
        assert_eq!(format_currency(1500, "eur"), "€15.00");
        assert_eq!(format_currency(999, "gbp"), "£9.99");
    }

    #[test]
    fn unknown_currency_uses_uppercased_code() {
        assert_eq!(format_currency(100, "xyz"), "XYZ1.00");
        assert_eq!(format_currency(5, "chf"), "CHF0.05");
    }

    #[test]
    fn symbol_lookup_is_case_sensitive() {
        assert_eq!(format_currency(2500, "USD"), "USD25.00");
    }

    #[test]
    fn plain_amounts() {
        assert_eq!(format_amount(1000), "10.00");
        assert_eq!(format_amount(7), "0.07");
    }

    #[test]
    fn zero_and_negative_amounts() {
        assert_eq!(format_currency(0, "usd"), "$0.00");
        assert_eq!(format_currency(-150, "usd"), "$-1.50");
    }
}
