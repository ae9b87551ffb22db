//! Price and quantity text shared by the order summary and the cart panel.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Render an amount the way the storefront prints prices: whole amounts
/// without a fractional part, everything else with the shortest exact digits.
#[must_use]
pub fn format_amount(amount: f64) -> String {
    if amount == 0.0 {
        // Avoid "-0".
        return "0".to_owned();
    }
    format!("{amount}")
}

/// `symbol` immediately followed by the formatted amount, e.g. `₪20`.
#[must_use]
pub fn format_price(symbol: &str, amount: f64) -> String {
    format!("{symbol}{}", format_amount(amount))
}

/// `₪10 x 2` line used under each item name.
#[must_use]
pub fn format_unit_line(symbol: &str, unit_price: f64, quantity: u32) -> String {
    format!("{} x {quantity}", format_price(symbol, unit_price))
}
