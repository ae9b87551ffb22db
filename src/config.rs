//! Storefront cart configuration.
//!
//! Everything here has a sensible default for the storefront page; hosts
//! override individual values with the `with_*` setters.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_STORAGE_KEY: &str = "cart";
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₪";
pub const DEFAULT_ORDER_HEADER: &str = "הזמנה חדשה:";
pub const DEFAULT_TOTAL_LABEL: &str = "סה\"כ:";
pub const DEFAULT_ORDER_PHONE: &str = "972544455213";
pub const DEFAULT_CONFIRMATION_MS: u32 = 2000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartConfig {
    /// Durable storage slot holding the serialized cart.
    pub storage_key: String,
    /// Prefix used when rendering prices.
    pub currency_symbol: String,
    /// First line of the order summary.
    pub order_header: String,
    /// Label placed before the total in the order summary.
    pub total_label: String,
    /// Recipient of the order handoff link (international format, digits only).
    pub order_phone: String,
    /// How long the "added to cart" confirmation stays visible.
    pub confirmation_ms: u32,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_owned(),
            order_header: DEFAULT_ORDER_HEADER.to_owned(),
            total_label: DEFAULT_TOTAL_LABEL.to_owned(),
            order_phone: DEFAULT_ORDER_PHONE.to_owned(),
            confirmation_ms: DEFAULT_CONFIRMATION_MS,
        }
    }
}

impl CartConfig {
    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    #[must_use]
    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    #[must_use]
    pub fn with_order_text(mut self, header: impl Into<String>, total_label: impl Into<String>) -> Self {
        self.order_header = header.into();
        self.total_label = total_label.into();
        self
    }

    /// Set the order recipient. Non-digit characters (`+`, spaces, dashes)
    /// are stripped so the value can be dropped into a link path.
    #[must_use]
    pub fn with_order_phone(mut self, phone: &str) -> Self {
        self.order_phone = phone.chars().filter(char::is_ascii_digit).collect();
        self
    }

    #[must_use]
    pub fn with_confirmation_ms(mut self, ms: u32) -> Self {
        self.confirmation_ms = ms;
        self
    }
}
