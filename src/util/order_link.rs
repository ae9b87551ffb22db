//! Order handoff to an external messaging channel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Checkout does not talk to a server. The plain-text order summary is handed
//! to an [`OrderSink`]; the storefront's sink opens a WhatsApp chat link with
//! the summary pre-filled. Percent-encoding is the sink's job, not the store's.

#[cfg(test)]
#[path = "order_link_test.rs"]
mod order_link_test;

pub const WHATSAPP_BASE_URL: &str = "https://wa.me";

/// Receives a finished order summary.
pub trait OrderSink {
    fn send(&mut self, summary: &str);
}

/// Opens `https://wa.me/<phone>?text=<summary>` in a new tab.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WhatsAppLink {
    phone: String,
}

impl WhatsAppLink {
    #[must_use]
    pub fn new(phone: impl Into<String>) -> Self {
        Self { phone: phone.into() }
    }

    /// Handoff URL with `summary` percent-encoded into the `text` query.
    #[must_use]
    pub fn url(&self, summary: &str) -> String {
        format!("{WHATSAPP_BASE_URL}/{}?text={}", self.phone, urlencoding::encode(summary))
    }
}

impl OrderSink for WhatsAppLink {
    fn send(&mut self, summary: &str) {
        let url = self.url(summary);
        #[cfg(feature = "hydrate")]
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            if window.open_with_url_and_target(&url, "_blank").is_err() {
                leptos::logging::warn!("failed to open order link");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            leptos::logging::log!("order handoff: {url}");
        }
    }
}
