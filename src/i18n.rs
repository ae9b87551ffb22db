//! Cart UI strings.
//!
//! DESIGN
//! ======
//! Components receive a [`Localizer`] through context instead of reaching
//! into a global translation table. The store never touches this module;
//! it only deals in data.

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

use std::sync::Arc;

/// Keys for every string the cart UI renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextKey {
    Title,
    Item,
    Items,
    Empty,
    Total,
    Remove,
    Added,
    Checkout,
    Close,
    AddToCart,
}

impl TextKey {
    /// Dotted key as used by the storefront translation files.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "cart.title",
            Self::Item => "cart.item",
            Self::Items => "cart.items",
            Self::Empty => "cart.empty",
            Self::Total => "cart.total",
            Self::Remove => "cart.remove",
            Self::Added => "cart.added",
            Self::Checkout => "cart.checkout",
            Self::Close => "cart.close",
            Self::AddToCart => "cart.add",
        }
    }
}

/// Supported page languages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Lang {
    #[default]
    He,
    En,
}

impl Lang {
    /// Parse a BCP 47 tag such as `he`, `he-IL`, or `en-US`. Unknown tags
    /// fall back to the default language.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        let primary = tag.split(['-', '_']).next().unwrap_or_default().to_ascii_lowercase();
        match primary.as_str() {
            "en" => Self::En,
            _ => Self::He,
        }
    }

    #[must_use]
    pub fn dir(self) -> &'static str {
        match self {
            Self::He => "rtl",
            Self::En => "ltr",
        }
    }
}

/// String lookup for the rendering layer.
pub trait Localizer {
    fn lang(&self) -> Lang;

    fn text(&self, key: TextKey) -> &str;
}

/// Shared handle placed in component context.
pub type SharedLocalizer = Arc<dyn Localizer + Send + Sync>;

/// Built-in tables for the storefront's two languages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StaticLocalizer {
    lang: Lang,
}

impl StaticLocalizer {
    #[must_use]
    pub fn new(lang: Lang) -> Self {
        Self { lang }
    }

    /// Localizer for the `<html lang>` attribute of the current document.
    /// Outside a browser this is the default language.
    #[must_use]
    pub fn for_document() -> Self {
        Self::new(document_lang())
    }
}

impl Localizer for StaticLocalizer {
    fn lang(&self) -> Lang {
        self.lang
    }

    fn text(&self, key: TextKey) -> &str {
        match self.lang {
            Lang::He => hebrew(key),
            Lang::En => english(key),
        }
    }
}

fn hebrew(key: TextKey) -> &'static str {
    match key {
        TextKey::Title => "סל הקניות",
        TextKey::Item => "פריט",
        TextKey::Items => "פריטים",
        TextKey::Empty => "הסל ריק",
        TextKey::Total => "סה\"כ:",
        TextKey::Remove => "הסר",
        TextKey::Added => "המוצר נוסף לסל",
        TextKey::Checkout => "שליחת הזמנה",
        TextKey::Close => "סגור",
        TextKey::AddToCart => "הוסף לסל",
    }
}

fn english(key: TextKey) -> &'static str {
    match key {
        TextKey::Title => "Shopping cart",
        TextKey::Item => "item",
        TextKey::Items => "items",
        TextKey::Empty => "Your cart is empty",
        TextKey::Total => "Total:",
        TextKey::Remove => "Remove",
        TextKey::Added => "Added to cart",
        TextKey::Checkout => "Send order",
        TextKey::Close => "Close",
        TextKey::AddToCart => "Add to cart",
    }
}

fn document_lang() -> Lang {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
            .and_then(|el| el.get_attribute("lang"))
            .map_or_else(Lang::default, |tag| Lang::from_tag(&tag))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Lang::default()
    }
}

/// Badge text: `"0"` for an empty cart, otherwise the count followed by the
/// singular or plural item word.
#[must_use]
pub fn badge_label(localizer: &dyn Localizer, item_count: u32) -> String {
    match item_count {
        0 => "0".to_owned(),
        1 => format!("1 {}", localizer.text(TextKey::Item)),
        n => format!("{n} {}", localizer.text(TextKey::Items)),
    }
}
