//! Cart mapping — product id to line item.
//!
//! DESIGN
//! ======
//! `Cart` is the single source of truth for what the shopper has selected.
//! It is a plain value with no side effects; persistence and change
//! notification live one layer up in [`super::store::CartStore`].
//!
//! The serialized form is the persisted layout:
//! `{ "<product id>": { "name": .., "price": .., "quantity": .. } }`.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::CartError;

/// A product's quantity and pricing within the cart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Display name captured when the product was first added.
    #[serde(default)]
    pub name: String,
    /// Price per unit, fixed at insertion time. Stored `null` (how JSON
    /// writes NaN and infinities) reads back as `0`.
    #[serde(rename = "price", default, deserialize_with = "price_or_zero")]
    pub unit_price: f64,
    /// Always at least 1 while the entry is present.
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

fn price_or_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

impl LineItem {
    /// `unit_price * quantity` for this line.
    #[must_use]
    pub fn subtotal(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

/// Mapping from product id to [`LineItem`].
///
/// Backed by a `BTreeMap` so iteration (rendering, order summaries) is
/// deterministic; ordering carries no meaning beyond that.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: BTreeMap<String, LineItem>,
}

impl Cart {
    /// Add one unit of `product_id`.
    ///
    /// An existing entry only has its quantity bumped; the `name` and
    /// `unit_price` passed here are ignored in that case.
    pub fn add(&mut self, product_id: &str, name: &str, unit_price: f64) {
        if let Some(item) = self.items.get_mut(product_id) {
            item.quantity = item.quantity.saturating_add(1);
            return;
        }
        self.items.insert(
            product_id.to_owned(),
            LineItem {
                name: name.to_owned(),
                unit_price,
                quantity: 1,
            },
        );
    }

    /// Remove `product_id`. Returns `true` when an entry was deleted.
    pub fn remove(&mut self, product_id: &str) -> bool {
        self.items.remove(product_id).is_some()
    }

    /// Set the quantity of an existing entry.
    ///
    /// Unknown ids are ignored. A quantity of zero or less removes the entry.
    /// Returns `true` when an entry was updated or removed.
    pub fn set_quantity(&mut self, product_id: &str, new_quantity: i64) -> bool {
        if new_quantity <= 0 {
            return self.remove(product_id);
        }
        let Some(item) = self.items.get_mut(product_id) else {
            return false;
        };
        item.quantity = u32::try_from(new_quantity).unwrap_or(u32::MAX);
        true
    }

    /// Sum of `unit_price * quantity` over all entries.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.items.values().map(LineItem::subtotal).sum()
    }

    /// Sum of quantities, used for the badge count.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items
            .values()
            .fold(0u32, |acc, item| acc.saturating_add(item.quantity))
    }

    #[must_use]
    pub fn get(&self, product_id: &str) -> Option<&LineItem> {
        self.items.get(product_id)
    }

    #[must_use]
    pub fn contains(&self, product_id: &str) -> bool {
        self.items.contains_key(product_id)
    }

    /// Entries in product-id order.
    pub fn lines(&self) -> impl Iterator<Item = (&str, &LineItem)> {
        self.items.iter().map(|(id, item)| (id.as_str(), item))
    }

    /// Number of distinct products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Serialize into the persisted layout.
    ///
    /// # Errors
    ///
    /// `serde_json` writes non-finite prices as `null` rather than failing, so
    /// in practice this does not error; such prices restore as `0`.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse the persisted layout.
    ///
    /// Unknown fields are ignored and missing fields take defaults
    /// (`""`, `0`, quantity `1`); a `null` price reads as `0`. Entries stored
    /// with quantity `0` are dropped so every restored entry holds at least
    /// one unit.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::CorruptPersistedState`] when `raw` is not a JSON
    /// object of line items.
    pub fn from_json(raw: &str) -> Result<Self, CartError> {
        let mut cart: Self = serde_json::from_str(raw)?;
        cart.items.retain(|_, item| item.quantity > 0);
        Ok(cart)
    }
}
