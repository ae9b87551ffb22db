//! Cart store — the cart mapping plus persistence, panel visibility, and
//! change notification.
//!
//! DESIGN
//! ======
//! Every mutation follows the same path: update the [`Cart`], write it to the
//! storage slot, then tell observers. Observers are the presentation layer;
//! the store never builds markup or looks up translations.
//!
//! All work runs on the UI thread in response to discrete events, so the
//! store is a plain owned value with no interior locking.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use crate::config::CartConfig;
use crate::state::cart::{Cart, LineItem};
use crate::util::format::format_price;
use crate::util::order_link::OrderSink;
use crate::util::storage::{BrowserStorage, CartStorage};

/// Whether the cart panel is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelVisibility {
    #[default]
    Closed,
    Open,
}

impl PanelVisibility {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}

/// One rendered row of the cart panel.
#[derive(Clone, Debug, PartialEq)]
pub struct CartLine {
    pub product_id: String,
    pub name: String,
    pub unit_price: f64,
    pub quantity: u32,
}

impl CartLine {
    #[must_use]
    pub fn subtotal(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

/// Everything the presentation layer needs to redraw the cart.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CartSnapshot {
    pub lines: Vec<CartLine>,
    pub item_count: u32,
    pub total: f64,
}

impl CartSnapshot {
    #[must_use]
    pub fn of(cart: &Cart) -> Self {
        Self {
            lines: cart
                .lines()
                .map(|(id, item)| CartLine {
                    product_id: id.to_owned(),
                    name: item.name.clone(),
                    unit_price: item.unit_price,
                    quantity: item.quantity,
                })
                .collect(),
            item_count: cart.item_count(),
            total: cart.total(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Receives store notifications.
pub trait CartObserver {
    /// The cart content changed (or the panel opened); redraw from `snapshot`.
    fn cart_changed(&mut self, snapshot: &CartSnapshot);

    /// A unit of `product_id` was just added. Drives the transient
    /// confirmation.
    fn item_added(&mut self, product_id: &str, item: &LineItem) {
        let _ = (product_id, item);
    }

    /// The panel was opened or closed.
    fn visibility_changed(&mut self, visibility: PanelVisibility) {
        let _ = visibility;
    }
}

/// Owns the cart for one page session.
pub struct CartStore<S = BrowserStorage> {
    cart: Cart,
    visibility: PanelVisibility,
    storage: S,
    config: CartConfig,
    observers: Vec<Box<dyn CartObserver>>,
}

impl<S: CartStorage> CartStore<S> {
    /// Empty store. Does not read `storage`.
    pub fn new(storage: S, config: CartConfig) -> Self {
        Self {
            cart: Cart::default(),
            visibility: PanelVisibility::Closed,
            storage,
            config,
            observers: Vec::new(),
        }
    }

    /// Store initialized from whatever `storage` holds under the configured
    /// key. See [`Self::restore`].
    pub fn restored(storage: S, config: CartConfig) -> Self {
        let mut store = Self::new(storage, config);
        store.restore();
        store
    }

    /// Register a presentation observer.
    pub fn subscribe(&mut self, observer: impl CartObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    #[must_use]
    pub fn config(&self) -> &CartConfig {
        &self.config
    }

    #[must_use]
    pub fn visibility(&self) -> PanelVisibility {
        self.visibility
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.cart.total()
    }

    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.cart.item_count()
    }

    #[must_use]
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot::of(&self.cart)
    }

    /// Add one unit of `product_id`, persist, refresh, and signal the
    /// confirmation. Name and price of an existing entry stay as they were.
    pub fn add(&mut self, product_id: &str, name: &str, unit_price: f64) {
        self.cart.add(product_id, name, unit_price);
        self.persist();
        self.refresh();
        if let Some(item) = self.cart.get(product_id) {
            for observer in &mut self.observers {
                observer.item_added(product_id, item);
            }
        }
    }

    /// Remove `product_id`. Absent ids cause no write and no refresh.
    pub fn remove(&mut self, product_id: &str) -> bool {
        if !self.cart.remove(product_id) {
            return false;
        }
        self.persist();
        self.refresh();
        true
    }

    /// Set an exact quantity. Absent ids are ignored; zero or less removes.
    pub fn set_quantity(&mut self, product_id: &str, new_quantity: i64) -> bool {
        if !self.cart.contains(product_id) {
            return false;
        }
        if new_quantity <= 0 {
            return self.remove(product_id);
        }
        self.cart.set_quantity(product_id, new_quantity);
        self.persist();
        self.refresh();
        true
    }

    /// Write the mapping to the configured storage slot.
    pub fn persist(&mut self) {
        match self.cart.to_json() {
            Ok(raw) => self.storage.save(&self.config.storage_key, &raw),
            Err(e) => leptos::logging::warn!("failed to serialize cart: {e}"),
        }
    }

    /// Reload the mapping from storage.
    ///
    /// A missing slot leaves the cart untouched. Unreadable data resets the
    /// cart to empty and is logged; it is never reported to the caller.
    pub fn restore(&mut self) {
        let Some(raw) = self.storage.load(&self.config.storage_key) else {
            return;
        };
        match Cart::from_json(&raw) {
            Ok(cart) => {
                self.cart = cart;
                self.refresh();
            }
            Err(e) => {
                leptos::logging::warn!("error loading cart: {e}");
                self.cart = Cart::default();
            }
        }
    }

    /// Flip the panel between open and closed. Opening also refreshes.
    pub fn toggle_visibility(&mut self) -> PanelVisibility {
        self.set_visibility(self.visibility.toggled());
        self.visibility
    }

    /// Close the panel if it is open.
    pub fn close(&mut self) {
        if self.visibility.is_open() {
            self.set_visibility(PanelVisibility::Closed);
        }
    }

    /// Multi-line plain-text summary for the order channel: header, one
    /// `name (qty x)` line per item, a blank line, then the total.
    #[must_use]
    pub fn build_order_summary(&self) -> String {
        let items = self
            .cart
            .lines()
            .map(|(_, item)| format!("{} ({}x)", item.name, item.quantity))
            .collect::<Vec<_>>()
            .join("\n");
        format!(
            "{}\n{items}\n\n{} {}",
            self.config.order_header,
            self.config.total_label,
            format_price(&self.config.currency_symbol, self.total()),
        )
    }

    /// Hand the order summary to `sink`. The cart is left as is.
    pub fn checkout(&self, sink: &mut impl OrderSink) {
        sink.send(&self.build_order_summary());
    }

    fn set_visibility(&mut self, visibility: PanelVisibility) {
        self.visibility = visibility;
        for observer in &mut self.observers {
            observer.visibility_changed(visibility);
        }
        if visibility.is_open() {
            self.refresh();
        }
    }

    fn refresh(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for observer in &mut self.observers {
            observer.cart_changed(&snapshot);
        }
    }
}
