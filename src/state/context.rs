//! Reactive bridge between the cart store and the component tree.
//!
//! DESIGN
//! ======
//! The store itself is not `Send` (observers are boxed trait objects), so it
//! lives in a local `StoredValue`. Components never read it directly: a
//! signal-backed observer mirrors every notification into `RwSignal`s that
//! the views subscribe to. Mutations go through [`CartContext`] methods,
//! which is the only handle components receive.

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

use leptos::prelude::*;

use crate::config::CartConfig;
use crate::state::cart::LineItem;
use crate::state::store::{CartObserver, CartSnapshot, CartStore, PanelVisibility};
use crate::util::order_link::WhatsAppLink;
use crate::util::storage::BrowserStorage;

/// A transient "added to cart" confirmation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub product_name: String,
}

/// Copyable handle to the page's cart, provided via context by the root
/// component.
#[derive(Clone, Copy)]
pub struct CartContext {
    store: StoredValue<CartStore<BrowserStorage>, LocalStorage>,
    pub snapshot: RwSignal<CartSnapshot>,
    pub visibility: RwSignal<PanelVisibility>,
    pub toasts: RwSignal<Vec<Toast>>,
    pub currency_symbol: StoredValue<String>,
}

impl CartContext {
    /// Restore the cart from `localStorage` and wire it to fresh signals.
    pub fn new(config: CartConfig) -> Self {
        let mut store = CartStore::restored(BrowserStorage, config);
        let snapshot = RwSignal::new(store.snapshot());
        let visibility = RwSignal::new(store.visibility());
        let toasts = RwSignal::new(Vec::new());
        let currency_symbol = StoredValue::new(store.config().currency_symbol.clone());
        let confirmation_ms = store.config().confirmation_ms;

        store.subscribe(SignalObserver {
            snapshot,
            visibility,
            toasts,
            next_toast_id: 0,
            confirmation_ms,
        });

        Self {
            store: StoredValue::new_local(store),
            snapshot,
            visibility,
            toasts,
            currency_symbol,
        }
    }

    /// Build the context and provide it to descendants.
    pub fn provide(config: CartConfig) -> Self {
        let ctx = Self::new(config);
        provide_context(ctx);
        ctx
    }

    pub fn add(&self, product_id: &str, name: &str, unit_price: f64) {
        self.store.update_value(|store| store.add(product_id, name, unit_price));
    }

    pub fn remove(&self, product_id: &str) {
        self.store.update_value(|store| {
            store.remove(product_id);
        });
    }

    pub fn set_quantity(&self, product_id: &str, new_quantity: i64) {
        self.store.update_value(|store| {
            store.set_quantity(product_id, new_quantity);
        });
    }

    pub fn toggle(&self) {
        self.store.update_value(|store| {
            store.toggle_visibility();
        });
    }

    pub fn close(&self) {
        self.store.update_value(CartStore::close);
    }

    /// Send the current order summary to the configured WhatsApp recipient.
    pub fn checkout(&self) {
        self.store.with_value(|store| {
            let mut sink = WhatsAppLink::new(store.config().order_phone.clone());
            store.checkout(&mut sink);
        });
    }

    #[must_use]
    pub fn order_summary(&self) -> String {
        self.store.with_value(CartStore::build_order_summary)
    }

    pub fn dismiss_toast(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }
}

struct SignalObserver {
    snapshot: RwSignal<CartSnapshot>,
    visibility: RwSignal<PanelVisibility>,
    toasts: RwSignal<Vec<Toast>>,
    next_toast_id: u64,
    confirmation_ms: u32,
}

impl CartObserver for SignalObserver {
    fn cart_changed(&mut self, snapshot: &CartSnapshot) {
        self.snapshot.set(snapshot.clone());
    }

    fn item_added(&mut self, _product_id: &str, item: &LineItem) {
        self.next_toast_id += 1;
        let id = self.next_toast_id;
        self.toasts.update(|toasts| {
            toasts.push(Toast {
                id,
                product_name: item.name.clone(),
            });
        });
        schedule_dismiss(self.toasts, id, self.confirmation_ms);
    }

    fn visibility_changed(&mut self, visibility: PanelVisibility) {
        self.visibility.set(visibility);
    }
}

/// Fire-and-forget removal of toast `id` after `ms`.
fn schedule_dismiss(toasts: RwSignal<Vec<Toast>>, id: u64, ms: u32) {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::callback::Timeout::new(ms, move || {
            toasts.update(|t| t.retain(|toast| toast.id != id));
        })
        .forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (toasts, id, ms);
    }
}
