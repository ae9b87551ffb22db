//! Cart modal: line items with quantity steppers, total, and checkout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Redraws from `CartContext::snapshot`; visibility follows
//! `CartContext::visibility`. Clicking the backdrop outside the panel closes
//! it.

#[cfg(test)]
#[path = "cart_panel_test.rs"]
mod cart_panel_test;

use leptos::prelude::*;

use crate::i18n::{Localizer, SharedLocalizer, TextKey};
use crate::state::context::CartContext;
use crate::state::store::CartLine;
use crate::util::format::{format_price, format_unit_line};

#[component]
pub fn CartPanel() -> impl IntoView {
    let cart = expect_context::<CartContext>();
    let localizer = expect_context::<SharedLocalizer>();

    let title = localizer.text(TextKey::Title).to_owned();
    let close_label = localizer.text(TextKey::Close).to_owned();
    let checkout_label = localizer.text(TextKey::Checkout).to_owned();
    let total_label = localizer.text(TextKey::Total).to_owned();
    let dir = localizer.lang().dir();

    let is_hidden = move || !cart.visibility.get().is_open();

    let body = move || {
        let snapshot = cart.snapshot.get();
        if snapshot.is_empty() {
            return view! {
                <p class="cart-panel__empty">{localizer.text(TextKey::Empty).to_owned()}</p>
            }
            .into_any();
        }
        snapshot
            .lines
            .into_iter()
            .map(|line| view! { <CartRow line=line/> })
            .collect::<Vec<_>>()
            .into_any()
    };

    let total = move || total_text(&total_label, &cart.currency_symbol.get_value(), cart.snapshot.get().total);

    view! {
        <div class="cart-modal" class:hidden=is_hidden dir=dir on:click=move |_| cart.close()>
            <div class="cart-panel" on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()>
                <div class="cart-panel__header">
                    <h3 class="cart-panel__title">{title}</h3>
                    <button class="cart-panel__close" title=close_label on:click=move |_| cart.close()>
                        <i class="fas fa-times"></i>
                    </button>
                </div>
                <div class="cart-panel__items">{body}</div>
                <div class="cart-panel__footer">
                    <span class="cart-panel__total">{total}</span>
                    <button class="cart-panel__checkout" on:click=move |_| cart.checkout()>
                        {checkout_label}
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn CartRow(line: CartLine) -> impl IntoView {
    let cart = expect_context::<CartContext>();
    let localizer = expect_context::<SharedLocalizer>();
    let symbol = cart.currency_symbol.get_value();

    let unit_line = format_unit_line(&symbol, line.unit_price, line.quantity);
    let subtotal = format_price(&symbol, line.subtotal());
    let (decrement_to, increment_to) = step_targets(line.quantity);

    let decrement_id = line.product_id.clone();
    let increment_id = line.product_id.clone();
    let remove_id = line.product_id;

    view! {
        <div class="cart-row">
            <div class="cart-row__info">
                <h4 class="cart-row__name">{line.name}</h4>
                <p class="cart-row__unit">{unit_line}</p>
            </div>
            <div class="cart-row__controls">
                <div class="cart-row__stepper">
                    <button class="cart-row__step" on:click=move |_| cart.set_quantity(&decrement_id, decrement_to)>
                        <i class="fas fa-minus"></i>
                    </button>
                    <span class="cart-row__qty">{line.quantity}</span>
                    <button class="cart-row__step" on:click=move |_| cart.set_quantity(&increment_id, increment_to)>
                        <i class="fas fa-plus"></i>
                    </button>
                </div>
                <span class="cart-row__subtotal">{subtotal}</span>
                <button
                    class="cart-row__remove"
                    title=localizer.text(TextKey::Remove).to_owned()
                    on:click=move |_| cart.remove(&remove_id)
                >
                    <i class="fas fa-trash"></i>
                </button>
            </div>
        </div>
    }
}

/// Quantities the `-` and `+` buttons request. Stepping below one removes
/// the line, which the store handles.
fn step_targets(quantity: u32) -> (i64, i64) {
    let current = i64::from(quantity);
    (current - 1, current + 1)
}

/// Footer text, e.g. `Total: ₪42`.
fn total_text(label: &str, symbol: &str, total: f64) -> String {
    format!("{label} {}", format_price(symbol, total))
}
