//! Header button showing the cart badge and toggling the panel.

use leptos::prelude::*;

use crate::i18n::{Localizer, SharedLocalizer, TextKey, badge_label};
use crate::state::context::CartContext;

#[component]
pub fn CartButton() -> impl IntoView {
    let cart = expect_context::<CartContext>();
    let localizer = expect_context::<SharedLocalizer>();
    let title = localizer.text(TextKey::Title).to_owned();

    let label = move || badge_label(&*localizer, cart.snapshot.get().item_count);
    let has_items = move || cart.snapshot.get().item_count > 0;

    view! {
        <button class="cart-button" class:cart-button--filled=has_items title=title on:click=move |_| cart.toggle()>
            <i class="fas fa-shopping-cart"></i>
            <span class="cart-button__count">{label}</span>
        </button>
    }
}
