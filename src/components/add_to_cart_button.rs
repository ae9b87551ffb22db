//! Per-product "add to cart" button placed on catalog cards.

use leptos::prelude::*;

use crate::i18n::{Localizer, SharedLocalizer, TextKey};
use crate::state::context::CartContext;

#[component]
pub fn AddToCartButton(#[prop(into)] product_id: String, #[prop(into)] name: String, price: f64) -> impl IntoView {
    let cart = expect_context::<CartContext>();
    let localizer = expect_context::<SharedLocalizer>();
    let label = localizer.text(TextKey::AddToCart).to_owned();

    view! {
        <button class="add-to-cart" on:click=move |_| cart.add(&product_id, &name, price)>
            {label}
        </button>
    }
}
