//! Stack of transient "added to cart" confirmations.
//!
//! Toasts dismiss themselves after the configured delay; clicking one
//! dismisses it early.

use leptos::prelude::*;

use crate::i18n::{Localizer, SharedLocalizer, TextKey};
use crate::state::context::CartContext;

#[component]
pub fn CartToasts() -> impl IntoView {
    let cart = expect_context::<CartContext>();
    let localizer = expect_context::<SharedLocalizer>();
    let added = localizer.text(TextKey::Added).to_owned();

    view! {
        <div class="cart-toasts">
            {move || {
                cart.toasts
                    .get()
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div class="cart-toast animate-fade-in-up" on:click=move |_| cart.dismiss_toast(id)>
                                {added.clone()}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
