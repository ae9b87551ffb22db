//! Root components: context providers and the storefront shell.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::{cart_button::CartButton, cart_panel::CartPanel, cart_toasts::CartToasts};
use crate::config::CartConfig;
use crate::i18n::{SharedLocalizer, StaticLocalizer};
use crate::state::context::CartContext;

/// Provides the cart and localizer contexts, then renders `children`
/// alongside the cart panel and confirmation toasts.
#[component]
pub fn CartProvider(#[prop(optional)] config: Option<CartConfig>, children: Children) -> impl IntoView {
    let localizer: SharedLocalizer = Arc::new(StaticLocalizer::for_document());
    provide_context(localizer);
    CartContext::provide(config.unwrap_or_default());

    view! {
        {children()}
        <CartPanel/>
        <CartToasts/>
    }
}

/// Root application component.
///
/// Mounts the cart header control. Product cards on the page place
/// `AddToCartButton`s inside the provider.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Storefront"/>
        <CartProvider>
            <header class="storefront-header">
                <CartButton/>
            </header>
        </CartProvider>
    }
}
