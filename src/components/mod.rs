//! Cart UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render from the signals on [`crate::state::context::CartContext`]
//! and look up every visible string through the injected
//! [`crate::i18n::SharedLocalizer`]. None of them hold cart state of their own.

pub mod add_to_cart_button;
pub mod cart_button;
pub mod cart_panel;
pub mod cart_toasts;
