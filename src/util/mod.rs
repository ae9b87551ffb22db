//! Helpers behind the cart store and its views.
//!
//! SYSTEM CONTEXT
//! ==============
//! `storage` holds the cart's persisted slot, `order_link` carries the order
//! summary out to WhatsApp, and `format` turns prices into the text shown in
//! the panel and the order message.

pub mod format;
pub mod order_link;
pub mod storage;
