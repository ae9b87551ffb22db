//! Cart state modules.
//!
//! DESIGN
//! ======
//! `cart` is the pure mapping, `store` adds persistence and notification on
//! top of it, and `context` adapts the store to reactive signals for the
//! component tree.

pub mod cart;
pub mod context;
pub mod store;
