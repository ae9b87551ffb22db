//! Cart error type.
//!
//! Restoring persisted state is the only fallible path in the cart; every
//! mutation is total over its inputs.

/// Error returned by [`crate::state::cart::Cart::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum CartError {
    /// The persisted slot held something that is not a cart mapping.
    #[error("corrupt persisted cart state: {0}")]
    CorruptPersistedState(#[from] serde_json::Error),
}
