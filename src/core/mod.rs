//! In-memory inventory state.

/// Inventory store, validation and store errors.
pub mod store;
