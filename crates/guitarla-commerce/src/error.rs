//! Commerce error types.

use thiserror::Error;

use crate::ids::ItemId;

/// Errors raised while building a catalog or talking to a store.
///
/// The cart operations themselves never fail; edge cases there are silent
/// no-ops.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Catalog data could not be used.
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// Two catalog entries share an id.
    #[error("Duplicate item id in catalog: {0}")]
    DuplicateItem(ItemId),

    /// Item not found in the catalog.
    #[error("Item not found: {0}")]
    ItemNotFound(ItemId),

    /// Price is negative, non-finite or out of range.
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    /// Quantity outside the allowed per-line bounds.
    #[error("Invalid quantity {quantity} for item {id} (allowed {min}..={max})")]
    InvalidQuantity {
        id: ItemId,
        quantity: u32,
        min: u32,
        max: u32,
    },

    /// Two cart lines share an id.
    #[error("Duplicate cart line for item {0}")]
    DuplicateCartLine(ItemId),

    /// Arithmetic overflow in a money calculation.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Persistent store failure.
    #[error("Store error: {0}")]
    Store(#[from] guitarla_store::StoreError),
}
