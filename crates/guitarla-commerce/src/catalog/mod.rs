//! Catalog module.
//!
//! Contains the item type and the read-only catalog the cart draws from.

mod catalog;
mod item;

pub use catalog::Catalog;
pub use item::Item;
