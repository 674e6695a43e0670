//! Catalog, cart and cart engine for the GuitarLA storefront.
//!
//! - **Catalog**: immutable list of guitars for sale
//! - **Cart**: lines unique by item, quantities bounded to `1..=5`, pure
//!   copy-on-write transitions
//! - **Engine**: owns the current cart and mirrors every change into a
//!   key-value store
//!
//! # Example
//!
//! ```rust
//! use guitarla_commerce::prelude::*;
//! use guitarla_store::MemoryStore;
//!
//! let catalog = Catalog::from_json(r#"[
//!     {"id": 1, "name": "Lukather", "price": 299, "image": "guitarra_01", "description": "Strat"}
//! ]"#).unwrap();
//!
//! let store = MemoryStore::new();
//! let mut engine = CartEngine::initialize(KvPersistence::new(&store));
//!
//! let item = catalog.get(ItemId::new(1)).unwrap();
//! for _ in 0..6 {
//!     engine.add_to_cart(item);
//! }
//!
//! // Quantity is capped at MAX_ITEMS.
//! assert_eq!(engine.cart().quantity_of(item.id), MAX_ITEMS);
//! println!("Total: {}", engine.totals().unwrap().total);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod engine;

pub use error::CommerceError;
pub use ids::ItemId;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ItemId;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{Catalog, Item};

    // Cart
    pub use crate::cart::{Cart, CartIntent, CartLine, CartTotals, LineTotal, MAX_ITEMS, MIN_ITEMS};

    // Engine
    pub use crate::engine::{CartEngine, CartPersistence, KvPersistence, CART_STORAGE_KEY};
}
