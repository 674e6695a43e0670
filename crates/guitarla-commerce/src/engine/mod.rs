//! Stateful cart engine and its persistence port.
//!
//! The engine owns the current [`Cart`](crate::cart::Cart), applies intents
//! through the pure transitions in [`crate::cart`] and hands each new state to
//! an injected [`CartPersistence`].

mod cart_engine;
mod persistence;

pub use cart_engine::CartEngine;
pub use persistence::{CartPersistence, KvPersistence, CART_STORAGE_KEY};
