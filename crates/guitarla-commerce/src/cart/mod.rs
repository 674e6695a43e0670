//! Shopping cart module.
//!
//! Contains the cart, its lines, the intents that transform it and the
//! derived totals shown next to it.

mod cart;
mod intent;
mod pricing;

pub use cart::{Cart, CartLine, MAX_ITEMS, MIN_ITEMS};
pub use intent::CartIntent;
pub use pricing::{CartTotals, LineTotal};
